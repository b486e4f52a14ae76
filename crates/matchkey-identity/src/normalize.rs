//! Field canonicalization rules.
//!
//! Every helper returns `None` for values that are empty once cleaned, so
//! absent and blank inputs look the same downstream. Values that already
//! look like SHA-256 digests are trimmed and lowercased, except phone
//! digests which keep their case, so a pre-hashed `ph` may be uppercase hex.

use tracing::trace;

use crate::detect::is_hashed;
use crate::record::UserRecord;
use crate::tables::{country_code, region_code};

/// Normalize every identity field of a record.
///
/// Idempotent: normalizing an already normalized record returns it unchanged.
/// Pass-through fields are carried over as supplied.
pub fn normalize(record: UserRecord) -> UserRecord {
    UserRecord {
        external_id: normalize_external_ids(&record.external_id),
        email: record.email.as_deref().and_then(normalize_email),
        phone: record.phone.as_deref().and_then(normalize_phone),
        first_name: record.first_name.as_deref().and_then(normalize_text),
        last_name: record.last_name.as_deref().and_then(normalize_text),
        gender: record.gender.as_deref().and_then(normalize_gender),
        date_of_birth: record
            .date_of_birth
            .as_deref()
            .and_then(normalize_date_of_birth),
        city: record.city.as_deref().and_then(normalize_text),
        state: record.state.as_deref().and_then(normalize_state),
        zip: record.zip.as_deref().and_then(normalize_text),
        country: record.country.as_deref().and_then(normalize_country),
        ..record
    }
}

/// Remove every whitespace character and lowercase the rest.
pub fn normalize_text(value: &str) -> Option<String> {
    if is_hashed(value) {
        return Some(value.trim().to_lowercase());
    }
    let cleaned: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    non_empty(cleaned)
}

pub fn normalize_email(value: &str) -> Option<String> {
    normalize_text(value)
}

/// Leave a date of birth as supplied; blank values are absent.
///
/// Pre-hashed values are trimmed and lowercased like every other digest.
pub fn normalize_date_of_birth(value: &str) -> Option<String> {
    if is_hashed(value) {
        return Some(value.trim().to_lowercase());
    }
    if value.trim().is_empty() {
        return None;
    }
    Some(value.to_string())
}

/// Keep only the digits of a phone number, country code included.
///
/// A pre-hashed phone is trimmed but keeps its case.
pub fn normalize_phone(value: &str) -> Option<String> {
    if is_hashed(value) {
        return Some(value.trim().to_string());
    }
    non_empty(value.chars().filter(char::is_ascii_digit).collect())
}

/// Collapse `male`/`female` to the single-letter codes.
pub fn normalize_gender(value: &str) -> Option<String> {
    normalize_text(value).map(|gender| match gender.as_str() {
        "male" => "m".to_string(),
        "female" => "f".to_string(),
        _ => gender,
    })
}

/// Rewrite recognised region names to their two-letter code.
pub fn normalize_state(value: &str) -> Option<String> {
    let state = normalize_text(value)?;
    match region_code(&state) {
        Some(code) => Some(code.to_string()),
        None => {
            trace!("State not in region table, keeping lowercase text");
            Some(state)
        }
    }
}

/// Rewrite recognised country names and codes to ISO alpha-2.
pub fn normalize_country(value: &str) -> Option<String> {
    let country = normalize_text(value)?;
    match country_code(&country) {
        Some(code) => Some(code.to_string()),
        None => {
            trace!("Country not in country table, keeping lowercase text");
            Some(country)
        }
    }
}

/// Normalize each external id, dropping the ones that end up empty.
///
/// Indexes after a dropped id shift down by one.
pub fn normalize_external_ids(ids: &[String]) -> Vec<String> {
    ids.iter().filter_map(|id| normalize_text(id)).collect()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIGEST: &str = "973dfe463ec85785f5f95af5ba3906eedb2d931c24e69824a89ea65dba4e813b";

    #[test]
    fn test_email() {
        assert_eq!(normalize_email(" Test@Example.COM ").as_deref(), Some("test@example.com"));
        assert_eq!(normalize_email("a b@c .d").as_deref(), Some("ab@c.d"));
        assert_eq!(normalize_email("   "), None);
    }

    #[test]
    fn test_phone() {
        assert_eq!(normalize_phone("+1 (555) 123-4567").as_deref(), Some("15551234567"));
        assert_eq!(normalize_phone("n/a"), None);
    }

    #[test]
    fn test_hashed_phone_is_untouched() {
        let upper = DIGEST.to_uppercase();
        assert_eq!(normalize_phone(&upper).as_deref(), Some(upper.as_str()));
        assert_eq!(normalize_phone(&format!(" {}\n", DIGEST)).as_deref(), Some(DIGEST));
    }

    #[test]
    fn test_hashed_text_is_only_trimmed_and_lowercased() {
        let upper = DIGEST.to_uppercase();
        assert_eq!(normalize_email(&format!(" {}", upper)).as_deref(), Some(DIGEST));
        assert_eq!(normalize_state(DIGEST).as_deref(), Some(DIGEST));
    }

    #[test]
    fn test_date_of_birth() {
        assert_eq!(normalize_date_of_birth("1985-03-12").as_deref(), Some("1985-03-12"));
        assert_eq!(normalize_date_of_birth(" \t"), None);
        let upper = DIGEST.to_uppercase();
        assert_eq!(normalize_date_of_birth(&format!(" {}\n", upper)).as_deref(), Some(DIGEST));
    }

    #[test]
    fn test_gender() {
        assert_eq!(normalize_gender(" Male ").as_deref(), Some("m"));
        assert_eq!(normalize_gender("Female").as_deref(), Some("f"));
        assert_eq!(normalize_gender("F").as_deref(), Some("f"));
        assert_eq!(normalize_gender("Non Binary").as_deref(), Some("nonbinary"));
    }

    #[test]
    fn test_state() {
        assert_eq!(normalize_state("California").as_deref(), Some("ca"));
        assert_eq!(normalize_state("New  York").as_deref(), Some("ny"));
        assert_eq!(normalize_state("TX").as_deref(), Some("tx"));
        assert_eq!(normalize_state("Zzyzx").as_deref(), Some("zzyzx"));
        assert_eq!(normalize_state("Bavaria").as_deref(), Some("bavaria"));
    }

    #[test]
    fn test_country() {
        assert_eq!(normalize_country("United States").as_deref(), Some("us"));
        assert_eq!(normalize_country("GBR").as_deref(), Some("gb"));
        assert_eq!(normalize_country("Narnia").as_deref(), Some("narnia"));
    }

    #[test]
    fn test_external_ids() {
        let ids = vec!["User 123".to_string(), " ".to_string(), "ABC".to_string()];
        assert_eq!(normalize_external_ids(&ids), vec!["user123", "abc"]);
    }

    #[test]
    fn test_record_is_idempotent() {
        let record = UserRecord {
            external_id: vec!["User123".into()],
            email: Some(" Test@Example.COM ".into()),
            phone: Some("+1 (555) 123-4567".into()),
            first_name: Some("Mary Ann".into()),
            gender: Some("Female".into()),
            date_of_birth: Some("19900101".into()),
            state: Some("North Carolina".into()),
            country: Some("usa".into()),
            zip: Some("27601 ".into()),
            client_user_agent: Some("Mozilla/5.0 (X11)".into()),
            ..Default::default()
        };
        let once = normalize(record);
        assert_eq!(once.first_name.as_deref(), Some("maryann"));
        assert_eq!(once.state.as_deref(), Some("nc"));
        assert_eq!(once.country.as_deref(), Some("us"));
        assert_eq!(once.client_user_agent.as_deref(), Some("Mozilla/5.0 (X11)"));
        assert_eq!(normalize(once.clone()), once);
    }

    #[test]
    fn test_empty_fields_become_absent() {
        let record = normalize(UserRecord {
            email: Some(String::new()),
            date_of_birth: Some(String::new()),
            city: Some(" \t".into()),
            ..Default::default()
        });
        assert_eq!(record, UserRecord::default());
    }
}
