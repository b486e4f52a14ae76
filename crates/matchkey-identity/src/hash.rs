//! SHA-256 match keys.

use matchkey_core::EngineConfig;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::detect::is_hashed;
use crate::device::apply_casing;
use crate::normalize::normalize;
use crate::record::{HashedUserRecord, UserRecord};

/// Compute the SHA-256 digest of a string as lowercase hex.
pub fn sha256_hex(value: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    hex::encode(hasher.finalize())
}

/// Digest a normalized value unless it is already a digest.
pub fn hash_value(value: &str) -> String {
    if is_hashed(value) {
        value.to_string()
    } else {
        sha256_hex(value)
    }
}

/// Builds [`HashedUserRecord`]s from raw user records.
#[derive(Debug, Clone, Default)]
pub struct UserDataHasher {
    config: EngineConfig,
}

impl UserDataHasher {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Normalize a record and derive its hashed counterpart.
    ///
    /// The input is not modified, so deriving twice from the same record
    /// gives the same result. Blank external ids are dropped before
    /// hashing, so `external_id` digests align with the non-blank ids only.
    pub fn derive(&self, record: &UserRecord) -> HashedUserRecord {
        let user = normalize(record.clone());
        let hash = |field: &Option<String>| field.as_deref().map(hash_value);

        let hashed = HashedUserRecord {
            em: hash(&user.email),
            ph: hash(&user.phone),
            ge: hash(&user.gender),
            db: hash(&user.date_of_birth),
            ln: hash(&user.last_name),
            first_name: hash(&user.first_name),
            ct: hash(&user.city),
            st: hash(&user.state),
            zp: hash(&user.zip),
            country: hash(&user.country),
            external_id: user.external_id.iter().map(|id| hash_value(id)).collect(),
            client_ip_address: pass(user.client_ip_address),
            client_user_agent: pass(user.client_user_agent),
            fbc: pass(user.click_id),
            fbp: pass(user.browser_id),
            subscription_id: pass(user.subscription_id),
            lead_id: pass(user.lead_id),
            anon_id: pass(user.anon_id),
            madid: pass(user.advertising_id).map(|id| {
                apply_casing(&id, user.device_os.as_deref(), self.config.device_id_casing)
            }),
            fb_login_id: pass(user.fb_login_id),
            partner_id: pass(user.partner_id),
            partner_name: pass(user.partner_name),
        };

        debug!("Derived {} hashed match keys", hashed_field_count(&hashed));
        hashed
    }
}

/// Derive a hashed record with the default configuration.
pub fn derive_hashed_record(record: &UserRecord) -> HashedUserRecord {
    UserDataHasher::default().derive(record)
}

fn pass(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn hashed_field_count(hashed: &HashedUserRecord) -> usize {
    [
        &hashed.em,
        &hashed.ph,
        &hashed.ge,
        &hashed.db,
        &hashed.ln,
        &hashed.first_name,
        &hashed.ct,
        &hashed.st,
        &hashed.zp,
        &hashed.country,
    ]
    .iter()
    .filter(|field| field.is_some())
    .count()
        + hashed.external_id.len()
}
