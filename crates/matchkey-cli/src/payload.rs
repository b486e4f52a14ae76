//! Reading framework payloads and writing results.

use std::io::Read;
use std::path::Path;

use matchkey_core::{Error, Result};
use matchkey_identity::UserRecord;
use serde::Serialize;

/// Payloads read from one input, remembering how they were laid out.
#[derive(Debug, PartialEq)]
pub enum Payloads {
    /// A single JSON array.
    Array(Vec<UserRecord>),
    /// One or more whitespace-separated JSON objects.
    Stream(Vec<UserRecord>),
}

impl Payloads {
    pub fn records(&self) -> &[UserRecord] {
        match self {
            Payloads::Array(records) | Payloads::Stream(records) => records,
        }
    }
}

/// Parse payloads from text.
pub fn parse(input: &str) -> Result<Payloads> {
    let trimmed = input.trim_start();
    if trimmed.is_empty() {
        return Err(Error::Input("no payloads supplied".into()));
    }
    if trimmed.starts_with('[') {
        return Ok(Payloads::Array(serde_json::from_str(trimmed)?));
    }

    let records = serde_json::Deserializer::from_str(trimmed)
        .into_iter::<UserRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(Payloads::Stream(records))
}

/// Read payloads from a file, or stdin when no path is given.
pub fn read(path: Option<&Path>) -> Result<Payloads> {
    let input = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    parse(&input)
}

/// Render results in the same layout the payloads arrived in.
pub fn render<T: Serialize>(layout: &Payloads, results: &[T]) -> Result<String> {
    match layout {
        Payloads::Array(_) => Ok(serde_json::to_string_pretty(results)?),
        Payloads::Stream(_) => {
            let lines = results
                .iter()
                .map(serde_json::to_string)
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_array() {
        let payloads = parse(r#"[{"email": "a@b.c"}, {"phone": "123"}]"#).unwrap();
        assert!(matches!(payloads, Payloads::Array(_)));
        assert_eq!(payloads.records().len(), 2);
    }

    #[test]
    fn test_parse_single_object_and_ndjson() {
        let single = parse(r#"{"email": "a@b.c"}"#).unwrap();
        assert!(matches!(single, Payloads::Stream(ref r) if r.len() == 1));

        let lines = parse("{\"email\": \"a@b.c\"}\n{\"externalId\": \"x\"}\n").unwrap();
        assert_eq!(lines.records().len(), 2);
        assert_eq!(lines.records()[1].external_id, vec!["x".to_string()]);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse("  \n"), Err(Error::Input(_))));
        assert!(matches!(parse("{not json"), Err(Error::Json(_))));
        assert!(matches!(parse(r#"{"externalId": 5}"#), Err(Error::Json(_))));
    }

    #[test]
    fn test_render_matches_layout() {
        let stream = parse("{}\n{}").unwrap();
        let out = render(&stream, &[serde_json::json!({"a": 1}), serde_json::json!({"b": 2})]).unwrap();
        assert_eq!(out, "{\"a\":1}\n{\"b\":2}");

        let array = parse("[{}]").unwrap();
        let out = render(&array, &[serde_json::json!({})]).unwrap();
        assert_eq!(out, "[\n  {}\n]");
    }
}
