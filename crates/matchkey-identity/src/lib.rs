//! Matchkey Identity — PII canonicalization and hashing.
//!
//! Turns loosely formatted user attributes into the canonical, SHA-256
//! hashed form advertising conversion APIs match on. Normalization rules
//! (case folding, whitespace stripping, region/country code lookup) live in
//! [`normalize`]; digesting and output key mapping live in [`hash`].

pub mod detect;
pub mod device;
pub mod hash;
pub mod normalize;
pub mod record;
pub mod tables;

pub use detect::is_hashed;
pub use device::apply_casing;
pub use hash::{derive_hashed_record, sha256_hex, UserDataHasher};
pub use matchkey_core::DeviceIdCasing;
pub use normalize::normalize;
pub use record::{HashedUserRecord, UserRecord};
