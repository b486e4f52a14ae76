//! Advertising identifier casing.
//!
//! The conversions API forwards device ids untouched while the pixel side
//! expects IDFAs uppercased and AAIDs lowercased. Which convention applies
//! is chosen by [`DeviceIdCasing`].

use matchkey_core::DeviceIdCasing;

const IOS_FAMILY: &[&str] = &["ios", "ipados", "iphoneos", "tvos"];

/// Apply the casing policy to an advertising id produced on `os`.
pub fn apply_casing(id: &str, os: Option<&str>, policy: DeviceIdCasing) -> String {
    match policy {
        DeviceIdCasing::Preserve => id.to_string(),
        DeviceIdCasing::ByDeviceOs => {
            let os: String = os
                .unwrap_or_default()
                .split_whitespace()
                .collect::<String>()
                .to_lowercase();
            if IOS_FAMILY.contains(&os.as_str()) {
                id.to_uppercase()
            } else if os == "android" {
                id.to_lowercase()
            } else {
                id.to_string()
            }
        }
    }
}
