//! Version information for the Poincaré ball gyrovector library.

/// Major version number.
pub const VERSION_MAJOR: u32 = 1;

/// Minor version number.
pub const VERSION_MINOR: u32 = 0;

/// Patch version number.
pub const VERSION_PATCH: u32 = 0;

/// Dotted version string, e.g. `"1.0.0"`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_string_matches_components() {
        let expected = format!("{VERSION_MAJOR}.{VERSION_MINOR}.{VERSION_PATCH}");
        assert_eq!(VERSION, expected);
    }
}
