//! Derived product identity.
//!
//! The application identifier lets the installer recognise earlier installs
//! of the same publisher/product/version, so it must never change for a given
//! triple.

use uuid::Uuid;

/// Computes the stable application identifier.
///
/// MD5 of `publisher + name + version` (no separator, UTF-8), with the 16
/// digest bytes taken verbatim as the UUID. Version and variant bits are not
/// rewritten.
pub fn app_id(publisher: &str, name: &str, version: &str) -> Uuid {
    let digest = md5::compute(format!("{publisher}{name}{version}").as_bytes());
    Uuid::from_bytes(digest.0)
}

/// Base filename (without extension) of the compiled installer.
pub fn output_base_filename(publisher: &str, name: &str, version: &str) -> String {
    format!("Install {publisher} {name} {version}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_id_matches_known_digest() {
        // md5("AcmeApp1.0") = 6a091ce25472d5054eb35b43d6754dc9
        assert_eq!(
            app_id("Acme", "App", "1.0").to_string(),
            "6a091ce2-5472-d505-4eb3-5b43d6754dc9"
        );
        assert_eq!(
            app_id("Contoso", "Widget", "2.3.4").to_string(),
            "35675b4b-6dd1-b50d-0743-a204c8dfbf76"
        );
    }

    #[test]
    fn app_id_is_deterministic() {
        let first = app_id("Acme", "App", "1.0").to_string();
        let second = app_id("Acme", "App", "1.0").to_string();
        assert_eq!(first, second);
        assert_eq!(first.len(), 36);
    }

    #[test]
    fn app_id_changes_with_each_input() {
        let base = app_id("Acme", "App", "1.0");
        assert_ne!(base, app_id("Acme Corp", "App", "1.0"));
        assert_ne!(base, app_id("Acme", "App2", "1.0"));
        assert_eq!(
            app_id("Acme", "App", "1.1").to_string(),
            "cc0fc950-f1e2-25ff-37ce-77c2ca64a0e3"
        );
    }

    #[test]
    fn output_base_filename_is_plain_concatenation() {
        assert_eq!(
            output_base_filename("Acme", "App", "1.0"),
            "Install Acme App 1.0"
        );
        assert_eq!(output_base_filename("", "", ""), "Install   ");
    }
}
