//! Configuration module
//!
//! Reporter settings and configuration file handling.

mod file;

pub use file::ConfigFile;

use serde::{Deserialize, Serialize};

/// Reporter settings.
///
/// `framework_token` names the host test framework; stack frames containing
/// it (case-insensitive) are treated as framework-internal and skipped when
/// locating a failure's source.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReporterConfig {
    #[serde(default = "default_framework_token")]
    pub framework_token: String,
}

fn default_framework_token() -> String {
    "jasmine".to_string()
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            framework_token: default_framework_token(),
        }
    }
}

impl ReporterConfig {
    /// Create a config for a host framework identified by `token`
    pub fn for_framework(token: impl Into<String>) -> Self {
        Self {
            framework_token: token.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_token() {
        assert_eq!(ReporterConfig::default().framework_token, "jasmine");
    }

    #[test]
    fn test_for_framework() {
        let config = ReporterConfig::for_framework("mocha");
        assert_eq!(config.framework_token, "mocha");
    }
}
