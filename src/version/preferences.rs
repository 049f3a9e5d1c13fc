//! Cosmetic version preference

#[cfg(test)]
use mockall::automock;

use crate::config::Config;
use crate::version::types::OsVersion;

/// Supplies the operator-configured version used to preview support checks
#[cfg_attr(test, automock)]
pub trait CosmeticVersionProvider: Send + Sync {
    /// `None` means no override is configured
    fn cosmetic_version(&self) -> Option<OsVersion>;
}

/// Preferences backed by the loaded configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    cosmetic_version: Option<OsVersion>,
}

impl Preferences {
    pub fn new(cosmetic_version: Option<OsVersion>) -> Self {
        Self { cosmetic_version }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.cosmetic_version)
    }
}

impl CosmeticVersionProvider for Preferences {
    fn cosmetic_version(&self) -> Option<OsVersion> {
        self.cosmetic_version
    }
}
