//! Support checks against the current operating system version

use std::fmt;
use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::version::catalog::{self, Release};
use crate::version::error::SupportError;
use crate::version::preferences::{CosmeticVersionProvider, Preferences};
use crate::version::source::{FixedVersionSource, HostVersionSource, VersionSource};
use crate::version::types::OsVersion;

/// Evaluate `minimum <= current <= maximum`, both bounds inclusive.
///
/// A missing `maximum` means there is no upper bound. A missing `minimum` is
/// a caller error.
pub fn is_supported_range(
    minimum: Option<&OsVersion>,
    current: &OsVersion,
    maximum: Option<&OsVersion>,
) -> Result<bool, SupportError> {
    let Some(minimum) = minimum else {
        return Err(SupportError::InvalidArgument("minimum version is required"));
    };

    if current < minimum {
        return Ok(false);
    }

    if maximum.is_some_and(|maximum| maximum < current) {
        return Ok(false);
    }

    Ok(true)
}

/// Resolves catalog bounds and caches the host version once it is known
pub struct VersionSupportChecker {
    source: Box<dyn VersionSource>,
    preferences: Box<dyn CosmeticVersionProvider>,
    current: Mutex<Option<OsVersion>>,
}

impl VersionSupportChecker {
    pub fn new(
        source: impl VersionSource + 'static,
        preferences: impl CosmeticVersionProvider + 'static,
    ) -> Self {
        Self {
            source: Box::new(source),
            preferences: Box::new(preferences),
            current: Mutex::new(None),
        }
    }

    /// Checker for the running host, honoring a pinned `hostVersion`
    pub fn from_config(config: &Config) -> Self {
        let preferences = Preferences::from_config(config);
        match &config.host_version {
            Some(pinned) => {
                info!("Using pinned host version {:?}", pinned);
                Self::new(FixedVersionSource(pinned.clone()), preferences)
            }
            None => Self::new(HostVersionSource, preferences),
        }
    }

    fn lock_current(&self) -> Result<MutexGuard<'_, Option<OsVersion>>, SupportError> {
        self.current.lock().map_err(|_| SupportError::LockPoisoned)
    }

    /// Version of the running OS.
    ///
    /// The source is queried only until one query parses successfully; the
    /// result is then served from the cache. The lock is held across the
    /// query so concurrent first callers never query twice.
    pub fn current_version(&self) -> Result<OsVersion, SupportError> {
        let mut cached = self.lock_current()?;
        if let Some(version) = *cached {
            debug!("Current version cache hit: {}", version);
            return Ok(version);
        }

        debug!("Current version cache miss, querying source");
        let raw = self.source.query().inspect_err(|e| {
            warn!("Version query failed: {}", e);
        })?;
        let version = OsVersion::parse(&raw).inspect_err(|e| {
            warn!("Failed to parse host version: {}", e);
        })?;

        info!("Resolved current version {}", version);
        *cached = Some(version);
        Ok(version)
    }

    /// Forget the cached version so the next access queries the source again
    pub fn reset(&self) {
        let mut cached = self
            .current
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *cached = None;
        drop(cached);
        self.current.clear_poison();
        debug!("Current version cache cleared");
    }

    /// Whether the current version lies within `minimum..=maximum`.
    /// Pass [`Release::NoBound`] as `maximum` for no upper bound.
    pub fn is_supported(&self, minimum: Release, maximum: Release) -> Result<bool, SupportError> {
        let (minimum, maximum) = resolve_bounds(minimum, maximum)?;
        let current = self.current_version()?;
        is_supported_range(Some(&minimum), &current, maximum.as_ref())
    }

    /// [`Self::is_supported`] with no upper bound
    pub fn is_supported_from(&self, minimum: Release) -> Result<bool, SupportError> {
        self.is_supported(minimum, Release::NoBound)
    }

    /// Like [`Self::is_supported`], but evaluated against the configured
    /// cosmetic version. Without one, the true current version is used.
    pub fn is_supported_cosmetic(
        &self,
        minimum: Release,
        maximum: Release,
    ) -> Result<bool, SupportError> {
        let (minimum, maximum) = resolve_bounds(minimum, maximum)?;
        let current = match self.preferences.cosmetic_version() {
            Some(cosmetic) => {
                debug!("Evaluating against cosmetic version {}", cosmetic);
                cosmetic
            }
            None => self.current_version()?,
        };
        is_supported_range(Some(&minimum), &current, maximum.as_ref())
    }

    /// Range check with explicit versions against the current version
    pub fn is_version_supported(
        &self,
        minimum: &OsVersion,
        maximum: Option<&OsVersion>,
    ) -> Result<bool, SupportError> {
        let current = self.current_version()?;
        is_supported_range(Some(minimum), &current, maximum)
    }
}

impl fmt::Debug for VersionSupportChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VersionSupportChecker")
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

fn resolve_bounds(
    minimum: Release,
    maximum: Release,
) -> Result<(OsVersion, Option<OsVersion>), SupportError> {
    let minimum = catalog::lookup(minimum)?.ok_or(SupportError::InvalidArgument(
        "minimum release must name a catalog entry",
    ))?;
    let maximum = catalog::lookup(maximum)?;
    Ok((minimum, maximum))
}
