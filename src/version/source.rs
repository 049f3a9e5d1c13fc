//! Sources for the host's reported version string

#[cfg(test)]
use mockall::automock;

use tracing::debug;

use crate::version::error::QueryError;

/// Trait for querying the raw `major.minor.build` string of the running OS
#[cfg_attr(test, automock)]
pub trait VersionSource: Send + Sync {
    /// Issue one query against the host
    ///
    /// # Returns
    /// * `Ok(String)` - The version string as reported, not yet parsed
    /// * `Err(QueryError)` - If the underlying data source is unavailable
    fn query(&self) -> Result<String, QueryError>;
}

/// Queries the operating system the process is running on
#[derive(Debug, Default, Clone, Copy)]
pub struct HostVersionSource;

impl VersionSource for HostVersionSource {
    #[cfg(windows)]
    fn query(&self) -> Result<String, QueryError> {
        use windows::Wdk::System::SystemServices::RtlGetVersion;
        use windows::Win32::System::SystemInformation::OSVERSIONINFOW;

        let mut info = OSVERSIONINFOW {
            dwOSVersionInfoSize: std::mem::size_of::<OSVERSIONINFOW>() as u32,
            ..Default::default()
        };

        let status = unsafe { RtlGetVersion(&mut info) };
        if status.is_err() {
            return Err(QueryError::Status(status.0));
        }

        let version = format!(
            "{}.{}.{}",
            info.dwMajorVersion, info.dwMinorVersion, info.dwBuildNumber
        );
        debug!("RtlGetVersion reported {}", version);
        Ok(version)
    }

    #[cfg(not(windows))]
    fn query(&self) -> Result<String, QueryError> {
        debug!("Host version query is unavailable on this platform");
        Err(QueryError::Unsupported(std::env::consts::OS))
    }
}

/// Always reports the same string; used when the version is pinned in config
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedVersionSource(pub String);

impl VersionSource for FixedVersionSource {
    fn query(&self) -> Result<String, QueryError> {
        if self.0.trim().is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn host_source_is_unsupported_off_windows() {
        let result = HostVersionSource.query();

        assert!(matches!(result, Err(QueryError::Unsupported(os)) if os == std::env::consts::OS));
    }

    #[cfg(windows)]
    #[test]
    fn host_source_reports_parseable_windows_version() {
        let raw = HostVersionSource.query().unwrap();

        let version = crate::version::types::OsVersion::parse(&raw).unwrap();
        assert!(version.major >= 5);
    }

    #[test]
    fn fixed_source_returns_configured_string() {
        let source = FixedVersionSource("10.0.22631".to_string());
        assert_eq!(source.query().unwrap(), "10.0.22631");
    }

    #[test]
    fn fixed_source_with_blank_string_is_empty() {
        let source = FixedVersionSource("  ".to_string());
        assert!(matches!(source.query(), Err(QueryError::Empty)));
    }
}
