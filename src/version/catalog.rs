//! Curated catalog of recognized Windows releases
//!
//! Only official upstream releases are listed. Embedded, server-only spins
//! and third-party builds that reuse a mainline build number are left out,
//! since the host reports the same version for them.

use std::fmt;
use std::str::FromStr;

use crate::version::error::CatalogError;
use crate::version::types::OsVersion;

/// Identifier of a named release in the catalog.
///
/// Discriminants are the 1-based catalog positions. `NoBound` is the
/// "no maximum" sentinel and has no catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Release {
    NoBound = 0,
    WindowsXp = 1,
    WindowsServer2003 = 2,
    /// Pre-reset Longhorn build 4074
    Longhorn4074 = 3,
    WindowsVista = 4,
    /// Windows 7 public beta (build 7000)
    Windows7Beta = 5,
    Windows7 = 6,
    Windows8Developer = 7,
    Windows8Consumer = 8,
    Windows8Release = 9,
    Windows8 = 10,
    Windows81 = 11,
    /// Windows 10 technical preview (build 10074)
    Windows10Technical = 12,
    Windows10 = 13,
}

const VERSIONS: [OsVersion; 13] = [
    OsVersion::release(5, 1),
    OsVersion::release(5, 2),
    OsVersion::new(6, 0, 4074),
    OsVersion::release(6, 0),
    OsVersion::new(6, 1, 7000),
    OsVersion::release(6, 1),
    OsVersion::new(6, 2, 8102),
    OsVersion::new(6, 2, 8250),
    OsVersion::new(6, 2, 8400),
    OsVersion::release(6, 2),
    OsVersion::release(6, 3),
    OsVersion::new(10, 0, 10074),
    OsVersion::release(10, 0),
];

impl Release {
    /// Every catalog entry in table order (the sentinel is excluded)
    pub const ALL: [Release; 13] = [
        Release::WindowsXp,
        Release::WindowsServer2003,
        Release::Longhorn4074,
        Release::WindowsVista,
        Release::Windows7Beta,
        Release::Windows7,
        Release::Windows8Developer,
        Release::Windows8Consumer,
        Release::Windows8Release,
        Release::Windows8,
        Release::Windows81,
        Release::Windows10Technical,
        Release::Windows10,
    ];

    /// 1-based catalog position, 0 for the sentinel
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Release::NoBound => "none",
            Release::WindowsXp => "xp",
            Release::WindowsServer2003 => "server-2003",
            Release::Longhorn4074 => "longhorn-4074",
            Release::WindowsVista => "vista",
            Release::Windows7Beta => "7-beta",
            Release::Windows7 => "7",
            Release::Windows8Developer => "8-developer-preview",
            Release::Windows8Consumer => "8-consumer-preview",
            Release::Windows8Release => "8-release-preview",
            Release::Windows8 => "8",
            Release::Windows81 => "8.1",
            Release::Windows10Technical => "10-technical-preview",
            Release::Windows10 => "10",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Release::NoBound => "None",
            Release::WindowsXp => "Windows XP",
            Release::WindowsServer2003 => "Windows Server 2003",
            Release::Longhorn4074 => "Windows Longhorn (Build 4074)",
            Release::WindowsVista => "Windows Vista",
            Release::Windows7Beta => "Windows 7 Beta (Build 7000)",
            Release::Windows7 => "Windows 7",
            Release::Windows8Developer => "Windows 8 Developer Preview",
            Release::Windows8Consumer => "Windows 8 Consumer Preview",
            Release::Windows8Release => "Windows 8 Release Preview",
            Release::Windows8 => "Windows 8",
            Release::Windows81 => "Windows 8.1",
            Release::Windows10Technical => "Windows 10 Technical Preview (Build 10074)",
            Release::Windows10 => "Windows 10",
        }
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl TryFrom<u8> for Release {
    type Error = CatalogError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if index == 0 {
            return Ok(Release::NoBound);
        }
        Release::ALL
            .get(usize::from(index) - 1)
            .copied()
            .ok_or(CatalogError::OutOfRange {
                index: usize::from(index),
                len: VERSIONS.len(),
            })
    }
}

impl FromStr for Release {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Release::NoBound.as_str() {
            return Ok(Release::NoBound);
        }
        Release::ALL
            .into_iter()
            .find(|release| release.as_str() == s)
            .ok_or(())
    }
}

/// Resolve a release to its version; the sentinel resolves to `None`
pub fn lookup(release: Release) -> Result<Option<OsVersion>, CatalogError> {
    version_at(release.index())
}

/// Raw 1-based access to the catalog table. Index 0 is the sentinel.
pub fn version_at(index: usize) -> Result<Option<OsVersion>, CatalogError> {
    if index == 0 {
        return Ok(None);
    }
    VERSIONS
        .get(index - 1)
        .copied()
        .map(Some)
        .ok_or(CatalogError::OutOfRange {
            index,
            len: VERSIONS.len(),
        })
}

/// Catalog entries paired with their versions, in table order
pub fn entries() -> impl Iterator<Item = (Release, OsVersion)> {
    Release::ALL.into_iter().zip(VERSIONS)
}
