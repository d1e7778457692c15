//! Strongly-typed tags used across the pipeline.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Product plan / audience tag (e.g. `user`, `organization`, `enterprise`).
///
/// Also used as the page key of a [`VersionKey`] bucket. Tags outside the
/// well-known set are carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Plan(String);

/// GHES release number as written in the catalog (e.g. `3.10`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GhesVersion(String);

macro_rules! impl_tag_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub fn new(tag: impl Into<String>) -> Self {
                Self(tag.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $t {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $t {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $t {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl FromStr for $t {
            type Err = CatalogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    return Err(CatalogError::invalid_tag(format!("{}: empty", $name)));
                }
                Ok(Self(trimmed.to_string()))
            }
        }
    };
}

impl_tag_newtype!(Plan, "Plan");
impl_tag_newtype!(GhesVersion, "GhesVersion");

impl Plan {
    pub fn user() -> Self {
        Self::new("user")
    }

    pub fn organization() -> Self {
        Self::new("organization")
    }

    pub fn enterprise() -> Self {
        Self::new("enterprise")
    }
}

/// Prefix of every versioned store key.
pub const VERSION_KEY_PREFIX: &str = "ghes-";

/// Store key of a GHES version bucket, rendered as `ghes-<version>`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VersionKey(GhesVersion);

impl VersionKey {
    pub fn version(&self) -> &GhesVersion {
        &self.0
    }
}

impl From<GhesVersion> for VersionKey {
    fn from(value: GhesVersion) -> Self {
        Self(value)
    }
}

impl From<&GhesVersion> for VersionKey {
    fn from(value: &GhesVersion) -> Self {
        Self(value.clone())
    }
}

impl core::fmt::Display for VersionKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{VERSION_KEY_PREFIX}{}", self.0)
    }
}

impl FromStr for VersionKey {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let version = s
            .strip_prefix(VERSION_KEY_PREFIX)
            .ok_or_else(|| CatalogError::invalid_version_key(s))?;
        let version = GhesVersion::from_str(version)
            .map_err(|_| CatalogError::invalid_version_key(s))?;
        Ok(Self(version))
    }
}

impl TryFrom<String> for VersionKey {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VersionKey> for String {
    fn from(value: VersionKey) -> Self {
        value.to_string()
    }
}
