use std::{fmt::Display, path::Path};

use url::Url;

use crate::{Error, Result};

/// Where the bytes of a resource can be retrieved from, kept as the
/// canonical string form of its URL. Two locations are equal when the
/// canonical forms match, regardless of how they were originally spelled.
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct ResourceLocation {
    value: String,
}

impl ResourceLocation {
    pub fn parse(location: &str) -> Result<ResourceLocation> {
        let url = Url::parse(location)
            .map_err(|err| Error::InvalidArgument("location", err.to_string()))?;
        Ok(ResourceLocation::from_url(url))
    }

    pub fn from_url(url: Url) -> ResourceLocation {
        ResourceLocation { value: url.into() }
    }

    /// Converts an absolute filesystem path into a `file://` location.
    pub fn from_path(path: &Path) -> Result<ResourceLocation> {
        let url = Url::from_file_path(path).map_err(|_| {
            Error::InvalidArgument("location", format!("path {:?} is not absolute", path))
        })?;
        Ok(ResourceLocation::from_url(url))
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl Display for ResourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl From<ResourceLocation> for String {
    fn from(value: ResourceLocation) -> Self {
        value.value
    }
}
