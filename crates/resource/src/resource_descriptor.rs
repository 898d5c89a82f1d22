use std::fmt::Display;

use crate::{Error, ResourceKind, ResourceLocation, ResourceResolver, Result};

/// Describes a single resource to deploy to the cluster before a job
/// runs. Immutable once constructed.
#[derive(Debug, Clone, Hash, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResourceDescriptor {
    location: ResourceLocation,
    id: String,
    kind: ResourceKind,
}

impl ResourceDescriptor {
    /// Creates a descriptor with the given properties. The id must
    /// contain at least one non-whitespace character.
    pub fn new(
        location: ResourceLocation,
        id: impl Into<String>,
        kind: ResourceKind,
    ) -> Result<ResourceDescriptor> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::InvalidArgument("id", "id cannot be empty".to_string()));
        }

        Ok(ResourceDescriptor { location, id, kind })
    }

    /// Creates a descriptor for a class to be deployed. The id is the
    /// fully qualified class name with `.` replaced by `/` plus a
    /// `.class` suffix, and the location is whatever the resolver
    /// reports for that id.
    pub fn from_class(
        class_name: &str,
        resolver: &impl ResourceResolver,
    ) -> Result<ResourceDescriptor> {
        if class_name.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "class_name",
                "class name cannot be empty".to_string(),
            ));
        }

        let id = format!("{}.class", class_name.replace('.', "/"));
        let location = resolver.resolve(&id).ok_or_else(|| {
            Error::InvalidArgument(
                "class_name",
                format!("couldn't derive location from class {}", class_name),
            )
        })?;

        Ok(ResourceDescriptor {
            location,
            id,
            kind: ResourceKind::Class,
        })
    }

    /// The location the resource is available at. Resolved on the local
    /// machine during job submission.
    pub fn location(&self) -> &ResourceLocation {
        &self.location
    }

    /// The id under which the resource will be stored in the cluster.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }
}

impl Display for ResourceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ResourceDescriptor {{ location: {}, id: '{}', kind: {:?} }}",
            self.location, self.id, self.kind
        )
    }
}
