#[repr(u8)]
#[derive(
    Debug,
    Copy,
    Clone,
    Hash,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    num_enum::IntoPrimitive,
    num_enum::TryFromPrimitive,
)]
pub enum ResourceKind {
    File = 0,
    Directory = 1,
    Class = 2,
    Jar = 3,
    ClasspathJar = 4,
}

impl ResourceKind {
    /// Whether resources of this kind are unpacked onto the worker's
    /// classpath instead of materialized as a single file.
    pub fn is_archive(&self) -> bool {
        matches!(self, ResourceKind::Jar | ResourceKind::ClasspathJar)
    }
}
