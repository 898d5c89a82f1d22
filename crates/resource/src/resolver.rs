use crate::ResourceLocation;

/// Looks up a resource id in the current execution environment and
/// reports where its bytes can be read from, if anywhere.
pub trait ResourceResolver {
    fn resolve(&self, id: &str) -> Option<ResourceLocation>;
}
