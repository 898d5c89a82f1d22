use std::path::PathBuf;

use resource::{ResourceLocation, ResourceResolver};
use tracing::debug;

/// Resolves resource ids against an ordered list of root directories,
/// the way a classpath is searched. The first root containing a regular
/// file at the id's relative path wins.
pub struct SearchPathResolver {
    roots: Vec<PathBuf>,
}

impl SearchPathResolver {
    pub fn new(roots: impl IntoIterator<Item = PathBuf>) -> Self {
        SearchPathResolver {
            roots: roots.into_iter().collect(),
        }
    }
}

impl ResourceResolver for SearchPathResolver {
    fn resolve(&self, id: &str) -> Option<ResourceLocation> {
        for root in &self.roots {
            let candidate = root.join(id);
            if !candidate.is_file() {
                continue;
            }
            if let Ok(canonical) = dunce::canonicalize(&candidate) {
                if let Ok(location) = ResourceLocation::from_path(&canonical) {
                    debug!(root = %root.display(), id, "resolved resource");
                    return Some(location);
                }
            }
        }

        debug!(id, "resource not found in any root");
        None
    }
}
