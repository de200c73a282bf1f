mod loader;
mod types;

pub use loader::{parse_catalog, CatalogError, CatalogLoader, CatalogSnapshot};
pub use types::{ObjectKind, SpaceObject};
