pub mod catalog;
pub mod errors;
pub mod locator;
pub mod models;
pub mod plugin;
pub mod validator;

// Re-export key types at crate root for convenience.
pub use catalog::{CatalogClient, CatalogConfig, CatalogResponse, HttpCatalog};
pub use errors::{RejectionError, RejectionKind, Result};
pub use locator::DatasetLocation;
pub use models::{Provider, Resource, ResourceData};
pub use plugin::{CkanDataset, ResourcePlugin};
pub use validator::{validate_ownership, OwnershipValidator};
