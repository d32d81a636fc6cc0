//! Resource plugin hooks.
//!
//! The host calls these around a resource's lifecycle. Only the two
//! pre-validation hooks of [`CkanDataset`] do anything; the rest exist so
//! the plugin satisfies the host's interface.

use std::path::Path;

use crate::catalog::{CatalogClient, HttpCatalog};
use crate::errors::Result;
use crate::models::{Provider, Resource, ResourceData};
use crate::validator::OwnershipValidator;

/// Lifecycle hooks a resource plugin exposes to the host.
///
/// Every hook defaults to a no-op; validation hooks return the submission
/// unchanged. An `Err` tells the host to stop and deny the operation.
pub trait ResourcePlugin {
    /// Before a new resource is validated and created.
    fn on_pre_create_validation(
        &self,
        _provider: &Provider,
        data: ResourceData,
        _file: Option<&Path>,
    ) -> Result<ResourceData> {
        Ok(data)
    }

    fn on_post_create_validation(
        &self,
        _provider: &Provider,
        _data: &ResourceData,
        _file: Option<&Path>,
    ) -> Result<()> {
        Ok(())
    }

    fn on_pre_create(&self, _provider: &Provider, _data: &ResourceData) -> Result<()> {
        Ok(())
    }

    fn on_post_create(&self, _resource: &Resource) -> Result<()> {
        Ok(())
    }

    fn on_pre_update(&self, _resource: &Resource) -> Result<()> {
        Ok(())
    }

    fn on_post_update(&self, _resource: &Resource) -> Result<()> {
        Ok(())
    }

    /// Before a new version of `resource` is validated.
    fn on_pre_upgrade_validation(
        &self,
        _resource: &Resource,
        _provider: &Provider,
        data: ResourceData,
        _file: Option<&Path>,
    ) -> Result<ResourceData> {
        Ok(data)
    }

    fn on_post_upgrade_validation(
        &self,
        _resource: &Resource,
        _data: &ResourceData,
        _file: Option<&Path>,
    ) -> Result<()> {
        Ok(())
    }

    fn on_pre_upgrade(&self, _resource: &Resource) -> Result<()> {
        Ok(())
    }

    fn on_post_upgrade(&self, _resource: &Resource) -> Result<()> {
        Ok(())
    }

    fn on_pre_delete(&self, _resource: &Resource) -> Result<()> {
        Ok(())
    }

    fn on_post_delete(&self, _resource: &Resource) -> Result<()> {
        Ok(())
    }
}

/// Plugin for resources that link to a dataset on a CKAN catalog.
///
/// Creation and upgrade are refused unless the provider is the dataset's
/// creator on the catalog.
pub struct CkanDataset<C = HttpCatalog> {
    validator: OwnershipValidator<C>,
}

impl CkanDataset<HttpCatalog> {
    /// Plugin backed by an HTTP client configured from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(HttpCatalog::from_env())
    }
}

impl<C: CatalogClient> CkanDataset<C> {
    #[must_use]
    pub fn new(client: C) -> Self {
        Self {
            validator: OwnershipValidator::new(client),
        }
    }

    #[must_use]
    pub fn validator(&self) -> &OwnershipValidator<C> {
        &self.validator
    }

    fn check(&self, provider: &Provider, data: ResourceData) -> Result<ResourceData> {
        self.validator.validate_ownership(provider, data.link()?)?;
        Ok(data)
    }
}

impl<C: CatalogClient> ResourcePlugin for CkanDataset<C> {
    fn on_pre_create_validation(
        &self,
        provider: &Provider,
        data: ResourceData,
        _file: Option<&Path>,
    ) -> Result<ResourceData> {
        self.check(provider, data)
    }

    fn on_pre_upgrade_validation(
        &self,
        _resource: &Resource,
        provider: &Provider,
        data: ResourceData,
        _file: Option<&Path>,
    ) -> Result<ResourceData> {
        self.check(provider, data)
    }
}
