//! Dataset ownership check.
//!
//! A provider owns a dataset when the catalog reports the provider's
//! username as the dataset creator. Both lookups use the provider's own
//! access token and are repeated on every call.

use log::debug;

use crate::catalog::CatalogClient;
use crate::errors::{RejectionError, RejectionKind, Result};
use crate::locator::DatasetLocation;
use crate::models::{DatasetShow, Provider, UserShow};

/// Verifies that providers own the datasets they link to.
pub struct OwnershipValidator<C> {
    client: C,
}

impl<C: CatalogClient> OwnershipValidator<C> {
    #[must_use]
    pub fn new(client: C) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Check that `provider` created the dataset at `link`.
    ///
    /// See [`validate_ownership`].
    pub fn validate_ownership(&self, provider: &Provider, link: &str) -> Result<()> {
        validate_ownership(&self.client, provider, link)
    }
}

/// Check that `provider` created the dataset at `link`.
///
/// Issues no request when the link is malformed, one `dataset_show` lookup
/// when that lookup fails, and otherwise a `dataset_show` followed by a
/// `user_show` for the creator.
///
/// A failed `user_show` is reported as [`RejectionKind::NotOwner`]: every
/// user can read their own profile, so a provider who cannot read the
/// creator's profile is taken not to be the creator.
pub fn validate_ownership<C>(client: &C, provider: &Provider, link: &str) -> Result<()>
where
    C: CatalogClient + ?Sized,
{
    let location = DatasetLocation::parse(link)?;
    debug!(
        "checking that {} owns dataset {} on {}",
        provider.username, location.dataset_id, location.base
    );

    let dataset_res = client.get(&location.dataset_show_url(), &provider.access_token)?;
    match dataset_res.status {
        200 => {}
        404 => {
            return Err(RejectionError::new(
                RejectionKind::DatasetNotFound,
                "The provided dataset does not exist",
            ));
        }
        _ => {
            return Err(RejectionError::new(
                RejectionKind::NotAuthorized,
                "The user is not authorized to access the dataset",
            ));
        }
    }
    let dataset: DatasetShow = dataset_res.json()?;
    let creator_id = dataset.result.creator_user_id;

    let user_res = client.get(&location.user_show_url(&creator_id), &provider.access_token)?;
    if user_res.status != 200 {
        debug!(
            "user_show for creator {creator_id} returned {}; assuming {} is not the owner",
            user_res.status, provider.username
        );
        return Err(RejectionError::not_owner());
    }
    let creator: UserShow = user_res.json()?;

    if creator.result.name != provider.username {
        debug!(
            "dataset {} was created by {}, not {}",
            location.dataset_id, creator.result.name, provider.username
        );
        return Err(RejectionError::not_owner());
    }

    debug!("{} owns dataset {}", provider.username, location.dataset_id);
    Ok(())
}
