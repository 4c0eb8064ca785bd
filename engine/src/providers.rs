//! Collaborator boundaries the engine talks through.
//!
//! The backend is an opaque HTTP service; these traits are the only shape
//! the engine sees. Futures are `?Send` so a browser client built on
//! `gloo` can implement them alongside native test doubles.

use async_trait::async_trait;
use shared::{AvailabilityResponse, SubmitRentalRequest, SubmitRentalResponse};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("network error: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Source of the pending/confirmed date sets for a listing.
#[async_trait(?Send)]
pub trait AvailabilityProvider {
    async fn availability(&self, listing_id: i64) -> Result<AvailabilityResponse, ProviderError>;
}

/// Accepts a proposed rental and reports accept/reject plus the
/// confirmed-date conflict flag.
#[async_trait(?Send)]
pub trait RentalGateway {
    async fn submit_rental(
        &self,
        request: &SubmitRentalRequest,
    ) -> Result<SubmitRentalResponse, ProviderError>;
}
