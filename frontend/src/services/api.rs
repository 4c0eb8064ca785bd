use agrorent_engine::{AvailabilityProvider, ProviderError, RentalGateway};
use async_trait::async_trait;
use gloo::net::http::Request;
use shared::{
    AvailabilityResponse, ContractPreviewResponse, Listing, SubmitRentalRequest,
    SubmitRentalResponse,
};

/// API client for the marketplace backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client using same-origin relative URLs
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Get all available listings
    pub async fn get_listings(&self) -> Result<Vec<Listing>, String> {
        let url = format!("{}/api/listings", self.base_url);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<Vec<Listing>>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse listings: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch listings: {}", e)),
        }
    }

    /// Get full details for one listing
    pub async fn get_listing(&self, listing_id: i64) -> Result<Listing, String> {
        let url = format!("{}/api/listing/{}", self.base_url, listing_id);

        match Request::get(&url).send().await {
            Ok(response) => match response.json::<Listing>().await {
                Ok(data) => Ok(data),
                Err(e) => Err(format!("Failed to parse listing details: {}", e)),
            },
            Err(e) => Err(format!("Failed to fetch listing details: {}", e)),
        }
    }

    /// Get the agreement preview for a proposed rental range
    pub async fn get_contract_preview(
        &self,
        listing_id: i64,
        start_date: &str,
        end_date: &str,
        days: u32,
        total_amount: f64,
    ) -> Result<ContractPreviewResponse, String> {
        let url = format!(
            "{}/api/rentals/0/contract-preview?listing_id={}&start_date={}&end_date={}&days={}&total_amount={}",
            self.base_url, listing_id, start_date, end_date, days, total_amount
        );

        match Request::get(&url).send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<ContractPreviewResponse>().await {
                        Ok(data) => Ok(data),
                        Err(e) => Err(format!("Failed to parse agreement preview: {}", e)),
                    }
                } else {
                    Err(format!("Server error {}", response.status()))
                }
            }
            Err(e) => Err(format!("Network error: {}", e)),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl AvailabilityProvider for ApiClient {
    async fn availability(&self, listing_id: i64) -> Result<AvailabilityResponse, ProviderError> {
        let url = format!("{}/api/listing/{}/availability", self.base_url, listing_id);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        response
            .json::<AvailabilityResponse>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

#[async_trait(?Send)]
impl RentalGateway for ApiClient {
    async fn submit_rental(
        &self,
        request: &SubmitRentalRequest,
    ) -> Result<SubmitRentalResponse, ProviderError> {
        let url = format!("{}/rent_equipment", self.base_url);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ProviderError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        response
            .json::<SubmitRentalResponse>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}
