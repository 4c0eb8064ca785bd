use serde::{Deserialize, Serialize};

/// How a listing is priced on the wire.
///
/// The backend stores these as display strings ("Per day", "Per hour", ...),
/// so the wire names are preserved here. Anything unrecognized falls back to
/// seasonal pricing, which is also the fallback arm when computing totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PricingUnit {
    PerDay,
    PerHour,
    PerAcre,
    PerSeason,
}

impl PricingUnit {
    /// Display label, matching the wire string.
    pub fn label(&self) -> &'static str {
        match self {
            PricingUnit::PerDay => "Per day",
            PricingUnit::PerHour => "Per hour",
            PricingUnit::PerAcre => "Per acre",
            PricingUnit::PerSeason => "Per season",
        }
    }
}

impl From<String> for PricingUnit {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Per day" => PricingUnit::PerDay,
            "Per hour" => PricingUnit::PerHour,
            "Per acre" => PricingUnit::PerAcre,
            _ => PricingUnit::PerSeason,
        }
    }
}

impl From<PricingUnit> for String {
    fn from(value: PricingUnit) -> Self {
        value.label().to_string()
    }
}

/// Whether transport to the renter is part of the listed price.
///
/// Stored as "Yes"/"No" strings by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransportIncluded {
    Yes,
    No,
}

impl TransportIncluded {
    pub fn is_included(&self) -> bool {
        matches!(self, TransportIncluded::Yes)
    }
}

impl From<String> for TransportIncluded {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Yes" => TransportIncluded::Yes,
            _ => TransportIncluded::No,
        }
    }
}

impl From<TransportIncluded> for String {
    fn from(value: TransportIncluded) -> Self {
        match value {
            TransportIncluded::Yes => "Yes".to_string(),
            TransportIncluded::No => "No".to_string(),
        }
    }
}

/// An equipment listing as served by `GET /api/listings` and
/// `GET /api/listing/{id}`.
///
/// The list endpoint returns a projection of these fields; everything the
/// grid view does not need is `#[serde(default)]` so both payloads decode
/// into the same type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub equipment_name: String,
    pub brand: String,
    /// Manufacturing year, when the owner provided one
    #[serde(default)]
    pub year: Option<i32>,
    pub condition: String,
    /// Free-form power/capacity spec, e.g. "65 HP"
    #[serde(default)]
    pub power_spec: Option<String>,
    pub price: f64,
    /// Wire name kept from the backend schema
    #[serde(rename = "pricing_type")]
    pub pricing_unit: PricingUnit,
    pub state: String,
    pub district: String,
    pub village_city: String,
    #[serde(default)]
    pub pincode: Option<String>,
    #[serde(default)]
    pub service_radius: Option<String>,
    pub transport_included: TransportIncluded,
    /// Flat charge applied once when transport is not included
    #[serde(default)]
    pub transport_charge: Option<f64>,
    /// First rentable date (YYYY-MM-DD); the engine substitutes today when absent
    #[serde(default)]
    pub available_from: Option<String>,
    /// Last rentable date (YYYY-MM-DD); open-ended when absent
    #[serde(default)]
    pub available_till: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub contact_method: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rules: Option<String>,
    #[serde(default)]
    pub main_image: Option<String>,
    #[serde(default)]
    pub additional_images: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Listing {
    /// "Village, District, State" line used on cards and in the details view.
    pub fn location_summary(&self) -> String {
        format!("{}, {}, {}", self.village_city, self.district, self.state)
    }
}

/// Response of `GET /api/listing/{id}/availability`.
///
/// Date strings are plain YYYY-MM-DD calendar dates with no timezone
/// component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// Dates covered by rental requests still awaiting owner approval
    #[serde(default)]
    pub pending_dates: Vec<String>,
    /// Dates covered by approved/active rentals
    #[serde(default)]
    pub confirmed_dates: Vec<String>,
}

/// Body of `POST /rent_equipment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRentalRequest {
    pub listing_id: i64,
    /// Rental start (YYYY-MM-DD)
    pub start_date: String,
    /// Inclusive day count of the requested range
    pub days: u32,
    pub renter_address: String,
    pub location_of_use: String,
}

/// Response of `POST /rent_equipment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRentalResponse {
    pub success: bool,
    #[serde(default)]
    pub rental_id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
    /// Set by the server when the requested dates collided with a rental
    /// confirmed after the client last fetched availability
    #[serde(default)]
    pub booked: Option<bool>,
}

impl SubmitRentalResponse {
    /// True when the rejection was a confirmed-date conflict, which requires
    /// the client to drop its selection and refetch availability.
    pub fn is_booked_conflict(&self) -> bool {
        !self.success && self.booked.unwrap_or(false)
    }
}

/// Agreement data for the preview shown before submission, from
/// `GET /api/rentals/0/contract-preview`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractPreview {
    pub owner_name: String,
    pub owner_address: String,
    pub renter_name: String,
    pub machine_name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub machine_model: Option<String>,
    pub total_amount: f64,
    pub start_date: String,
    pub end_date: String,
    pub days: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractPreviewResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<ContractPreview>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_unit_wire_names() {
        let unit: PricingUnit = serde_json::from_str("\"Per day\"").unwrap();
        assert_eq!(unit, PricingUnit::PerDay);
        let unit: PricingUnit = serde_json::from_str("\"Per hour\"").unwrap();
        assert_eq!(unit, PricingUnit::PerHour);
        let unit: PricingUnit = serde_json::from_str("\"Per acre\"").unwrap();
        assert_eq!(unit, PricingUnit::PerAcre);

        assert_eq!(
            serde_json::to_string(&PricingUnit::PerDay).unwrap(),
            "\"Per day\""
        );
    }

    #[test]
    fn test_pricing_unit_unknown_falls_back_to_seasonal() {
        let unit: PricingUnit = serde_json::from_str("\"Per fortnight\"").unwrap();
        assert_eq!(unit, PricingUnit::PerSeason);
        let unit: PricingUnit = serde_json::from_str("\"Per season\"").unwrap();
        assert_eq!(unit, PricingUnit::PerSeason);
    }

    #[test]
    fn test_transport_included_wire_names() {
        let t: TransportIncluded = serde_json::from_str("\"Yes\"").unwrap();
        assert!(t.is_included());
        let t: TransportIncluded = serde_json::from_str("\"No\"").unwrap();
        assert!(!t.is_included());
    }

    #[test]
    fn test_listing_grid_projection_decodes() {
        // The list endpoint omits detail-only fields; they must default.
        let json = r#"{
            "id": 3,
            "title": "Mahindra 575 DI",
            "category": "Tractor",
            "equipment_name": "Tractor",
            "brand": "Mahindra",
            "condition": "Good",
            "price": 1800.0,
            "pricing_type": "Per day",
            "state": "Maharashtra",
            "district": "Pune",
            "village_city": "Baramati",
            "transport_included": "Yes",
            "available_from": "2025-01-01",
            "available_till": null,
            "main_image": null,
            "power_spec": "45 HP",
            "service_radius": "within 25 km"
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.id, 3);
        assert_eq!(listing.pricing_unit, PricingUnit::PerDay);
        assert_eq!(listing.available_till, None);
        assert!(listing.additional_images.is_empty());
        assert_eq!(listing.location_summary(), "Baramati, Pune, Maharashtra");
    }

    #[test]
    fn test_availability_response_defaults() {
        let resp: AvailabilityResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.pending_dates.is_empty());
        assert!(resp.confirmed_dates.is_empty());

        let resp: AvailabilityResponse =
            serde_json::from_str(r#"{"pending_dates": ["2025-06-10"], "confirmed_dates": []}"#)
                .unwrap();
        assert_eq!(resp.pending_dates, vec!["2025-06-10".to_string()]);
    }

    #[test]
    fn test_submit_response_booked_conflict() {
        let resp: SubmitRentalResponse = serde_json::from_str(
            r#"{"success": false, "message": "Dates taken", "booked": true}"#,
        )
        .unwrap();
        assert!(resp.is_booked_conflict());

        let resp: SubmitRentalResponse =
            serde_json::from_str(r#"{"success": false, "message": "Server error"}"#).unwrap();
        assert!(!resp.is_booked_conflict());

        let resp: SubmitRentalResponse =
            serde_json::from_str(r#"{"success": true, "rental_id": 12}"#).unwrap();
        assert!(!resp.is_booked_conflict());
        assert_eq!(resp.rental_id, Some(12));
    }
}
