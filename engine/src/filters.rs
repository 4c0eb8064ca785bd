//! Client-side filtering and sorting of the listings grid.
//!
//! The whole listing set is held in memory after one fetch; filters are
//! re-applied locally on every input change.

use shared::Listing;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Recommended,
    PriceAsc,
    PriceDesc,
    Newest,
}

/// The filter panel's state. Empty strings mean "no filter".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingQuery {
    /// Free-text search across title, equipment, brand, description, category
    pub search: String,
    /// Exact category match
    pub category: String,
    /// Substring match against state, district, or village/city
    pub location: String,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub sort: SortOrder,
}

impl ListingQuery {
    /// Filter and sort a listing set. The input order is kept for
    /// `Recommended`.
    pub fn apply(&self, listings: &[Listing]) -> Vec<Listing> {
        let mut filtered: Vec<Listing> = listings
            .iter()
            .filter(|listing| self.matches(listing))
            .cloned()
            .collect();

        match self.sort {
            SortOrder::Recommended => {}
            SortOrder::PriceAsc => filtered.sort_by(|a, b| compare_price(a, b)),
            SortOrder::PriceDesc => filtered.sort_by(|a, b| compare_price(b, a)),
            SortOrder::Newest => {
                filtered.sort_by(|a, b| listing_timestamp(b).cmp(listing_timestamp(a)))
            }
        }

        filtered
    }

    fn matches(&self, listing: &Listing) -> bool {
        let category = self.category.trim().to_lowercase();
        if !category.is_empty() && listing.category.to_lowercase() != category {
            return false;
        }

        let location = self.location.trim().to_lowercase();
        if !location.is_empty() {
            let fields = [&listing.state, &listing.district, &listing.village_city];
            if !fields
                .iter()
                .any(|field| field.to_lowercase().contains(&location))
            {
                return false;
            }
        }

        let search = self.search.trim().to_lowercase();
        if !search.is_empty() {
            let mut fields = vec![
                listing.title.as_str(),
                listing.equipment_name.as_str(),
                listing.brand.as_str(),
                listing.category.as_str(),
            ];
            if let Some(description) = listing.description.as_deref() {
                fields.push(description);
            }
            if !fields
                .iter()
                .any(|field| field.to_lowercase().contains(&search))
            {
                return false;
            }
        }

        if let Some(min) = self.price_min {
            if listing.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if listing.price > max {
                return false;
            }
        }

        true
    }
}

fn compare_price(a: &Listing, b: &Listing) -> Ordering {
    a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal)
}

/// Sort key for "newest first": creation time, falling back to the update
/// time and then the availability start. ISO date strings compare
/// lexicographically, so plain string ordering is chronological.
fn listing_timestamp(listing: &Listing) -> &str {
    [
        listing.created_at.as_deref(),
        listing.updated_at.as_deref(),
        listing.available_from.as_deref(),
    ]
    .into_iter()
    .flatten()
    .find(|value| !value.is_empty())
    .unwrap_or("")
}
