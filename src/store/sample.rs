// src/store/sample.rs

use crate::domain::listing::{filter_matching, Listing};
use crate::store::{ListingStore, StoreError, MAX_RESULTS};

/// The fixed listings served when the live store can't answer.
pub struct SampleStore {
    listings: Vec<Listing>,
}

impl SampleStore {
    pub fn new() -> Self {
        Self::with_listings(sample_listings())
    }

    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }
}

impl Default for SampleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ListingStore for SampleStore {
    fn is_configured(&self) -> bool {
        true
    }

    fn find_matching(&self, query: &str) -> Result<Vec<Listing>, StoreError> {
        let mut found = filter_matching(&self.listings, &query.to_lowercase());
        found.truncate(MAX_RESULTS);
        Ok(found)
    }
}

fn sample_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: "406967386".to_string(),
            title: "Audi A3 Sportback e-tron".to_string(),
            brand: "Audi".to_string(),
            model: "A3".to_string(),
            year: "2018".to_string(),
            price: "289,000 kr".to_string(),
            location: "Oslo".to_string(),
            url: "https://www.finn.no/mobility/item/406967386".to_string(),
            image_url: Some(
                "https://images.finncdn.no/dynamic/1600w/2023/11/vertical-0/26/4/267/354/47_1395823842.jpg"
                    .to_string(),
            ),
        },
        Listing {
            id: "406915143".to_string(),
            title: "Audi A3 Sportback TFSI e".to_string(),
            brand: "Audi".to_string(),
            model: "A3".to_string(),
            year: "2022".to_string(),
            price: "399,000 kr".to_string(),
            location: "Bergen".to_string(),
            url: "https://www.finn.no/mobility/item/406915143".to_string(),
            image_url: Some(
                "https://images.finncdn.no/dynamic/1600w/2023/11/vertical-0/25/0/265/081/85_1208593260.jpg"
                    .to_string(),
            ),
        },
    ]
}
