use crate::domain::listing::Listing;
use crate::search::SearchService;
use crate::store::{ListingStore, StoreError};
use astra::{Body, Request, Response};
use http::Method;
use serde_json::Value;
use std::io::Read;

/// A store whose answer is fixed up front.
pub enum TestStore {
    Unconfigured,
    Failing,
    Rows(Vec<Listing>),
}

impl ListingStore for TestStore {
    fn is_configured(&self) -> bool {
        !matches!(self, TestStore::Unconfigured)
    }

    fn find_matching(&self, query: &str) -> Result<Vec<Listing>, StoreError> {
        match self {
            TestStore::Unconfigured => Err(StoreError::Unconfigured),
            TestStore::Failing => Err(StoreError::query_failed("store HTTP 503 Service Unavailable")),
            TestStore::Rows(rows) => {
                let needle = query.to_lowercase();
                Ok(rows.iter().filter(|l| l.matches(&needle)).cloned().collect())
            }
        }
    }
}

pub fn service(store: TestStore) -> SearchService {
    SearchService::new(Box::new(store))
}

pub fn listing(id: &str, brand: &str, model: &str) -> Listing {
    Listing {
        id: id.to_string(),
        title: format!("{brand} {model}"),
        brand: brand.to_string(),
        model: model.to_string(),
        year: "2019".to_string(),
        price: "199,000 kr".to_string(),
        location: "Drammen".to_string(),
        url: format!("https://www.finn.no/mobility/item/{id}"),
        image_url: None,
    }
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::from(String::new()))
        .unwrap()
}

/// Read the whole body and parse it as JSON
pub fn json_body(resp: &mut Response) -> Value {
    let mut body_bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut body_bytes)
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}
