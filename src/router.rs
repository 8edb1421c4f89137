use crate::domain::listing::Listing;
use crate::domain::summary::ListingSummary;
use crate::errors::ServerError;
use crate::responses::{json_response, ResultResp};
use crate::search::{ResultSource, SearchService};
use astra::Request;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
struct SearchBody<'a> {
    query: &'a str,
    source: ResultSource,
    count: usize,
    listings: &'a [Listing],
    summary: ListingSummary,
}

#[derive(Serialize)]
struct StatusBody {
    store_configured: bool,
}

pub fn handle(req: Request, search: &SearchService) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    match (method, path) {
        ("GET", "/api/search") => {
            let params = parse_query(&req);
            let raw = params.get("query").map(String::as_str).unwrap_or("");

            let results = search.search_with_source(raw)?;
            let body = SearchBody {
                query: &results.query,
                source: results.source,
                count: results.listings.len(),
                listings: &results.listings,
                summary: ListingSummary::from_listings(&results.listings),
            };
            json_response(200, &body)
        }
        ("GET", "/api/status") => json_response(
            200,
            &StatusBody {
                store_configured: search.store_configured(),
            },
        ),
        _ => Err(ServerError::NotFound),
    }
}

// Percent-decoded; `+` is a space. Later duplicates win.
fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
