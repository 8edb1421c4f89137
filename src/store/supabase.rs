// supabase.rs
use crate::config::{StoreAccess, StoreConfig, StoreCredentials};
use crate::domain::listing::{dedupe_by_id, Listing};
use crate::store::{decode_rows, ListingStore, StoreError, MAX_RESULTS};
use reqwest::blocking::Client;
use serde_json::Value;
use url::Url;

const USER_AGENT: &str = concat!("car_search/", env!("CARGO_PKG_VERSION"));

/// Listings held in a PostgREST table (Supabase's REST API).
pub struct SupabaseStore {
    access: StoreAccess,
    table: String,
    client: Client,
}

impl SupabaseStore {
    pub fn new(cfg: &StoreConfig) -> Result<Self, StoreError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(cfg.timeout)
            .build()
            .map_err(StoreError::query_failed)?;

        Ok(Self {
            access: cfg.access.clone(),
            table: cfg.table.clone(),
            client,
        })
    }

    fn listings_url(&self, creds: &StoreCredentials) -> Result<Url, StoreError> {
        let base = creds.endpoint.trim_end_matches('/');
        Url::parse(&format!("{base}/rest/v1/{}", self.table)).map_err(StoreError::query_failed)
    }
}

impl ListingStore for SupabaseStore {
    fn is_configured(&self) -> bool {
        self.access.is_configured()
    }

    fn find_matching(&self, query: &str) -> Result<Vec<Listing>, StoreError> {
        let creds = match &self.access {
            StoreAccess::Configured(creds) => creds,
            StoreAccess::Unconfigured => return Err(StoreError::Unconfigured),
        };

        let needle = query.to_lowercase();
        let url = self.listings_url(creds)?;
        let filter = or_filter(&needle);
        let limit = MAX_RESULTS.to_string();

        let resp = self
            .client
            .get(url)
            .header("apikey", &creds.access_key)
            .bearer_auth(&creds.access_key)
            .query(&[
                ("select", "*"),
                ("or", filter.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .map_err(StoreError::query_failed)?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(StoreError::query_failed(format!("store HTTP {status}: {text}")));
        }

        // Decoded row by row: one odd row must not sink the whole page
        let rows: Vec<Value> = resp.json().map_err(StoreError::query_failed)?;
        let fetched = rows.len();
        let rows = decode_rows(rows);

        // The store's wildcard handling is not ours; hold every row to the same rule.
        let matched = rows.into_iter().filter(|l| l.matches(&needle)).collect();
        let mut listings = dedupe_by_id(matched);
        listings.truncate(MAX_RESULTS);

        tracing::debug!(
            table = %self.table,
            fetched,
            kept = listings.len(),
            "store query complete"
        );

        Ok(listings)
    }
}

/// PostgREST `or` filter: brand, model or title ILIKE `*needle*`.
fn or_filter(needle: &str) -> String {
    let pattern = quote_value(&format!("*{}*", escape_like(needle)));
    format!("(brand.ilike.{pattern},model.ilike.{pattern},title.ilike.{pattern})")
}

/// `%` and `_` are LIKE wildcards; a literal match needs them escaped.
fn escape_like(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

// Double quotes keep commas and parens in user text out of the filter grammar.
fn quote_value(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
