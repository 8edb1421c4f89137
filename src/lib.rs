pub mod config;
pub mod domain;
pub mod errors;
pub mod responses;
pub mod router;
pub mod search;
pub mod store;

#[cfg(test)]
mod tests;
