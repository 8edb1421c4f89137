mod search_tests;
mod status_tests;
