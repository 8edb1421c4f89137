// src/tests/router_tests/search_tests.rs

use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{get, json_body, listing, service, TestStore};

#[test]
fn search_returns_live_listings_as_json() {
    let svc = service(TestStore::Rows(vec![
        listing("20", "Audi", "Q4 e-tron"),
        listing("10", "Audi", "A6"),
        listing("30", "Volvo", "V90"),
    ]));

    let mut resp = handle(get("/api/search?query=audi"), &svc).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "application/json"
    );

    let body = json_body(&mut resp);
    assert_eq!(body["query"], "audi");
    assert_eq!(body["source"], "live");
    assert_eq!(body["count"], 2);
    assert_eq!(body["listings"][0]["id"], "10");
    assert_eq!(body["listings"][1]["id"], "20");
    assert_eq!(body["summary"]["brands"]["Audi"], 2);
}

#[test]
fn query_is_percent_decoded() {
    let svc = service(TestStore::Rows(vec![listing("1", "Audi", "A3 Sportback")]));

    let mut resp = handle(get("/api/search?query=%20a3+sport%20"), &svc).unwrap();
    let body = json_body(&mut resp);

    assert_eq!(body["query"], "a3 sport");
    assert_eq!(body["count"], 1);
}

#[test]
fn failing_store_falls_back_to_samples() {
    let svc = service(TestStore::Failing);

    let mut resp = handle(get("/api/search?query=Audi"), &svc).unwrap();
    assert_eq!(resp.status(), 200);

    let body = json_body(&mut resp);
    assert_eq!(body["source"], "fallback");
    assert_eq!(body["count"], 2);
    assert_eq!(body["summary"]["price_range"][0], 289_000);
    assert_eq!(body["summary"]["price_range"][1], 399_000);
    assert!(body["listings"]
        .as_array()
        .unwrap()
        .iter()
        .all(|l| l["brand"] == "Audi"));
}

#[test]
fn no_matches_is_an_empty_list() {
    let svc = service(TestStore::Unconfigured);

    let mut resp = handle(get("/api/search?query=Tesla"), &svc).unwrap();
    assert_eq!(resp.status(), 200);

    let body = json_body(&mut resp);
    assert_eq!(body["count"], 0);
    assert_eq!(body["listings"].as_array().unwrap().len(), 0);
}

#[test]
fn blank_or_missing_query_is_bad_request() {
    let svc = service(TestStore::Rows(vec![listing("1", "Audi", "A3")]));

    for uri in ["/api/search", "/api/search?query=", "/api/search?query=%20%20"] {
        let err = handle(get(uri), &svc).unwrap_err();
        let mut resp = error_to_response(err);
        assert_eq!(resp.status(), 400, "uri {uri}");

        let body = json_body(&mut resp);
        assert!(body["error"].as_str().unwrap().contains("empty"));
    }
}
