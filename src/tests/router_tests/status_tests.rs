use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::responses::errors::plain_internal_error;
use crate::router::handle;
use crate::tests::utils::{get, json_body, service, TestStore};

#[test]
fn status_reports_store_configuration() {
    let configured = service(TestStore::Rows(vec![]));
    let mut resp = handle(get("/api/status"), &configured).unwrap();
    assert_eq!(json_body(&mut resp)["store_configured"], true);

    let unconfigured = service(TestStore::Unconfigured);
    let mut resp = handle(get("/api/status"), &unconfigured).unwrap();
    assert_eq!(json_body(&mut resp)["store_configured"], false);
}

#[test]
fn unknown_route_is_not_found() {
    let svc = service(TestStore::Unconfigured);

    let err = handle(get("/dashboard"), &svc).unwrap_err();
    let mut resp = error_to_response(err);
    assert_eq!(resp.status(), 404);
    assert_eq!(json_body(&mut resp)["error"], "Not Found");
}

#[test]
fn internal_errors_are_500() {
    let mut resp = error_to_response(ServerError::Internal("encoder broke".into()));
    assert_eq!(resp.status(), 500);
    assert!(json_body(&mut resp)["error"]
        .as_str()
        .unwrap()
        .contains("encoder broke"));

    let resp = plain_internal_error();
    assert_eq!(resp.status(), 500);
}
