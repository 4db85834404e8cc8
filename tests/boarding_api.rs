mod common;

use axum::http::{Method, StatusCode};
use common::{app, send};
use serde_json::json;

#[tokio::test]
async fn name_query_returns_the_seeded_record() {
    let (status, body) = send(&app(), Method::GET, "/api/v1/boarding?name=Bingsu", None).await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["id"], "B001");
    assert_eq!(rows[0]["pet_name"], "Bingsu");
    assert_eq!(rows[0]["status"], "checked_in");
}

#[tokio::test]
async fn name_query_is_exact_and_may_be_empty() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api/v1/boarding?name=bingsu", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn missing_name_lists_everything() {
    let app = app();
    let (_, all) = send(&app, Method::GET, "/api/v1/boarding", None).await;
    let (_, blank) = send(&app, Method::GET, "/api/v1/boarding?name=", None).await;
    let ids: Vec<_> = all.as_array().unwrap().iter().map(|b| b["id"].clone()).collect();
    assert_eq!(ids, vec![json!("B001"), json!("B002"), json!("B003")]);
    assert_eq!(blank, all);
}

#[tokio::test]
async fn unknown_id_is_an_empty_array_not_a_404() {
    let (status, body) = send(&app(), Method::GET, "/api/v1/boardingbyid?id=B999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn known_id_matches_one_record() {
    let (status, body) = send(&app(), Method::GET, "/api/v1/boardingbyid?id=B003", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["pet_name"], "Lindy");
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_id_is_not_found() {
    let app = app();
    for uri in ["/api/v1/boardingbyid", "/api/v1/boardingbyid?id="] {
        let (status, body) = send(&app, Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "No boarding found with ID " }));
    }
}
