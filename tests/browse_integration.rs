use carscope::core::filters::PriceBounds;
use carscope::{BrowseSession, HttpBackend};
use httpmock::prelude::*;
use std::time::Duration;

fn backend_for(server: &MockServer) -> HttpBackend {
    HttpBackend::new(&server.base_url(), Duration::from_secs(5)).unwrap()
}

fn metadata_mock(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/metadata");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "makes": ["honda", "toyota"],
                "models_by_make": {
                    "toyota": ["camry", "corolla"],
                    "honda": ["civic"]
                },
                "states": ["OR", "WA"]
            }));
    })
}

#[tokio::test]
async fn test_end_to_end_browse_with_real_http() {
    let server = MockServer::start();
    let metadata = metadata_mock(&server);
    let cars = server.mock(|when, then| {
        when.method(GET)
            .path("/cars")
            .query_param("page", "1")
            .query_param("per_page", "20")
            .query_param("min_price", "2000")
            .query_param("max_price", "100000")
            .query_param("make", "toyota");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "cars": [
                    {"id": 1, "title": "2021 Toyota Camry SE", "value": 38.0},
                    {"id": 2, "title": "2019 Toyota Camry LE", "value": 52.5}
                ],
                "page": 1,
                "per_page": 20,
                "total": 95
            }));
    });

    let mut session = BrowseSession::new(backend_for(&server), 20, PriceBounds::default());
    session.load_catalog().await.unwrap();
    assert_eq!(session.catalog().makes, vec!["honda", "toyota"]);

    session.toggle_make("toyota").await.unwrap();

    metadata.assert();
    cars.assert();
    assert_eq!(session.listings().len(), 2);
    assert_eq!(session.pagination().page(), 1);
    assert_eq!(session.pagination().total_pages(), 5);
    assert!(session.last_error().is_none());
}

#[tokio::test]
async fn test_deselecting_make_cascades_over_http() {
    let server = MockServer::start();
    metadata_mock(&server);
    let cars = server.mock(|when, then| {
        when.method(GET).path("/cars");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "cars": [], "page": 1, "per_page": 20, "total": 0
            }));
    });

    let mut session = BrowseSession::new(backend_for(&server), 20, PriceBounds::default());
    session.load_catalog().await.unwrap();

    session.toggle_make("toyota").await.unwrap();
    session.toggle_model("camry").await.unwrap();
    assert!(session.filters().makes().contains("toyota"));
    assert!(session.filters().models().contains("camry"));

    session.toggle_make("toyota").await.unwrap();
    assert!(session.filters().makes().is_empty());
    assert!(session.filters().models().is_empty());

    // One fetch per mutation.
    cars.assert_hits(3);
}

#[tokio::test]
async fn test_page_clamps_when_total_shrinks_between_fetches() {
    let server = MockServer::start();
    let first_page = server.mock(|when, then| {
        when.method(GET).path("/cars").query_param("page", "1");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "cars": [], "page": 1, "per_page": 20, "total": 95
            }));
    });
    let fifth_page = server.mock(|when, then| {
        when.method(GET).path("/cars").query_param("page", "5");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "cars": [], "page": 5, "per_page": 20, "total": 41
            }));
    });

    let mut session = BrowseSession::new(backend_for(&server), 20, PriceBounds::default());
    session.refresh().await.unwrap();
    assert_eq!(session.pagination().total_pages(), 5);

    // The result set shrank server-side while we were on page 5.
    session.go_to_page(5).await.unwrap();
    assert_eq!(session.pagination().total_pages(), 3);
    assert_eq!(session.pagination().page(), 3);

    first_page.assert();
    fifth_page.assert();
}

#[tokio::test]
async fn test_empty_dimensions_send_no_filter_params() {
    let server = MockServer::start();
    let cars = server.mock(|when, then| {
        when.method(GET)
            .path("/cars")
            .matches(|req| match req.query_params.as_ref() {
                Some(params) => params
                    .iter()
                    .all(|(key, _)| key != "make" && key != "model" && key != "state"),
                None => true,
            });
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "cars": [], "page": 1, "per_page": 20, "total": 0
            }));
    });

    let mut session = BrowseSession::new(backend_for(&server), 20, PriceBounds::default());
    session.refresh().await.unwrap();
    cars.assert();
}

#[tokio::test]
async fn test_server_failure_degrades_to_empty_listing() {
    let server = MockServer::start();
    let cars = server.mock(|when, then| {
        when.method(GET).path("/cars");
        then.status(500);
    });

    let mut session = BrowseSession::new(backend_for(&server), 20, PriceBounds::default());
    let result = session.refresh().await;

    cars.assert();
    assert!(result.is_err());
    assert!(session.listings().is_empty());
    assert!(session.last_error().is_some());
}
