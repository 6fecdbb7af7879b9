use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use yelp_fusion::{
    ApiKey, BoxFuture, BusinessId, CoordinateOptions, HeaderMap, HttpResponse, HttpTransport,
    LocationOptions, SearchOptions, TransportFailure, Url, YelpClient, YelpError,
};

const SEARCH_JSON: &str = r#"{"region":{"center":{"latitude":37.77,"longitude":-122.41}},"total":3,"businesses":[{"id":"x","name":"C"}]}"#;

fn client_for(server: &MockServer) -> YelpClient {
    YelpClient::builder(ApiKey::new("integration-key").unwrap())
        .base_url(format!("{}/", server.uri()))
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

#[tokio::test]
async fn simple_search_hits_search_endpoint_with_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/businesses/search"))
        .and(query_param("term", "coffee"))
        .and(query_param("location", "San Francisco, CA"))
        .and(header("authorization", "Bearer integration-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let result = client_for(&server)
        .search_simple("coffee", "San Francisco, CA")
        .await
        .unwrap();
    assert_eq!(result.total, 3);
    assert_eq!(result.businesses[0].id, "x");
    assert_eq!(result.businesses[0].name, "C");
}

#[tokio::test]
async fn complex_search_sends_location_and_hint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/businesses/search"))
        .and(query_param("location", "Berkeley"))
        .and(query_param("latitude", "37.87"))
        .and(query_param("longitude", "-122.27"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SEARCH_JSON))
        .expect(1)
        .mount(&server)
        .await;

    let options = SearchOptions::new(
        LocationOptions::new("Berkeley").with_coordinates(CoordinateOptions::new(37.87, -122.27)),
    )
    .limit(2);
    let result = client_for(&server).search(&options).await.unwrap();
    assert_eq!(result.businesses.len(), 1);

    let requests = server.received_requests().await.unwrap();
    let mut keys = requests[0]
        .url
        .query_pairs()
        .map(|(key, _)| key.into_owned())
        .collect::<Vec<_>>();
    keys.sort();
    assert_eq!(keys, vec!["latitude", "limit", "location", "longitude"]);
}

#[tokio::test]
async fn business_detail_400_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/businesses/does-not-exist"))
        .respond_with(ResponseTemplate::new(400).set_body_string(
            r#"{"error":{"code":"BUSINESS_NOT_FOUND","description":"The requested business could not be found."}}"#,
        ))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .business(&BusinessId::new("does-not-exist").unwrap())
        .await
        .unwrap_err();
    assert!(matches!(err, YelpError::NotFound { status: 400, .. }));
}

#[tokio::test]
async fn business_detail_decodes_hours() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/businesses/gary-danko-san-francisco"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"id":"WavvLdfdP6g8aZTtbBQHTw","alias":"gary-danko-san-francisco","name":"Gary Danko","is_claimed":true,"hours":[{"open":[{"is_overnight":false,"start":"1730","end":"2200","day":0}],"hours_type":"REGULAR","is_open_now":false}]}"#,
        ))
        .mount(&server)
        .await;

    let detail = client_for(&server)
        .business(&BusinessId::new("gary-danko-san-francisco").unwrap())
        .await
        .unwrap();
    assert_eq!(detail.business.alias, "gary-danko-san-francisco");
    assert!(detail.is_claimed);
    assert_eq!(detail.regular_hours().unwrap().open[0].start, "1730");
}

#[tokio::test]
async fn search_503_is_remote_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/businesses/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream overloaded"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search_simple("tacos", "Austin, TX")
        .await
        .unwrap_err();
    match err {
        YelpError::Remote { status, body, .. } => {
            assert_eq!(status, 503);
            assert_eq!(body.as_deref(), Some("upstream overloaded"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    let client = YelpClient::builder(ApiKey::new("integration-key").unwrap())
        .base_url(base_url)
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let err = client.search_simple("tacos", "Austin").await.unwrap_err();
    assert!(matches!(err, YelpError::Transport { status: 500, .. }));
}

struct CancelledTransport;

impl HttpTransport for CancelledTransport {
    fn get<'a>(
        &'a self,
        _url: &'a Url,
        _headers: &'a HeaderMap,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async { Err(TransportFailure::new("request cancelled")) })
    }
}

#[tokio::test]
async fn custom_transport_failure_surfaces_as_transport_error() {
    let client = YelpClient::builder(ApiKey::new("integration-key").unwrap())
        .transport(Arc::new(CancelledTransport))
        .build()
        .unwrap();

    let err = client
        .business(&BusinessId::new("gary-danko-san-francisco").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.to_string(), "transport error: request cancelled");
}
