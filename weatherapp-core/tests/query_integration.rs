//! Integration tests for LocationQuery using wiremock.

use weatherapp_core::{Error, LocationQuery, QueryError, lookup};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn paris_payload() -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 2.3488, "lat": 48.8534 },
        "weather": [{ "id": 800, "main": "Clear", "description": "clear sky", "icon": "01d" }],
        "main": { "temp": 293.15, "temp_min": 291.15, "temp_max": 295.15, "humidity": 40 },
        "sys": { "country": "FR" },
        "timezone": 7200,
        "name": "Paris",
        "cod": 200
    })
}

fn query_for(server: &MockServer) -> LocationQuery {
    LocationQuery::with_endpoint("TEST_KEY".into(), format!("{}/data/2.5/weather", server.uri()))
}

#[tokio::test]
async fn fetch_sends_city_country_and_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Paris,FR"))
        .and(query_param("appid", "TEST_KEY"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_payload()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let json = query_for(&mock_server)
        .fetch("  Paris ", Some("France"))
        .await
        .unwrap();

    assert_eq!(json["name"], "Paris");
}

#[tokio::test]
async fn unresolvable_country_is_dropped_from_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_payload()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = query_for(&mock_server)
        .fetch("Paris", Some("United States of Whatever"))
        .await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn provider_404_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "cod": "404",
            "message": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let err = query_for(&mock_server).fetch("Atlantis", None).await.unwrap_err();
    assert_eq!(err, QueryError::NotFound("Atlantis".to_string()));
}

#[tokio::test]
async fn server_error_is_unreachable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let err = query_for(&mock_server).fetch("Paris", None).await.unwrap_err();
    assert_eq!(err, QueryError::Unreachable);
}

#[tokio::test]
async fn unauthorized_is_unreachable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key."
        })))
        .mount(&mock_server)
        .await;

    let err = query_for(&mock_server).fetch("Paris", None).await.unwrap_err();
    assert_eq!(err, QueryError::Unreachable);
}

#[tokio::test]
async fn unparseable_body_is_unreachable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let err = query_for(&mock_server).fetch("Paris", None).await.unwrap_err();
    assert_eq!(err, QueryError::Unreachable);
}

#[tokio::test]
async fn connection_refused_is_unreachable() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let query = LocationQuery::with_endpoint(
        "TEST_KEY".into(),
        format!("http://127.0.0.1:{port}/data/2.5/weather"),
    );
    let err = query.fetch("Paris", None).await.unwrap_err();
    assert_eq!(err, QueryError::Unreachable);
}

#[tokio::test]
async fn bare_404_without_provider_body_is_unreachable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = query_for(&mock_server).fetch("Paris", None).await.unwrap_err();
    assert_eq!(err, QueryError::Unreachable);
}

#[tokio::test]
async fn html_404_is_unreachable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>Not Found</html>"))
        .mount(&mock_server)
        .await;

    let err = query_for(&mock_server).fetch("Paris", None).await.unwrap_err();
    assert_eq!(err, QueryError::Unreachable);
}

#[tokio::test]
async fn lookup_produces_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(paris_payload()))
        .mount(&mock_server)
        .await;

    let record = lookup(&query_for(&mock_server), "Paris", None).await.unwrap();

    assert_eq!(record.city, "Paris");
    assert_eq!(record.country, "France");
    assert_eq!(record.conditions, "Clear");
    assert!((record.temperature_c - 20.0).abs() < 1e-9);
    assert!((record.temperature_f - 68.0).abs() < 1e-9);
    assert!(record.coordinates_dms.starts_with("48°51'"));
    assert!(record.coordinates_dms.ends_with("'E"));
}

#[tokio::test]
async fn lookup_reports_malformed_payload() {
    let mock_server = MockServer::start().await;

    let mut payload = paris_payload();
    payload["main"].as_object_mut().unwrap().remove("temp");

    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload))
        .mount(&mock_server)
        .await;

    let err = lookup(&query_for(&mock_server), "Paris", None).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Normalize(weatherapp_core::NormalizeError::MalformedPayload(_))
    ));
}
