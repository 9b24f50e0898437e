use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

use crate::{countries, error::QueryError};

/// OpenWeather "current weather by name" endpoint.
pub const DEFAULT_ENDPOINT: &str = "http://api.openweathermap.org/data/2.5/weather";

/// Client for the provider's current-weather lookup.
#[derive(Debug, Clone)]
pub struct LocationQuery {
    api_key: String,
    endpoint: String,
    http: Client,
}

impl LocationQuery {
    pub fn new(api_key: String) -> Self {
        Self::with_endpoint(api_key, DEFAULT_ENDPOINT.to_string())
    }

    pub fn with_endpoint(api_key: String, endpoint: String) -> Self {
        Self {
            api_key,
            endpoint,
            http: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the raw current-weather payload for `city`, optionally narrowed
    /// by `country`.
    ///
    /// A country that doesn't resolve to an ISO2 code is dropped and the
    /// query proceeds on the city alone.
    pub async fn fetch(&self, city: &str, country: Option<&str>) -> Result<Value, QueryError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(QueryError::EmptyCity);
        }

        let location = location_param(city, country);
        debug!(location = %location, endpoint = %self.endpoint, "querying current weather");

        let res = self
            .http
            .get(&self.endpoint)
            .query(&[("q", location.as_str()), ("appid", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "failed to send current weather request");
                QueryError::Unreachable
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            warn!(error = %e, "failed to read current weather response body");
            QueryError::Unreachable
        })?;

        let parsed = serde_json::from_str::<Value>(&body);

        if parsed.as_ref().is_ok_and(reports_not_found) {
            debug!(city, "provider reported location not found");
            return Err(QueryError::NotFound(city.to_string()));
        }

        if !status.is_success() {
            warn!(%status, body = %truncate_body(&body), "current weather request failed");
            return Err(QueryError::Unreachable);
        }

        parsed.map_err(|e| {
            warn!(error = %e, body = %truncate_body(&body), "failed to parse current weather JSON");
            QueryError::Unreachable
        })
    }
}

/// Build the `q` parameter: `city` or `city,ISO2`.
fn location_param(city: &str, country: Option<&str>) -> String {
    let Some(country) = country.map(str::trim).filter(|c| !c.is_empty()) else {
        return city.to_string();
    };

    match countries::to_iso2(country) {
        Some(code) if code.len() == 2 => format!("{city},{code}"),
        _ => {
            debug!(country, "country did not resolve to an ISO2 code, dropping it");
            city.to_string()
        }
    }
}

/// The provider signals unknown locations with `"cod": "404"` (sometimes a
/// number) in the body.
fn reports_not_found(body: &Value) -> bool {
    match body.get("cod") {
        Some(Value::String(s)) => s.trim() == "404",
        Some(Value::Number(n)) => n.as_i64() == Some(404),
        _ => false,
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn location_without_country() {
        assert_eq!(location_param("Paris", None), "Paris");
        assert_eq!(location_param("Paris", Some("   ")), "Paris");
    }

    #[test]
    fn location_with_resolvable_country() {
        assert_eq!(location_param("Paris", Some("France")), "Paris,FR");
        assert_eq!(location_param("Portland", Some("usa")), "Portland,US");
        assert_eq!(location_param("Berlin", Some("DE")), "Berlin,DE");
    }

    #[test]
    fn unresolvable_country_is_dropped() {
        assert_eq!(
            location_param("Paris", Some("United States of Whatever")),
            "Paris"
        );
    }

    #[test]
    fn not_found_markers() {
        assert!(reports_not_found(&json!({ "cod": "404", "message": "city not found" })));
        assert!(reports_not_found(&json!({ "cod": 404 })));
        assert!(!reports_not_found(&json!({ "cod": 200 })));
        assert!(!reports_not_found(&json!({ "name": "London" })));
    }

    #[test]
    fn truncate_long_body() {
        let body = "x".repeat(300);
        let t = truncate_body(&body);
        assert_eq!(t.len(), 203);
        assert!(t.ends_with("..."));
        assert_eq!(truncate_body("short"), "short");
    }

    #[tokio::test]
    async fn empty_city_is_rejected_before_any_request() {
        let query = LocationQuery::with_endpoint("KEY".into(), "http://127.0.0.1:9/unused".into());
        assert_eq!(query.fetch("   ", Some("France")).await, Err(QueryError::EmptyCity));
    }
}
