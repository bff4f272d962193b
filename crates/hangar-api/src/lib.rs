//! hangar-api — HTTP client for the remote starship API.
//!
//! One endpoint, one GET: the client fetches the SWAPI-style starship page,
//! unwraps the `results` list, and hands the raw items to the caller for
//! roster construction. Failures come back as a structured [`FetchError`] —
//! presentation (status bar, log line, …) is the caller's concern, and the
//! busy indicator around the fetch is owned by the caller too.
//!
//! No retry policy: a failed load is simply re-triggered manually.

use hangar_core::config::ApiConfig;
use hangar_core::roster::NewShip;
use serde::Deserialize;
use std::time::Duration;

/// Why a load produced no data.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connection, TLS, or timeout failure before a response arrived.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered, but not with 2xx.
    #[error("unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),
    /// The body was not the expected JSON document.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// The paginated document served by the endpoint. Only the first page is
/// ever requested; `next` is deliberately not followed.
#[derive(Debug, Clone, Deserialize)]
pub struct StarshipPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<RawStarship>,
}

/// One item of the `results` list, limited to the fields the roster keeps.
/// Every value arrives as a JSON string (including `"n/a"` / `"unknown"`)
/// and is passed through untouched; unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawStarship {
    pub name: String,
    pub model: String,
    pub manufacturer: String,
    pub passengers: String,
    #[serde(rename = "max_atmosphering_speed")]
    pub max_speed: String,
}

impl From<RawStarship> for NewShip {
    fn from(raw: RawStarship) -> Self {
        NewShip {
            name: raw.name,
            model: raw.model,
            manufacturer: raw.manufacturer,
            passengers: raw.passengers,
            max_speed: raw.max_speed,
        }
    }
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// HTTP client bound to one starship endpoint.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        Self::new(
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Fetch the starship list: one GET, first page only.
    ///
    /// Returns the raw items in document order, or the first failure
    /// encountered. The roster is never touched from here.
    pub async fn fetch_starships(&self) -> Result<Vec<RawStarship>, FetchError> {
        tracing::debug!(url = %self.base_url, "fetching starships");

        let response = self.http.get(&self.base_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, "fetch rejected");
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let page: StarshipPage = serde_json::from_str(&body)?;
        tracing::debug!(
            fetched = page.results.len(),
            total = page.count,
            "starship page decoded"
        );
        Ok(page.results)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // Trimmed from a real SWAPI response; extra fields must be ignored.
    const PAGE: &str = r#"{
        "count": 36,
        "next": "https://swapi.dev/api/starships/?page=2",
        "previous": null,
        "results": [
            {
                "name": "Millennium Falcon",
                "model": "YT-1300 light freighter",
                "manufacturer": "Corellian Engineering Corporation",
                "cost_in_credits": "100000",
                "max_atmosphering_speed": "1050",
                "crew": "4",
                "passengers": "6"
            },
            {
                "name": "X-wing",
                "model": "T-65 X-wing",
                "manufacturer": "Incom Corporation",
                "max_atmosphering_speed": "1050",
                "passengers": "0"
            }
        ]
    }"#;

    #[test]
    fn page_decodes_results_in_order() {
        let page: StarshipPage = serde_json::from_str(PAGE).unwrap();
        assert_eq!(page.count, 36);
        assert!(page.next.is_some());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "Millennium Falcon");
        assert_eq!(page.results[1].max_speed, "1050");
    }

    #[test]
    fn raw_values_pass_through_as_text() {
        let raw: RawStarship = serde_json::from_str(
            r#"{
                "name": "Death Star",
                "model": "DS-1 Orbital Battle Station",
                "manufacturer": "Imperial Department of Military Research",
                "passengers": "843342",
                "max_atmosphering_speed": "n/a"
            }"#,
        )
        .unwrap();
        assert_eq!(raw.max_speed, "n/a");

        let ship: NewShip = raw.into();
        assert_eq!(ship.passengers, "843342");
    }

    #[test]
    fn page_without_results_is_a_decode_error() {
        let err = serde_json::from_str::<StarshipPage>(r#"{"count": 0}"#);
        assert!(err.is_err());
    }
}
