use anyhow::{Result, anyhow};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::core::rates::{RatesProvider, RatesResponse};

/// Fetches the full rate table from a vatcomply-compatible `/rates` endpoint.
pub struct VatComplyProvider {
    base_url: String,
}

impl VatComplyProvider {
    pub fn new(base_url: &str) -> Self {
        VatComplyProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn rates_url(&self) -> String {
        format!("{}/rates", self.base_url)
    }
}

#[async_trait]
impl RatesProvider for VatComplyProvider {
    #[instrument(name = "RatesFetch", skip(self), fields(base_url = %self.base_url))]
    async fn fetch_rates(&self) -> Result<RatesResponse> {
        let url = self.rates_url();
        debug!("Requesting rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent(concat!("fxconv/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for URL: {}", e, url))?;

        if !response.status().is_success() {
            return Err(anyhow!("Rates fetch failed: {}", response.status()));
        }

        let text = response.text().await?;

        let data: RatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON rates response: {}", e))?;

        debug!(base = %data.base, count = data.rates.len(), "Received rates");
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(status: u16, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/rates"))
            .respond_with(ResponseTemplate::new(status).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let provider = VatComplyProvider::new("https://api.vatcomply.com/");
        assert_eq!(provider.rates_url(), "https://api.vatcomply.com/rates");
    }

    #[tokio::test]
    async fn test_successful_rates_fetch() {
        let mock_response = r#"{
            "date": "2024-05-02",
            "base": "EUR",
            "rates": {"EUR": 1.0, "USD": 1.0701, "JPY": 165.93}
        }"#;
        let mock_server = create_mock_server(200, mock_response).await;

        let provider = VatComplyProvider::new(&format!("{}/", mock_server.uri()));
        let resp = provider.fetch_rates().await.expect("Failed to fetch rates");
        assert_eq!(resp.base, "EUR");
        assert_eq!(resp.date.as_deref(), Some("2024-05-02"));
        assert_eq!(resp.rates.len(), 3);
        assert_eq!(resp.rates.get("USD"), Some(&1.0701));
    }

    #[tokio::test]
    async fn test_rates_api_error_response() {
        let mock_server = create_mock_server(500, "").await;

        let provider = VatComplyProvider::new(&mock_server.uri());
        let result = provider.fetch_rates().await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Rates fetch failed: 500 Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_rates_api_malformed_response() {
        // "rate" instead of "rates"
        let mock_server = create_mock_server(200, r#"{"base": "EUR", "rate": {}}"#).await;

        let provider = VatComplyProvider::new(&mock_server.uri());
        let result = provider.fetch_rates().await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse JSON rates response")
        );
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let provider = VatComplyProvider::new("http://127.0.0.1:1");
        let result = provider.fetch_rates().await;
        assert!(result.unwrap_err().to_string().starts_with("Request error:"));
    }
}
