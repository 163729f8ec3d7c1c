//! Client for the upstream prayer-time service.

use tracing::info;

use crate::models::PrayerTimesDay;
use crate::{Config, Result};

/// HTTP client for the upstream time-service.
#[derive(Debug, Clone)]
pub struct VakitClient {
    http: reqwest::Client,
    base_url: String,
    api_pass: String,
}

impl VakitClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_pass: config.api_pass.clone(),
        }
    }

    /// Fetch the daily prayer-time records for a city.
    ///
    /// Returns one record per calendar day, in the order the service emits
    /// them. No retries; any transport or decode failure propagates to the
    /// caller's error mapping.
    pub async fn fetch_times(&self, city_id: &str) -> Result<Vec<PrayerTimesDay>> {
        let url = self.endpoint(city_id);

        info!("Fetching prayer times for city {}", city_id);

        let body = self
            .http
            .get(&url)
            .header("x-parola", &self.api_pass)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let days: Vec<PrayerTimesDay> = serde_json::from_str(&body)?;

        info!("Fetched {} day records for city {}", days.len(), city_id);

        Ok(days)
    }

    fn endpoint(&self, city_id: &str) -> String {
        format!("{}/vakitler/{}", self.base_url, city_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(api_url: &str) -> VakitClient {
        VakitClient::new(&Config {
            api_url: api_url.to_string(),
            api_pass: "sekret".to_string(),
            cache_max_age: 172_800,
        })
    }

    #[test]
    fn test_endpoint_url() {
        let client = client("https://vakit.example");
        assert_eq!(client.endpoint("9541"), "https://vakit.example/vakitler/9541");
    }

    #[test]
    fn test_endpoint_url_trailing_slash() {
        let client = client("https://vakit.example/");
        assert_eq!(client.endpoint("9541"), "https://vakit.example/vakitler/9541");
    }
}
