use serde::Deserialize;

/// Nominatim reverse geocoding response structure
#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

/// Service for reverse geocoding coordinates into a postal address.
///
/// The provider is optional: without a configured base URL, or whenever a
/// lookup fails, the service falls back to a plain coordinate-pair string
/// so the report flow is never blocked on geocoding.
pub struct GeocodingService {
    client: reqwest::Client,
    base_url: Option<String>,
}

impl GeocodingService {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("VozUrbanaCore/1.0 (urban-problem-reports)")
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.map(|u| u.trim_end_matches('/').to_string()),
        }
    }

    /// Fallback display value when no address can be resolved
    pub fn fallback_address(latitude: f64, longitude: f64) -> String {
        format!("{:.6}, {:.6}", latitude, longitude)
    }

    /// Resolve coordinates to an address string.
    ///
    /// Never fails: provider errors are logged and degrade to the
    /// coordinate fallback.
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> String {
        let Some(base_url) = &self.base_url else {
            tracing::debug!("No geocoder configured, using coordinate fallback");
            return Self::fallback_address(latitude, longitude);
        };

        let url = format!(
            "{}/reverse?lat={}&lon={}&format=json&accept-language=pt-BR",
            base_url, latitude, longitude
        );

        match self.execute_request(&url).await {
            Ok(Some(address)) => address,
            Ok(None) => Self::fallback_address(latitude, longitude),
            Err(e) => {
                tracing::warn!("Reverse geocoding failed, using fallback: {}", e);
                Self::fallback_address(latitude, longitude)
            }
        }
    }

    async fn execute_request(&self, url: &str) -> Result<Option<String>, String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| format!("request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("provider returned HTTP {}", response.status()));
        }

        let body: ReverseResponse = response
            .json()
            .await
            .map_err(|e| format!("invalid response body: {}", e))?;

        Ok(body.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_address_format() {
        let address = GeocodingService::fallback_address(-23.5505199, -46.6333094);
        assert_eq!(address, "-23.550520, -46.633309");
    }

    #[tokio::test]
    async fn test_reverse_without_provider_degrades_to_coordinates() {
        let service = GeocodingService::new(None);
        let address = service.reverse(-23.5505199, -46.6333094).await;
        assert_eq!(address, "-23.550520, -46.633309");
    }
}
