use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Query parameters for reverse geocoding
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ReverseGeocodeQuery {
    pub latitude: f64,
    pub longitude: f64,
}

/// Response DTO for reverse geocoding
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddressResponseDto {
    /// Resolved postal address, or a "lat, lon" fallback when the
    /// geocoding provider is unavailable
    pub address: String,
}
