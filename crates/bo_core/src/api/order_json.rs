//! JSON API for batting order generation
//!
//! Hosts that cannot link against the Rust types send a request string and
//! always get an `ApiResponse` JSON string back, success or not.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::error::{BattingError, Result};
use crate::generator::{BattingSlot, GeneratorSnapshot, OrderGenerator, RandDraw};
use crate::{MAX_ROSTER_SIZE, SCHEMA_VERSION};

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<ApiError>,
    pub schema_version: u8,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

impl From<&BattingError> for ApiError {
    fn from(err: &BattingError) -> Self {
        Self::new(err.code(), &err.to_string())
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            schema_version: SCHEMA_VERSION,
            timestamp: Utc::now(),
        }
    }

    pub fn error(error: ApiError) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            schema_version: SCHEMA_VERSION,
            timestamp: Utc::now(),
        }
    }
}

fn default_schema_version() -> u8 {
    SCHEMA_VERSION
}

/// Order request: the names in slot order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(default = "default_schema_version")]
    pub schema_version: u8,
    pub names: Vec<String>,
    /// Fixed seed for a reproducible order; drawn from entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderResponse {
    pub positions: Vec<BattingSlot>,
    /// Seed that reproduces this order
    pub seed_used: u64,
}

/// Build a generator from a name list, validating size and blanks
pub fn generator_from_names(names: &[String]) -> Result<OrderGenerator> {
    if names.len() > MAX_ROSTER_SIZE {
        return Err(BattingError::RosterTooLarge {
            requested: names.len(),
        });
    }

    let mut generator = OrderGenerator::new();
    generator.set_roster_size(names.len() as i64);
    for (i, name) in names.iter().enumerate() {
        generator.set_name(i, name.as_str())?;
    }
    Ok(generator)
}

/// Run an order request without the JSON layer
pub fn generate_order_for(request: &OrderRequest) -> Result<OrderResponse> {
    let mut generator = generator_from_names(&request.names)?;
    let seed = request.seed.unwrap_or_else(rand::random);
    let mut draw = RandDraw::seeded(seed);
    let positions = generator.generate_order(&mut draw)?.to_vec();
    Ok(OrderResponse {
        positions,
        seed_used: seed,
    })
}

fn to_json<T: Serialize>(response: &ApiResponse<T>) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| "{}".to_string())
}

/// Generate a batting order from a JSON request string
///
/// # Arguments
/// * `request_json` - JSON string containing OrderRequest
///
/// # Returns
/// JSON string containing ApiResponse<OrderResponse>
pub fn generate_order_json(request_json: &str) -> String {
    info!("Processing batting order request");

    let request: OrderRequest = match serde_json::from_str(request_json) {
        Ok(req) => req,
        Err(e) => {
            error!("Failed to parse OrderRequest: {}", e);
            let error = ApiError::new("PARSE_ERROR", &format!("Invalid JSON format: {}", e));
            return to_json(&ApiResponse::<OrderResponse>::error(error));
        }
    };

    if request.schema_version != SCHEMA_VERSION {
        warn!("Unsupported schema version {}", request.schema_version);
        let error = ApiError::new(
            "SCHEMA_MISMATCH",
            &format!(
                "Unsupported schema version {} (expected {})",
                request.schema_version, SCHEMA_VERSION
            ),
        );
        return to_json(&ApiResponse::<OrderResponse>::error(error));
    }

    match generate_order_for(&request) {
        Ok(response) => {
            info!(
                "Generated order for {} players (seed {})",
                response.positions.len(),
                response.seed_used
            );
            to_json(&ApiResponse::success(response))
        }
        Err(err) => {
            warn!("Batting order request rejected: {}", err);
            to_json(&ApiResponse::<OrderResponse>::error(ApiError::from(&err)))
        }
    }
}

/// Serialize the generator state for hand-off to another layer
pub fn snapshot_json(generator: &OrderGenerator) -> Result<String> {
    Ok(serde_json::to_string(generator)?)
}

/// Restore a generator from [`snapshot_json`] output
///
/// Malformed JSON is a `Json` error; a well-formed snapshot that breaks the
/// generator's invariants is `InvalidSnapshot`.
pub fn restore_json(snapshot: &str) -> Result<OrderGenerator> {
    let snapshot: GeneratorSnapshot = serde_json::from_str(snapshot)?;
    OrderGenerator::try_from(snapshot)
}
