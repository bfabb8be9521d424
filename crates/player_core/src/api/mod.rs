//! JSON boundary for player creation.
//!
//! String-in, string-out so the embedding layer never handles domain types
//! directly. The envelope always serializes; a malformed request comes back
//! as a structured error, not a panic.

use crate::error::{Result, ValidationError};
use crate::model::player::Player;
use crate::model::position::Position;
use crate::model::uid::parse_uid;
use serde::{Deserialize, Serialize};

/// Only schema this build understands. Bump on breaking request changes.
pub const SCHEMA_VERSION: u8 = 1;

/// Creation request as sent by the game/UI layer.
///
/// `seed` is optional in the schema but required by the core: a request
/// without one is rejected with `MissingSeed` rather than falling back to
/// wall-clock entropy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlayerRequest {
    pub schema_version: u8,
    pub uid: String,
    pub name: String,
    pub position: String,
    pub age_months: f32,
    pub ca_range: (u8, u8),
    pub pa_range: (u8, u8),
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

/// Uniform response envelope: exactly one of `data` and `error` is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub schema_version: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self { success: true, schema_version: SCHEMA_VERSION, data: Some(data), error: None }
    }

    pub fn err(error: &ValidationError) -> Self {
        Self {
            success: false,
            schema_version: SCHEMA_VERSION,
            data: None,
            error: Some(ApiError { code: error.code().to_string(), message: error.to_string() }),
        }
    }
}

/// Validate and execute a creation request.
pub fn create_player(request: &CreatePlayerRequest) -> Result<Player> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(ValidationError::UnsupportedSchemaVersion(request.schema_version));
    }
    let seed = request.seed.ok_or(ValidationError::MissingSeed)?;
    let uid = parse_uid(&request.uid)?;
    let position: Position = request
        .position
        .parse()
        .map_err(|_| ValidationError::UnknownPosition(request.position.clone()))?;
    Player::generate(
        uid,
        request.name.clone(),
        position,
        request.age_months,
        request.ca_range,
        request.pa_range,
        seed,
    )
}

/// JSON-in, JSON-out creation endpoint.
pub fn create_player_json(request_json: &str) -> String {
    let response = match serde_json::from_str::<CreatePlayerRequest>(request_json) {
        Ok(request) => match create_player(&request) {
            Ok(player) => ApiResponse::ok(player),
            Err(err) => ApiResponse::err(&err),
        },
        Err(err) => {
            ApiResponse::err(&ValidationError::MalformedRequest(err.to_string()))
        }
    };
    serde_json::to_string(&response).unwrap_or_else(|err| {
        tracing::error!(error = %err, "response serialization failed");
        format!(
            "{{\"success\":false,\"schema_version\":{SCHEMA_VERSION},\
             \"error\":{{\"code\":\"INTERNAL\",\"message\":\"serialization failed\"}}}}"
        )
    })
}
