use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// HTTP status code, repeated in the body for clients that only see JSON.
    pub status: u16,
    pub message: String,
}

/// A one-shot notification queued in the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FlashDto {
    /// Either `success` or `error`.
    pub kind: String,
    pub message: String,
}

/// Current session state.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionDto {
    pub user: Option<UserDto>,
    /// Pending flash messages. Reading them removes them from the session.
    pub flashes: Vec<FlashDto>,
}

/// Where a client should navigate after an action.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RedirectDto {
    pub redirect_to: String,
}
