//! Data transfer objects shared by the HTTP API.
//!
//! Every type here is serialized to or deserialized from JSON (or multipart form fields)
//! at the API boundary and carries a `ToSchema` derive so it appears in the OpenAPI
//! document. Server-side domain models convert into these via `into_dto`.

pub mod api;
pub mod campground;
pub mod review;
pub mod user;
