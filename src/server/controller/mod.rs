//! HTTP request handlers.
//!
//! Controllers run the auth guard, validate and convert request payloads, call
//! into services, and convert domain models to DTOs. Every handler carries a
//! `#[utoipa::path]` annotation collected by the router into the OpenAPI document.

pub mod campground;
pub mod review;
pub mod seo;
pub mod user;
