//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They work with domain
//! models, coordinate multiple repository calls, and own the calls to external APIs
//! (geocoding and media storage) and the in-process cache.

pub mod cache;
pub mod campground;
pub mod favorite;
pub mod geocoding;
pub mod maintenance;
pub mod media;
pub mod review;
pub mod seo;
pub mod user;
