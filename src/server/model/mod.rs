//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data layer
//! boundary; controllers convert them into DTOs with `into_dto`.

pub mod campground;
pub mod geo;
pub mod review;
pub mod user;
