//! Test fixtures providing reusable test data without database insertion.
//!
//! Unlike factories, fixtures do NOT insert data into the database. Use them for
//! conversion and formatting tests that only need a populated entity model.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let campground = fixture::campground::entity();
//! let image = fixture::campground::image_entity(campground.id);
//! ```

pub mod campground;
pub mod user;
