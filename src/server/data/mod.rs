//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models where callers never need the raw row. All database queries, inserts,
//! updates, and deletes are performed through these repositories.

pub mod campground;
pub mod favorite;
pub mod maintenance;
pub mod review;
pub mod user;

#[cfg(test)]
mod test;
