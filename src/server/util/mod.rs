//! Small pure helpers shared across layers.

pub mod geo;
pub mod html;
pub mod slug;
pub mod url;
