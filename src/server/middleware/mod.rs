pub mod auth;
pub mod json;
pub mod session;
pub mod validation;

#[cfg(test)]
mod test;
