pub mod api;
pub mod avatar;
pub mod error;
pub mod profile;
