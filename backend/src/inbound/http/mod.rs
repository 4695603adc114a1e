//! HTTP inbound adapter exposing the contacts REST endpoints.

pub mod contacts;
pub mod error;
pub mod extractors;
pub mod health;
pub mod schemas;
pub mod state;

pub use error::ApiResult;
