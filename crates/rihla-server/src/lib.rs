pub mod auth;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
