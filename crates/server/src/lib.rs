pub mod config;
pub mod error;
pub mod prompt;
pub mod routes;
pub mod service;
pub mod state;
pub mod table;
