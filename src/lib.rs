pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod schema;
pub mod seeds;
pub mod utils;
