pub mod config;
pub mod migrations;
