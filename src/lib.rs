pub mod bot;
pub mod config;
