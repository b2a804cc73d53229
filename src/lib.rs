pub mod app;
pub mod config;
pub mod error;
pub mod messages;
pub mod search;
pub mod source;
pub mod thumbnail;
pub mod ui;
