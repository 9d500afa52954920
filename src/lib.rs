pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod mgnify;
pub mod urls;
