pub mod analyzers;
pub mod browser;
pub mod config;
pub mod console;
pub mod dataset;
pub mod error;
pub mod filters;
pub mod loader;
pub mod output;
pub mod parser;
pub mod registry;
pub mod session;
