pub mod config;
pub mod logging;

// Core modules
pub mod diagnostics;
pub mod error;
pub mod plugin;
pub mod prefs;
pub mod redirect;
pub mod request;
pub mod store;
pub mod validate;
