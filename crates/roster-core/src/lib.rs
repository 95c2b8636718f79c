pub mod config;
pub mod logging;

// Core modules
pub mod connectivity;
pub mod message;
pub mod outcome;
pub mod retry;
pub mod service;
pub mod source;
pub mod user;
