pub mod capture;
pub mod config;
pub mod error;
pub mod panel;
pub mod util;
