pub mod comparison;
pub mod config;
pub mod validation;
