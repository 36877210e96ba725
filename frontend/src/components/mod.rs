pub mod comparator;
pub mod config;
pub mod validator;
