pub mod components;
pub mod error;
