pub mod bot;
pub mod commands;
pub mod components;
pub mod model;
pub mod utils;

#[cfg(test)]
mod tests;
