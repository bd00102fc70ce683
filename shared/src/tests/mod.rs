// Unit tests for the client panel logic; shared fixtures live in `fixtures`.

pub mod fixtures;

mod models;
mod panel;
