pub mod api;
pub mod board;
pub mod errors;
pub mod models;
pub mod prefs;
pub mod ui;
