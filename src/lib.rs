pub mod api;
pub mod boot;
pub mod chat;
pub mod config;
pub mod controller;
pub mod dom;
pub mod driver;
pub mod loader;
pub mod models;
pub mod render;
pub mod shell;
pub mod state;

mod tests;
