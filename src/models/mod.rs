pub mod chat;
pub mod portfolio;
