pub mod commands;
pub mod models;
pub mod ws;
