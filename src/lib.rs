#[macro_use]
mod env;

pub mod config;
pub mod handler;
pub mod logging;
pub mod model;
pub mod server;
