pub mod app;
pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod handlers;
pub mod hotel;
pub mod image;
pub mod middleware;
pub mod nav;
pub mod state;
pub mod storage;
pub mod store;
