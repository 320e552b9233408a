pub mod api;
pub mod calendar;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schedule;
pub mod services;
pub mod sheets;
pub mod state;
pub mod time;
pub mod timeline;
