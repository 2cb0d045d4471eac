pub mod api;
pub mod app;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

mod test;
