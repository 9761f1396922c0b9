pub mod config;
pub mod db;
pub mod dto;
pub mod entity;
pub mod error;
pub mod flash;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod session;
pub mod state;
pub mod views;
