pub mod auth_service;
pub mod catalog_service;
pub mod favorite_service;
pub mod history_service;
