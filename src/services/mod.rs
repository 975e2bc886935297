pub mod auth_service;
pub mod import_service;
pub mod quote_service;
pub mod source_service;
