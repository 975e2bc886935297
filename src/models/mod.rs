pub mod auth_model;
pub mod import_model;
pub mod quote_model;
