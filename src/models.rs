pub mod auth;
pub mod commission;
pub mod lead;
pub mod rates;
pub mod tag;
pub mod trash;
