pub mod auth;
pub mod commissions;
pub mod leads;
pub mod tags;
pub mod trash;
