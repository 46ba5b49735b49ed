pub mod auth;
pub mod commission_ledger;
pub mod commission_resolver;
pub mod lead_status;
pub mod leads;
pub mod tags;
pub mod trash;
