pub mod commission_repo;
pub use commission_repo::CommissionRepository;
pub mod lead_repo;
pub use lead_repo::LeadRepository;
pub mod rate_repo;
pub use rate_repo::RateRepository;
pub mod tag_repo;
pub use tag_repo::TagRepository;
pub mod trash_repo;
pub use trash_repo::TrashRepository;
pub mod user_repo;
pub use user_repo::UserRepository;
