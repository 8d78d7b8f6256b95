pub mod account_repo;
pub use account_repo::AccountRepository;
pub mod contact_repo;
pub use contact_repo::ContactRepository;
pub mod complaint_repo;
pub use complaint_repo::ComplaintRepository;
pub mod deal_repo;
pub use deal_repo::DealRepository;
pub mod invoice_repo;
pub use invoice_repo::InvoiceRepository;
pub mod task_repo;
pub use task_repo::TaskRepository;
pub mod event_repo;
pub use event_repo::ScheduledEventRepository;
pub mod certificate_repo;
pub use certificate_repo::CertificateRepository;
