mod audit_config;
mod audit_error;
mod audit_summary;
mod batch_auditor;
mod duplicate_tracker;
mod page;
mod page_auditor;
mod probe;
pub mod record;
mod robots_txt;
mod signals;

pub use audit_config::AuditConfig;
pub use audit_error::AuditError;
pub use batch_auditor::BatchAuditor;
