//! Audit trail module
//!
//! # Architecture
//!
//! ```text
//! mutating handler
//!   └─ AuditRecorder::record() → mpsc → AuditWorker → SQLite (auditoria table)
//! ```
//!
//! Every state-changing operation on configuration, hotel, rooms, guests and
//! payments appends exactly one entry correlated to the acting user.
//! Recording is best-effort by design: a full channel or a failed insert is
//! logged and never surfaced to the caller, so the audit trail can never turn
//! a successful business operation into a reported failure.
//!
//! The table is append-only — there is no update or delete interface; reads
//! return the newest entries first with a fixed cap.

pub mod recorder;
pub mod storage;
pub mod types;
pub mod worker;

pub use recorder::AuditRecorder;
pub use storage::{AuditStorage, AuditStorageError};
pub use types::{AuditAction, AuditEntry, AuditRequest};
pub use worker::AuditWorker;
