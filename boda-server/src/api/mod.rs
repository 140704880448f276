//! API route modules
//!
//! # Structure
//!
//! - [`auth`] - login, registration and token verification
//! - [`health`] - health check (public)
//! - [`dashboard`] - aggregate statistics
//! - [`wedding_config`] - wedding configuration (singleton)
//! - [`hotel`] - hotel data (singleton)
//! - [`rooms`] - room inventory
//! - [`guests`] - guest list
//! - [`payments`] - payment recording and receipts
//! - [`audit_log`] - audit trail read side
//! - [`upload`] - cover image upload

pub mod audit_log;
pub mod auth;
pub mod dashboard;
pub mod guests;
pub mod health;
pub mod hotel;
pub mod payments;
pub mod rooms;
pub mod upload;
pub mod wedding_config;
