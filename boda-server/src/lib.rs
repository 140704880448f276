//! Boda Suite Server - wedding administration backend
//!
//! # Architecture overview
//!
//! - **Database** (`db`): embedded single-file SQLite store (sqlx, WAL)
//! - **Reconciliation** (`billing`): derives guest payment status and
//!   pending balance from the raw payment history
//! - **Audit** (`audit`): append-only trail of every mutating action,
//!   written best-effort by a background worker
//! - **Auth** (`auth`): JWT + Argon2 authentication
//! - **HTTP API** (`api`): RESTful routes consumed by the dashboard
//! - **Receipts** (`receipt`): fixed-layout payment receipts
//!
//! # Module structure
//!
//! ```text
//! boda-server/src/
//! ├── core/       # config, server, state, errors
//! ├── auth/       # JWT auth, middleware, extractor
//! ├── api/        # HTTP routes and handlers
//! ├── billing/    # payment reconciliation engine
//! ├── audit/      # audit trail (recorder, worker, storage)
//! ├── receipt/    # receipt rendering
//! ├── db/         # database layer (models, repositories)
//! └── utils/      # errors, logging
//! ```

pub mod api;
pub mod audit;
pub mod auth;
pub mod billing;
pub mod core;
pub mod db;
pub mod receipt;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState, build_app};
pub use utils::{AppError, AppResult, init_logger};

/// Prepare the process environment: dotenv and logging
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____            __         _____       _ __
   / __ )____  ____/ /___ _   / ___/__  __(_) /____
  / __  / __ \/ __  / __ `/   \__ \/ / / / / __/ _ \
 / /_/ / /_/ / /_/ / /_/ /   ___/ / /_/ / / /_/  __/
/_____/\____/\__,_/\__,_/   /____/\__,_/_/\__/\___/
"#
    );
}
