//! Demonstration web service.
//!
//! Thin HTTP glue over the library: three GET endpoints served by a
//! plain hyper 1.x connection loop, no framework.
//!
//! | Route   | Behavior                                                      |
//! |---------|---------------------------------------------------------------|
//! | `/`     | Sets a demo cookie (UA-aware `SameSite=None`) and echoes the header |
//! | `/test` | `Test success!`                                               |
//! | `/env`  | JSON echo of hostname, `Host` header, and listen config       |
//!
//! ```rust,no_run
//! use cookienet::serve::{config::ServeConfig, server};
//!
//! #[tokio::main]
//! async fn main() {
//!     if let Err(e) = server::run(ServeConfig::from_env()).await {
//!         eprintln!("server error: {e}");
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod routes;
pub mod server;
