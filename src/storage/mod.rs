//! Persistence for tickit
//!
//! The core never does I/O itself; commands load the profile here, run the
//! pure domain/view operations, and save the replacement state back.

mod config;
mod profile_store;

pub use config::{Config, DefaultFormat};
pub use profile_store::ProfileStore;
