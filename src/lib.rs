//! # Course Roster: Student Course-Registration Records
//!
//! An in-memory [`Registry`] of enrollment [`Record`]s with field validation
//! and duplicate suppression, backed by a line-oriented text [`Store`] with a
//! single-generation backup.
//!
//! ## Layout
//!
//! - [`record`]: the enrollment value type and its identity key
//! - [`validate`]: pure field predicates and structured validation errors
//! - [`registry`]: add/remove/modify/search/sort/count/import over records
//! - [`store`]: load/save/import/export/restore against text files
//! - [`config`]: store file locations
//! - [`logging`]: `tracing` subscriber setup
//!
//! The registry never touches the filesystem and the store never applies
//! validation rules.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use course_roster::{Record, Registry, Store, StoreConfig};
//!
//! course_roster::logging::init();
//!
//! let store = Store::open(StoreConfig::default())?;
//! let mut registry = Registry::from_records(store.load());
//!
//! registry.add(Record::new(
//!     "123456", "john smith", "ABC123", "intro to cs", "2024-F", 3, 3.0, "exam",
//! ));
//! for record in registry.sorted_by_credit() {
//!     println!("{record}");
//! }
//!
//! store.save(registry.records());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod registry;
pub mod store;
pub mod text;
pub mod validate;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use record::{CourseType, IdentityKey, Record};
pub use registry::{ImportReport, Registry};
pub use store::Store;
pub use validate::{ValidationError, ValidationKind};
