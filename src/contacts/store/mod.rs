//! # Storage Layer
//!
//! The contact book is a single ordered list of [`Contact`] records. The
//! [`ContactStore`] trait hides where that list lives so the API and command
//! layers can be exercised without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: the production store, one JSON file holding an
//!   array of objects.
//! - [`memory::InMemoryStore`]: keeps the list in memory; used by tests.
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "family": "Ivanov",
//!         "name": "Petr",
//!         "number": 12345,
//!         "born": "1990-01-01"
//!     }
//! ]
//! ```
//!
//! Elements that were loaded from the file are written back exactly as they
//! were read, including extra keys, mistyped values and non-object entries.
//! Only records created in this session use the four-key layout above.
//!
//! Files are written in place. There is no atomic rename and no locking, so a
//! crash mid-write or two concurrent writers can leave a truncated file.

use crate::error::Result;
use crate::model::Contact;

pub mod fs;
pub mod memory;

/// Abstract interface for contact storage.
///
/// Both methods report failures as errors; deciding whether a failure is
/// fatal is left to the caller.
pub trait ContactStore {
    /// Load every stored contact, in stored order.
    /// A store that has never been written yields an empty list.
    fn load(&self) -> Result<Vec<Contact>>;

    /// Replace the stored contents with `contacts`.
    fn save(&mut self, contacts: &[Contact]) -> Result<()>;
}
