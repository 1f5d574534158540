//! # API Facade
//!
//! [`ContactsApi`] is the single entry point for a contacts session. It owns
//! the store, the loaded list and the dirty flag, and walks the lifecycle
//! every invocation follows:
//!
//! ```text
//! open (load) -> add | display | select -> save_if_dirty
//! ```
//!
//! Loading is best effort: a missing, unreadable or malformed file is logged
//! and the session starts from an empty list. The failure is kept around
//! ([`ContactsApi::load_error`]) so a caller that cares can still act on it.
//! Saving returns its error after logging it, and the caller decides whether
//! that is fatal.
//!
//! Like the command layer, the API never writes to stdout or stderr.

use crate::commands;
use crate::error::{ContactsError, Result};
use crate::model::Contact;
use crate::store::ContactStore;
use tracing::{error, info, warn};

pub struct ContactsApi<S: ContactStore> {
    store: S,
    contacts: Vec<Contact>,
    dirty: bool,
    load_error: Option<ContactsError>,
}

impl<S: ContactStore> ContactsApi<S> {
    /// Loads the store, falling back to an empty list on failure.
    pub fn open(store: S) -> Self {
        let (contacts, load_error) = match store.load() {
            Ok(contacts) => {
                info!(count = contacts.len(), "contacts loaded");
                (contacts, None)
            }
            Err(err) => {
                log_failure(&err);
                (Vec::new(), Some(err))
            }
        };

        Self {
            store,
            contacts,
            dirty: false,
            load_error,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn load_error(&self) -> Option<&ContactsError> {
        self.load_error.as_ref()
    }

    pub fn take_load_error(&mut self) -> Option<ContactsError> {
        self.load_error.take()
    }

    pub fn add_contact(
        &mut self,
        family: String,
        name: String,
        number: i64,
        born: String,
    ) -> CmdResult {
        let result = commands::add::run(&mut self.contacts, family, name, number, born);
        self.dirty = true;
        info!(total = self.contacts.len(), "contact added");
        result
    }

    pub fn display_contacts(&self) -> CmdResult {
        let result = commands::display::run(&self.contacts);
        info!(count = result.listed().len(), "contact list displayed");
        result
    }

    pub fn select_contacts(&self, family: Option<&str>) -> CmdResult {
        let result = commands::select::run(&self.contacts, family);
        info!(
            family = family.unwrap_or("<any>"),
            matched = result.listed().len(),
            "contacts selected"
        );
        result
    }

    /// Writes the list back if anything changed since it was loaded.
    ///
    /// Returns `Ok(true)` when a save happened. On failure the session stays
    /// dirty and the logged error is returned.
    pub fn save_if_dirty(&mut self) -> Result<bool> {
        if !self.dirty {
            return Ok(false);
        }

        match self.store.save(&self.contacts) {
            Ok(()) => {
                self.dirty = false;
                info!(count = self.contacts.len(), "contacts saved");
                Ok(true)
            }
            Err(err) => {
                log_failure(&err);
                Err(err)
            }
        }
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

pub use crate::commands::CmdResult;

fn log_failure(err: &ContactsError) {
    match err {
        ContactsError::NotAnArray { .. } => warn!("{err}"),
        _ => error!("{err}"),
    }
}
