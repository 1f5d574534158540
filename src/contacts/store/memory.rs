use super::ContactStore;
use crate::error::Result;
use crate::model::Contact;

/// In-memory storage for testing.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    contacts: Vec<Contact>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            saves: 0,
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Number of times `save` has been called.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ContactStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Contact>> {
        Ok(self.contacts.clone())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.contacts = contacts.to_vec();
        self.saves += 1;
        Ok(())
    }
}

// --- Test Fixtures ---
