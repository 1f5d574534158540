//! # Command Layer
//!
//! Each command is a plain function over the in-memory contact list. Commands
//! never print and never touch storage; they return a [`CmdResult`] that the
//! caller renders however it likes.

use crate::index::DisplayContact;

pub mod add;
pub mod display;
pub mod select;

#[derive(Debug, Default)]
pub struct CmdResult {
    /// `Some` when the command produces a listing, even an empty one.
    pub listed_contacts: Option<Vec<DisplayContact>>,
    /// Confirmations shown to the user after the command ran.
    pub messages: Vec<String>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<DisplayContact>) -> Self {
        self.listed_contacts = Some(contacts);
        self
    }

    /// The listed contacts, or an empty slice when nothing was listed.
    pub fn listed(&self) -> &[DisplayContact] {
        self.listed_contacts.as_deref().unwrap_or_default()
    }
}
