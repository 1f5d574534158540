use crate::commands::CmdResult;
use crate::index::index_contacts;
use crate::model::Contact;

/// Lists every contact, numbered from 1.
pub fn run(contacts: &[Contact]) -> CmdResult {
    CmdResult::default().with_listed_contacts(index_contacts(contacts.to_vec()))
}
