use crate::commands::CmdResult;
use crate::index::index_contacts;
use crate::model::Contact;

/// Contacts whose family equals `family` exactly, in their original order.
pub fn matching(contacts: &[Contact], family: &str) -> Vec<Contact> {
    contacts
        .iter()
        .filter(|c| c.family == family)
        .cloned()
        .collect()
}

/// Lists the contacts with the given family, renumbered from 1.
/// Without a family every contact is listed.
pub fn run(contacts: &[Contact], family: Option<&str>) -> CmdResult {
    let selected = match family {
        Some(family) => matching(contacts, family),
        None => contacts.to_vec(),
    };
    CmdResult::default().with_listed_contacts(index_contacts(selected))
}
