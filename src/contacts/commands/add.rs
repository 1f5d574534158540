use crate::commands::CmdResult;
use crate::model::Contact;

/// Appends a new contact to the end of the list.
///
/// No duplicate check is made and `born` is stored as given.
pub fn run(
    contacts: &mut Vec<Contact>,
    family: String,
    name: String,
    number: i64,
    born: String,
) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(format!("Contact added: {} {}", family, name));
    contacts.push(Contact::new(family, name, number, born));
    result
}
