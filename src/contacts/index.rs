use crate::model::Contact;

/// A contact paired with the 1-based position it is listed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayContact {
    pub index: usize,
    pub contact: Contact,
}

/// Assigns display indexes in listing order, starting at 1.
pub fn index_contacts<I>(contacts: I) -> Vec<DisplayContact>
where
    I: IntoIterator<Item = Contact>,
{
    contacts
        .into_iter()
        .enumerate()
        .map(|(i, contact)| DisplayContact {
            index: i + 1,
            contact,
        })
        .collect()
}
