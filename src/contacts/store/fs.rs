use super::ContactStore;
use crate::error::{ContactsError, Result};
use crate::model::Contact;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Contacts stored as a pretty-printed JSON array in a single file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Contact>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| ContactsError::Read {
            path: self.path.clone(),
            source,
        })?;
        let value: serde_json::Value =
            serde_json::from_str(&content).map_err(|source| ContactsError::Parse {
                path: self.path.clone(),
                source,
            })?;

        match value {
            serde_json::Value::Array(items) => {
                Ok(items.into_iter().map(Contact::from_value).collect())
            }
            _ => Err(ContactsError::NotAnArray {
                path: self.path.clone(),
            }),
        }
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        let content = to_pretty_json(contacts)?;
        fs::write(&self.path, content).map_err(|source| ContactsError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

fn to_pretty_json(contacts: &[Contact]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    contacts.serialize(&mut ser)?;
    Ok(buf)
}
