use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A single entry in the contact book.
///
/// Records read back from disk are trusted as-is: a missing or mistyped field
/// shows as its default instead of failing the whole file. The stored element
/// itself is kept alongside, and saving writes it back untouched, so a record
/// the program cannot fully read is never rewritten with those defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    #[serde(default, deserialize_with = "lenient")]
    pub family: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub number: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub born: String,
    #[serde(skip)]
    stored: Option<Value>,
}

/// The four keys a record is written with when it has no stored form.
#[derive(Serialize)]
struct Fields<'a> {
    family: &'a str,
    name: &'a str,
    number: i64,
    born: &'a str,
}

impl Contact {
    pub fn new(
        family: impl Into<String>,
        name: impl Into<String>,
        number: i64,
        born: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            name: name.into(),
            number,
            born: born.into(),
            stored: None,
        }
    }

    /// Builds a record from one element of the stored array.
    /// Anything that is not an object shows as an empty record.
    pub fn from_value(value: Value) -> Self {
        let mut contact = Self::read_fields(value.clone());
        contact.stored = Some(value);
        contact
    }

    /// The element this record was loaded from, if any.
    pub fn stored(&self) -> Option<&Value> {
        self.stored.as_ref()
    }

    fn read_fields(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }
}

/// Records compare by their visible fields only.
impl PartialEq for Contact {
    fn eq(&self, other: &Self) -> bool {
        self.family == other.family
            && self.name == other.name
            && self.number == other.number
            && self.born == other.born
    }
}

impl Eq for Contact {}

impl Serialize for Contact {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.stored {
            // Only while the fields still read the same as the stored element.
            Some(stored) if Self::read_fields(stored.clone()) == *self => {
                stored.serialize(serializer)
            }
            _ => Fields {
                family: &self.family,
                name: &self.name,
                number: self.number,
                born: &self.born,
            }
            .serialize(serializer),
        }
    }
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
