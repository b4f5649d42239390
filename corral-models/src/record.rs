use serde::{Deserialize, Serialize};

/// Opaque per-record metadata. Preserved across backup and restore,
/// never interpreted by the client.
pub type Flags = Vec<serde_json::Value>;

/// A single stored entry: a key path, its flags and its value.
///
/// The JSON form is a 3-element array `[path, flags, value]`, which is
/// also the row format of backup files. A `null` in the flags position
/// decodes to no flags; an absent value marks a folder entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "RecordRow", into = "RecordRow")]
pub struct Record {
    pub path: String,
    pub flags: Flags,
    pub value: Option<String>,
}

type RecordRow = (String, Option<Flags>, Option<String>);

impl From<RecordRow> for Record {
    fn from((path, flags, value): RecordRow) -> Self {
        Record {
            path,
            flags: flags.unwrap_or_default(),
            value,
        }
    }
}

impl From<Record> for RecordRow {
    fn from(record: Record) -> Self {
        (record.path, Some(record.flags), record.value)
    }
}

impl Record {
    pub fn new(path: impl Into<String>, value: Option<String>) -> Self {
        Record {
            path: path.into(),
            flags: Flags::default(),
            value,
        }
    }
}

impl std::cmp::PartialEq for Record {
    fn eq(&self, rhs: &Self) -> bool {
        self.path.eq(&rhs.path)
    }
}

impl std::cmp::Eq for Record {}

impl std::hash::Hash for Record {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.path.hash(state)
    }
}

/// Wire shape of one entry in the store's enumeration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Flags", default)]
    pub flags: Option<Flags>,
    #[serde(rename = "Value", default)]
    pub value: Option<String>,
}

impl From<StoredEntry> for Record {
    fn from(entry: StoredEntry) -> Self {
        Record {
            path: entry.key,
            flags: entry.flags.unwrap_or_default(),
            value: entry.value,
        }
    }
}
