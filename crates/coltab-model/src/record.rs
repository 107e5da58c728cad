use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use crate::schema::Schema;

/// One resolved data row: every schema column mapped to its cell text.
///
/// Empty cells hold `""`; a column is never absent. Fields keep schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Builds a record from a schema and one value per column.
    ///
    /// Missing trailing values are filled with empty strings and surplus
    /// values are dropped, so the result always matches the schema.
    pub fn from_values(schema: &Schema, values: Vec<String>) -> Self {
        let mut values = values.into_iter();
        let fields = schema
            .iter()
            .map(|column| (column.name.clone(), values.next().unwrap_or_default()))
            .collect();
        Self { fields }
    }

    /// Value of the first field called `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(column, _)| column == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(column, _)| column.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(column, value)| (column.as_str(), value.as_str()))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

/// All records recovered from one report, with the schema they share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub schema: Schema,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            records: Vec::new(),
        }
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let columns: Vec<&str> = self.schema.names().collect();
        let mut state = serializer.serialize_struct("Table", 2)?;
        state.serialize_field("columns", &columns)?;
        state.serialize_field("records", &self.records)?;
        state.end()
    }
}
