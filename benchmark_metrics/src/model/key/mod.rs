//!
//! The benchmark group key.
//!

pub mod field;
pub mod value;

use serde::Deserialize;
use serde::Serialize;

use crate::model::record::BenchmarkRecord;

use self::field::Field;
use self::value::Value;

///
/// The benchmark group key.
///
/// An ordered tuple of field values. Keys built from the same field list
/// compare by their values in field order.
///
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Key {
    /// The field-value pairs, in the order the fields were requested.
    pub entries: Vec<(Field, Value)>,
}

impl Key {
    ///
    /// Builds the key of a record for the given fields.
    ///
    pub fn of(record: &BenchmarkRecord, fields: &[Field]) -> Self {
        Self {
            entries: fields
                .iter()
                .map(|field| (*field, field.extract(record)))
                .collect(),
        }
    }

    ///
    /// Returns the value of a field, if the key includes it.
    ///
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry_field, _)| *entry_field == field)
            .map(|(_, value)| value)
    }

    ///
    /// Returns the function name, if the key includes it.
    ///
    pub fn function(&self) -> Option<&str> {
        match self.get(Field::Function) {
            Some(Value::Text(function)) => Some(function.as_str()),
            _ => None,
        }
    }

    ///
    /// Returns the grid size, if the key includes it.
    ///
    pub fn grid_size(&self) -> Option<u64> {
        match self.get(Field::GridSize) {
            Some(Value::Integer(grid_size)) => Some(*grid_size),
            _ => None,
        }
    }

    ///
    /// Returns the device label, if the key includes it and it is set.
    ///
    pub fn device(&self) -> Option<&str> {
        match self.get(Field::Device) {
            Some(Value::Text(device)) => Some(device.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "<all>");
        }
        for (index, (field, value)) in self.entries.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}={value}")?;
        }
        Ok(())
    }
}
