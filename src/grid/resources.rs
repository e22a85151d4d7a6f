// src/grid/resources.rs

use bevy::prelude::*;
use std::collections::BTreeMap;

use super::definitions::CellKey;
use super::exporter::CellSource;

/// The text fields shown in the editor window, keyed by identifier (`a11` ... `a33`).
/// Owned by the UI; exports only read it.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct CellFields {
    fields: BTreeMap<String, String>,
}

impl Default for CellFields {
    fn default() -> Self {
        Self {
            fields: CellKey::all().map(|key| (key.id(), String::new())).collect(),
        }
    }
}

impl CellFields {
    /// Fills the nine fields in row-major order. Missing trailing values stay empty,
    /// extra values are ignored.
    pub fn from_row_major<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cells = Self::default();
        for (key, value) in CellKey::all().zip(values) {
            cells.fields.insert(key.id(), value.into());
        }
        cells
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.fields.get(id).map(String::as_str)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut String> {
        self.fields.get_mut(id)
    }

    #[cfg(test)]
    pub fn remove(&mut self, id: &str) -> Option<String> {
        self.fields.remove(id)
    }

    pub fn clear_values(&mut self) {
        self.fields.values_mut().for_each(String::clear);
    }

    #[cfg(test)]
    pub fn swap(&mut self, a: &str, b: &str) -> bool {
        match (self.fields.get(a).cloned(), self.fields.get(b).cloned()) {
            (Some(va), Some(vb)) => {
                self.fields.insert(a.to_string(), vb);
                self.fields.insert(b.to_string(), va);
                true
            }
            _ => false,
        }
    }
}

impl CellSource for CellFields {
    fn lookup(&self, id: &str) -> Option<&str> {
        self.get(id)
    }
}
