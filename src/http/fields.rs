//! HTTP field lines abstraction for [`HttpParser`](crate::http::parser::HttpParser)
//!
//! A field is a `name: value` line following the start-line of a message.
//! Fields are stored in an ordered map to preserve the order in which each
//! name was first seen. Names are stored as given: `Host` and `host` are two
//! different entries.
//!
//! A name may occur several times in a message. The collection never
//! overwrites: the first repetition promotes the stored [`FieldEntry::Single`]
//! into a [`FieldEntry::Many`], later repetitions append to it.
//!
//! This abstraction does not interpret values (no comma splitting, no
//! trimming). The parser applies its own presentation rules on lookup.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::http::error::HttpParserError;

/// An immutable name/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpField {
    name: String,
    value: String,
}

impl HttpField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for HttpField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Values stored under one field name.
///
/// A repeated name is stored as `Many`, which holds at least two fields by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEntry {
    Single(HttpField),
    Many {
        first: HttpField,
        second: HttpField,
        rest: Vec<HttpField>,
    },
}

impl FieldEntry {
    /// Fields in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &HttpField> {
        let (first, second, rest): (_, _, &[HttpField]) = match self {
            FieldEntry::Single(field) => (field, None, &[]),
            FieldEntry::Many {
                first,
                second,
                rest,
            } => (first, Some(second), rest),
        };
        std::iter::once(first).chain(second).chain(rest)
    }

    pub fn count(&self) -> usize {
        match self {
            FieldEntry::Single(_) => 1,
            FieldEntry::Many { rest, .. } => 2 + rest.len(),
        }
    }

    pub fn first(&self) -> &HttpField {
        match self {
            FieldEntry::Single(field) => field,
            FieldEntry::Many { first, .. } => first,
        }
    }

    fn push(&mut self, field: HttpField) {
        match self {
            FieldEntry::Many { rest, .. } => rest.push(field),
            FieldEntry::Single(first) => {
                let placeholder = HttpField::new(String::new(), String::new());
                let first = std::mem::replace(first, placeholder);
                *self = FieldEntry::Many {
                    first,
                    second: field,
                    rest: Vec::new(),
                };
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpFieldCollection {
    fields: IndexMap<String, FieldEntry>,
}

impl HttpFieldCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from pre-built fields, applying the same
    /// promotion rule as successive [`add`](Self::add) calls.
    pub fn from_fields(fields: impl IntoIterator<Item = HttpField>) -> Self {
        let mut collection = Self::new();
        collection.extend(fields);
        collection
    }

    pub fn add(&mut self, field: HttpField) {
        match self.fields.entry(field.name.clone()) {
            Entry::Occupied(mut slot) => slot.get_mut().push(field),
            Entry::Vacant(slot) => {
                slot.insert(FieldEntry::Single(field));
            }
        }
    }

    pub fn get(&self, name: &str) -> Result<&FieldEntry, HttpParserError> {
        self.fields
            .get(name)
            .ok_or_else(|| HttpParserError::field_not_found(name))
    }

    /// Removes every value stored under `name`, keeping the order of the
    /// remaining names.
    pub fn delete(&mut self, name: &str) -> Result<FieldEntry, HttpParserError> {
        self.fields
            .shift_remove(name)
            .ok_or_else(|| HttpParserError::field_not_found(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldEntry)> {
        self.fields.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

impl Extend<HttpField> for HttpFieldCollection {
    fn extend<T: IntoIterator<Item = HttpField>>(&mut self, iter: T) {
        for field in iter {
            self.add(field);
        }
    }
}

impl FromIterator<HttpField> for HttpFieldCollection {
    fn from_iter<T: IntoIterator<Item = HttpField>>(iter: T) -> Self {
        Self::from_fields(iter)
    }
}
