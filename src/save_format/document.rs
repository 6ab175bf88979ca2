use std::collections::HashMap;

/// A single field looked up in a [`Section`].
///
/// Save files express lists by repeating a key, so one key can hold zero, one
/// or many values. This enum makes that distinction explicit for consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Absent,
    Scalar(&'a str),
    List(&'a [String]),
}

impl<'a> FieldValue<'a> {
    /// Treats a single empty value (`key =`) as absent.
    pub fn present(self) -> Self {
        match self {
            FieldValue::Scalar("") => FieldValue::Absent,
            other => other,
        }
    }

    /// Returns the first value of the field, if any.
    pub fn first(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Absent => None,
            FieldValue::Scalar(value) => Some(value),
            FieldValue::List(values) => values.first().map(String::as_str),
        }
    }

    /// Iterates over every value of the field in file order.
    pub fn values(&self) -> impl Iterator<Item = &'a str> {
        let values: &'a [String] = match *self {
            FieldValue::List(values) => values,
            _ => &[],
        };
        self.scalar()
            .into_iter()
            .chain(values.iter().map(String::as_str))
    }

    fn scalar(&self) -> Option<&'a str> {
        match *self {
            FieldValue::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

/// A named group of key/value pairs.
///
/// # Fields
///
/// * `entries` - Values per key, in the order they appear in the file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Section {
    pub(crate) entries: HashMap<String, Vec<String>>,
}

impl Section {
    /// Looks up `key`, exposing one occurrence as a scalar and several as a list.
    pub fn field(&self, key: &str) -> FieldValue<'_> {
        match self.entries.get(key).map(Vec::as_slice) {
            None | Some([]) => FieldValue::Absent,
            Some([single]) => FieldValue::Scalar(single),
            Some(values) => FieldValue::List(values),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, key: &str, value: String) {
        self.entries.entry(key.to_owned()).or_default().push(value);
    }
}

/// A parsed save file: sections keyed by their header name.
///
/// Keys that appear before the first header live in the section named `""`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SaveDocument {
    pub(crate) sections: HashMap<String, Section>,
}

impl SaveDocument {
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// True when the file produced no sections at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub(crate) fn section_mut(&mut self, name: &str) -> &mut Section {
        self.sections.entry(name.to_owned()).or_default()
    }
}
