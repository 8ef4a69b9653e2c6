use std::{borrow::Cow, fmt};

use log::warn;
use once_cell::sync::Lazy;

use crate::{
    error::{Error, Result},
    Compound, Tag, Value,
};

static EMPTY_COMPOUND: Lazy<Compound> = Lazy::new(Compound::new);

/// An ordered list of NBT values that all share one tag.
///
/// The element type is locked by the first value pushed. After that, values
/// of any other type are refused without an error: [`List::push`] drops them
/// with a warning and [`List::set`] ignores them. Removing elements never
/// unlocks the type.
///
/// ```
/// use safenbt::{List, Tag, Value};
///
/// let mut list = List::new();
/// list.push(Value::Int(1));
/// list.push(Value::Short(2)); // wrong type, dropped
///
/// assert_eq!(list.len(), 1);
/// assert_eq!(list.element_type(), Tag::Int);
/// ```
#[derive(Debug, Clone)]
pub struct List {
    elements: Vec<Value>,
    element_type: Tag,
}

impl Default for List {
    fn default() -> Self {
        Self::new()
    }
}

impl List {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            element_type: Tag::End,
        }
    }

    pub(crate) fn with_capacity(element_type: Tag, capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            element_type,
        }
    }

    /// The locked element type, [`Tag::End`] while unconstrained.
    pub fn element_type(&self) -> Tag {
        self.element_type
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Append `value`, locking the element type if it is not yet set. A value
    /// of a different type than the lock is dropped.
    pub fn push(&mut self, value: impl Into<Value>) {
        let value = value.into();
        let tag = value.tag();

        if self.element_type == Tag::End {
            self.element_type = tag;
        } else if self.element_type != tag {
            warn!(
                "dropping {:?} appended to list of {:?}",
                tag, self.element_type
            );
            return;
        }

        self.elements.push(value);
    }

    /// Remove and return the value at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Value> {
        if index < self.elements.len() {
            Ok(self.elements.remove(index))
        } else {
            Err(Error::index_out_of_range(index, self.elements.len()))
        }
    }

    /// Replace the value at `index`. Does nothing if `index` is out of range
    /// or `value` does not match the element type.
    pub fn set(&mut self, index: usize, value: impl Into<Value>) {
        let value = value.into();
        if index >= self.elements.len() {
            return;
        }

        if self.element_type == Tag::End {
            self.element_type = value.tag();
        } else if self.element_type != value.tag() {
            return;
        }

        self.elements[index] = value;
    }

    pub fn compound_at(&self, index: usize) -> &Compound {
        self.get(index)
            .and_then(Value::as_compound)
            .unwrap_or(&*EMPTY_COMPOUND)
    }

    pub fn int_array_at(&self, index: usize) -> &[i32] {
        self.get(index).and_then(Value::as_int_array).unwrap_or(&[])
    }

    /// The double at `index`. Unlike the compound getters, other numeric
    /// types are not coerced and give 0.
    pub fn double_at(&self, index: usize) -> f64 {
        match self.get(index) {
            Some(Value::Double(v)) => *v,
            _ => 0.0,
        }
    }

    /// The float at `index`, or 0 for anything else.
    pub fn float_at(&self, index: usize) -> f32 {
        match self.get(index) {
            Some(Value::Float(v)) => *v,
            _ => 0.0,
        }
    }

    /// The string at `index`. Other values are rendered with their
    /// [`Display`][`fmt::Display`] form, and an index out of range gives the
    /// empty string.
    pub fn string_at(&self, index: usize) -> Cow<'_, str> {
        match self.get(index) {
            Some(Value::String(s)) => Cow::Borrowed(s),
            Some(other) => Cow::Owned(other.to_string()),
            None => Cow::Borrowed(""),
        }
    }
}

// Compares elements only. The stored lock can disagree for an emptied list,
// and it is not part of what gets encoded.
impl PartialEq for List {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.elements.iter().enumerate() {
            write!(f, "{}:{},", i, value)?;
        }
        f.write_str("]")
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<V: Into<Value>> Extend<V> for List {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        for v in iter {
            self.push(v);
        }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

#[cfg(feature = "arbitrary1")]
fn typed<'a, T, F>(u: &mut arbitrary::Unstructured<'a>, f: F) -> arbitrary::Result<List>
where
    F: FnMut(T) -> Value,
    T: arbitrary::Arbitrary<'a>,
{
    Ok(u.arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect())
}

// Lists have to be homogeneous, so pick the element tag first.
#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for List {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        use Value::*;

        match u.arbitrary::<Tag>()? {
            Tag::End => Ok(Self::new()),
            Tag::Byte => typed(u, Byte),
            Tag::Short => typed(u, Short),
            Tag::Int => typed(u, Int),
            Tag::Long => typed(u, Long),
            Tag::Float => typed(u, Float),
            Tag::Double => typed(u, Double),
            Tag::ByteArray => typed(u, ByteArray),
            Tag::String => typed(u, String),
            Tag::List => typed(u, List),
            Tag::Compound => typed(u, Compound),
            Tag::IntArray => typed(u, IntArray),
        }
    }
}
