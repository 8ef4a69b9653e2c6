use std::fmt;

use once_cell::sync::Lazy;

use crate::{List, Tag, Value, ANY_NUMERIC};

#[cfg(not(feature = "preserve-order"))]
type Map = std::collections::BTreeMap<String, Value>;
#[cfg(not(feature = "preserve-order"))]
type MapIntoIter = std::collections::btree_map::IntoIter<String, Value>;

#[cfg(feature = "preserve-order")]
type Map = indexmap::IndexMap<String, Value>;
#[cfg(feature = "preserve-order")]
type MapIntoIter = indexmap::map::IntoIter<String, Value>;

static EMPTY_COMPOUND: Lazy<Compound> = Lazy::new(Compound::new);
static EMPTY_LIST: Lazy<List> = Lazy::new(List::new);

/// A mapping of string keys to NBT values, the struct-like building block of
/// NBT.
///
/// Keys iterate in sorted order, or in insertion order with the
/// `preserve-order` feature. Either way the order is only used to make
/// encoding deterministic; equality ignores it.
///
/// # Lenient getters
///
/// The typed getters (`get_int`, `get_string`, `get_compound`, ...) never
/// fail. If the key is missing, or holds a value of an unsuitable type, they
/// return a default: zero, the empty string, an empty array, an empty
/// compound or list. Numeric getters accept any numeric value and coerce it,
/// see [`Value::as_i32`] and friends. Use [`Compound::get`] or
/// [`Compound::contains_key_of_type`] when the difference matters.
///
/// ```
/// use safenbt::{Compound, Tag};
///
/// let mut c = Compound::new();
/// c.set_float("speed", 2.5);
/// c.set_string("name", "Bob");
///
/// assert_eq!(c.get_int("speed"), 2);
/// assert_eq!(c.get_int("name"), 0);
/// assert_eq!(c.get_string("speed"), "");
/// assert!(c.get_compound("missing").is_empty());
/// assert_eq!(c.tag_type("name"), Tag::String);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound {
    map: Map,
}

impl Compound {
    pub fn new() -> Self {
        Self { map: Map::new() }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.map.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> + '_ {
        self.map.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Set `key` to `value`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.map.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.map.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.map.get_mut(key)
    }

    #[cfg(not(feature = "preserve-order"))]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.map.remove(key)
    }

    #[cfg(feature = "preserve-order")]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.map.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    /// Tag of the value at `key`, or [`Tag::End`] if there is none.
    pub fn tag_type(&self, key: &str) -> Tag {
        self.map.get(key).map_or(Tag::End, Value::tag)
    }

    /// Whether `key` holds a value whose type ID is `wanted`. Passing
    /// [`ANY_NUMERIC`] matches any numeric value.
    ///
    /// ```
    /// use safenbt::{Compound, Tag, ANY_NUMERIC};
    ///
    /// let mut c = Compound::new();
    /// c.set_short("s", 1);
    /// assert!(c.contains_key_of_type("s", Tag::Short as u8));
    /// assert!(c.contains_key_of_type("s", ANY_NUMERIC));
    /// assert!(!c.contains_key_of_type("s", Tag::Int as u8));
    /// ```
    pub fn contains_key_of_type(&self, key: &str, wanted: u8) -> bool {
        let tag = self.tag_type(key);
        tag as u8 == wanted || (wanted == ANY_NUMERIC && tag.is_numeric())
    }

    pub fn set_byte(&mut self, key: impl Into<String>, v: i8) {
        self.insert(key, Value::Byte(v));
    }

    pub fn set_short(&mut self, key: impl Into<String>, v: i16) {
        self.insert(key, Value::Short(v));
    }

    pub fn set_int(&mut self, key: impl Into<String>, v: i32) {
        self.insert(key, Value::Int(v));
    }

    pub fn set_long(&mut self, key: impl Into<String>, v: i64) {
        self.insert(key, Value::Long(v));
    }

    pub fn set_float(&mut self, key: impl Into<String>, v: f32) {
        self.insert(key, Value::Float(v));
    }

    pub fn set_double(&mut self, key: impl Into<String>, v: f64) {
        self.insert(key, Value::Double(v));
    }

    pub fn set_string(&mut self, key: impl Into<String>, v: impl Into<String>) {
        self.insert(key, Value::String(v.into()));
    }

    pub fn set_byte_array(&mut self, key: impl Into<String>, v: Vec<i8>) {
        self.insert(key, Value::ByteArray(v));
    }

    pub fn set_int_array(&mut self, key: impl Into<String>, v: Vec<i32>) {
        self.insert(key, Value::IntArray(v));
    }

    /// Booleans are stored as a byte of 1 or 0.
    pub fn set_bool(&mut self, key: impl Into<String>, v: bool) {
        self.insert(key, Value::from(v));
    }

    pub fn set_compound(&mut self, key: impl Into<String>, v: Compound) {
        self.insert(key, Value::Compound(v));
    }

    pub fn set_list(&mut self, key: impl Into<String>, v: List) {
        self.insert(key, Value::List(v));
    }

    pub fn get_byte(&self, key: &str) -> i8 {
        self.get(key).and_then(Value::as_i8).unwrap_or(0)
    }

    pub fn get_short(&self, key: &str) -> i16 {
        self.get(key).and_then(Value::as_i16).unwrap_or(0)
    }

    pub fn get_int(&self, key: &str) -> i32 {
        self.get(key).and_then(Value::as_i32).unwrap_or(0)
    }

    pub fn get_long(&self, key: &str) -> i64 {
        self.get(key).and_then(Value::as_i64).unwrap_or(0)
    }

    pub fn get_float(&self, key: &str) -> f32 {
        self.get(key).and_then(Value::as_f32).unwrap_or(0.0)
    }

    pub fn get_double(&self, key: &str) -> f64 {
        self.get(key).and_then(Value::as_f64).unwrap_or(0.0)
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get_byte(key) != 0
    }

    /// The string at `key`. Values of any other type, including numbers,
    /// give the empty string rather than a rendering of the value.
    pub fn get_string(&self, key: &str) -> &str {
        self.get(key).and_then(Value::as_str).unwrap_or("")
    }

    pub fn get_byte_array(&self, key: &str) -> &[i8] {
        self.get(key).and_then(Value::as_byte_array).unwrap_or(&[])
    }

    pub fn get_int_array(&self, key: &str) -> &[i32] {
        self.get(key).and_then(Value::as_int_array).unwrap_or(&[])
    }

    pub fn get_compound(&self, key: &str) -> &Compound {
        self.get(key)
            .and_then(Value::as_compound)
            .unwrap_or(&*EMPTY_COMPOUND)
    }

    /// The list at `key`, provided its elements are of `element_type`. An
    /// empty list is returned for anything else, except that an empty list
    /// stored at `key` is returned whatever its element type.
    pub fn get_list(&self, key: &str, element_type: Tag) -> &List {
        match self.get(key).and_then(Value::as_list) {
            Some(list) if list.is_empty() || list.element_type() == element_type => list,
            _ => &*EMPTY_LIST,
        }
    }

    pub fn get_compound_mut(&mut self, key: &str) -> Option<&mut Compound> {
        match self.map.get_mut(key) {
            Some(Value::Compound(c)) => Some(c),
            _ => None,
        }
    }

    pub fn get_list_mut(&mut self, key: &str) -> Option<&mut List> {
        match self.map.get_mut(key) {
            Some(Value::List(l)) => Some(l),
            _ => None,
        }
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (key, value) in self.iter() {
            write!(f, "{}:{},", key, value)?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Compound {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut c = Compound::new();
        c.extend(iter);
        c
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Compound {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl IntoIterator for Compound {
    type Item = (String, Value);
    type IntoIter = MapIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        u.arbitrary_iter::<(String, Value)>()?.collect()
    }
}
