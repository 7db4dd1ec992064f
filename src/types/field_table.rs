use bytes::Bytes;
use rustc_hash::FxHashMap;
use std::fmt;

/// Header table carried in message properties.
///
/// Wraps an FxHashMap so the empty representation stays canonical:
/// an envelope either has no table at all (`None` in the property
/// block) or a table created through this type. FxHash matches the
/// non-cryptographic hashing used elsewhere in the hot path.
#[derive(Clone, Default, PartialEq)]
pub struct FieldTable(FxHashMap<String, FieldValue>);

impl FieldTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value under `key`, returning the previous value if any.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Get the value stored under `key`.
    #[inline]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Remove and return the value stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.0.remove(key)
    }

    /// Check whether `key` is present.
    #[inline]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the table has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl fmt::Debug for FieldTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Value types a header table can carry.
///
/// Covers the field-value kinds a client sees in practice; nested
/// tables and arrays allow structured headers (e.g. x-death entries).
#[derive(Clone, PartialEq)]
pub enum FieldValue {
    /// Boolean field
    Bool(bool),
    /// Signed 8-bit integer
    I8(i8),
    /// Signed 16-bit integer
    I16(i16),
    /// Signed 32-bit integer
    I32(i32),
    /// Signed 64-bit integer
    I64(i64),
    /// Single-precision float
    F32(f32),
    /// Double-precision float
    F64(f64),
    /// UTF-8 string
    String(String),
    /// Opaque byte sequence
    Bytes(Bytes),
    /// POSIX timestamp in seconds
    Timestamp(u64),
    /// Nested table
    Table(FieldTable),
    /// Ordered list of values
    Array(Vec<FieldValue>),
    /// No value
    Void,
}

impl FieldValue {
    /// Try to extract as string.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to extract as a signed 64-bit integer, widening smaller ints.
    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::I8(v) => Some(*v as i64),
            FieldValue::I16(v) => Some(*v as i64),
            FieldValue::I32(v) => Some(*v as i64),
            FieldValue::I64(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to extract as boolean.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to extract as bytes.
    #[inline]
    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            FieldValue::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Try to extract as a nested table.
    #[inline]
    pub fn as_table(&self) -> Option<&FieldTable> {
        match self {
            FieldValue::Table(t) => Some(t),
            _ => None,
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Bool(v) => write!(f, "Bool({})", v),
            FieldValue::I8(v) => write!(f, "I8({})", v),
            FieldValue::I16(v) => write!(f, "I16({})", v),
            FieldValue::I32(v) => write!(f, "I32({})", v),
            FieldValue::I64(v) => write!(f, "I64({})", v),
            FieldValue::F32(v) => write!(f, "F32({})", v),
            FieldValue::F64(v) => write!(f, "F64({})", v),
            FieldValue::String(s) => write!(f, "String({:?})", s),
            FieldValue::Bytes(b) => write!(f, "Bytes({} bytes)", b.len()),
            FieldValue::Timestamp(t) => write!(f, "Timestamp({})", t),
            FieldValue::Table(t) => write!(f, "Table({:?})", t),
            FieldValue::Array(a) => write!(f, "Array({:?})", a),
            FieldValue::Void => write!(f, "Void"),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<i8> for FieldValue {
    fn from(v: i8) -> Self {
        FieldValue::I8(v)
    }
}

impl From<i16> for FieldValue {
    fn from(v: i16) -> Self {
        FieldValue::I16(v)
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        FieldValue::I32(v)
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::I64(v)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        FieldValue::F32(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::F64(v)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<Bytes> for FieldValue {
    fn from(b: Bytes) -> Self {
        FieldValue::Bytes(b)
    }
}

impl From<FieldTable> for FieldValue {
    fn from(t: FieldTable) -> Self {
        FieldValue::Table(t)
    }
}

impl From<Vec<FieldValue>> for FieldValue {
    fn from(a: Vec<FieldValue>) -> Self {
        FieldValue::Array(a)
    }
}
