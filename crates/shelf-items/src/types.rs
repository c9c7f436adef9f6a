use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;

/// Name of an item type, e.g. `potion` or `enchanted_book`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(name: impl Into<String>) -> Self {
        ItemId(name.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

impl From<String> for ItemId {
    fn from(s: String) -> Self {
        ItemId(s)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Structured data attached to a stack. No floats, so Eq/Hash are deep value comparisons.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub enum DataValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<DataValue>),
    Compound(BTreeMap<String, DataValue>),
}

impl From<bool> for DataValue {
    fn from(v: bool) -> Self {
        DataValue::Bool(v)
    }
}

impl From<i64> for DataValue {
    fn from(v: i64) -> Self {
        DataValue::Int(v)
    }
}

impl From<i32> for DataValue {
    fn from(v: i32) -> Self {
        DataValue::Int(v as i64)
    }
}

impl From<u32> for DataValue {
    fn from(v: u32) -> Self {
        DataValue::Int(v as i64)
    }
}

impl From<&str> for DataValue {
    fn from(v: &str) -> Self {
        DataValue::Str(v.to_string())
    }
}

impl From<String> for DataValue {
    fn from(v: String) -> Self {
        DataValue::Str(v)
    }
}

impl From<Vec<DataValue>> for DataValue {
    fn from(v: Vec<DataValue>) -> Self {
        DataValue::List(v)
    }
}

impl From<BTreeMap<String, DataValue>> for DataValue {
    fn from(v: BTreeMap<String, DataValue>) -> Self {
        DataValue::Compound(v)
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Bool(b) => write!(f, "{}", b),
            DataValue::Int(i) => write!(f, "{}", i),
            DataValue::Str(s) => write!(f, "{:?}", s),
            DataValue::List(items) => {
                f.write_str("[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                f.write_str("]")
            }
            DataValue::Compound(map) => write_compound(f, map),
        }
    }
}

fn write_compound(f: &mut fmt::Formatter<'_>, map: &BTreeMap<String, DataValue>) -> fmt::Result {
    f.write_str("{")?;
    for (i, (k, v)) in map.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}={}", k, v)?;
    }
    f.write_str("}")
}

/// Component map attached to a stack; keys are sorted so two maps built in a
/// different order still compare and hash equal.
pub type StackData = BTreeMap<String, DataValue>;

/// One concrete item instance as shown in the catalog.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ItemStack {
    pub item: ItemId,
    pub count: u32,
    pub data: StackData,
}

impl ItemStack {
    pub fn new(item: impl Into<ItemId>) -> Self {
        ItemStack {
            item: item.into(),
            count: 1,
            data: StackData::new(),
        }
    }

    /// Stack of `item` with a single data component attached.
    pub fn with_data(item: impl Into<ItemId>, key: &str, value: impl Into<DataValue>) -> Self {
        ItemStack::new(item).with(key, value)
    }

    pub fn with(mut self, key: &str, value: impl Into<DataValue>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&DataValue> {
        self.data.get(key)
    }

    pub fn is(&self, item: &str) -> bool {
        self.item.as_str() == item
    }
}

impl fmt::Display for ItemStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.item)?;
        if !self.data.is_empty() {
            write_compound(f, &self.data)?;
        }
        Ok(())
    }
}
