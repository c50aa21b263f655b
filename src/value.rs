use std::fmt;

/// Payload carried by a node, either as its display value or as its metadata.
///
/// A closed set of representable kinds behind a single type.
/// Every kind has a canonical textual form used by the renderer, so turning
/// a payload into text never fails.
/// Equality is deep structural equality: two composites compare equal when
/// their contents do, regardless of identity.
///
/// Most of the crate API takes `impl Into<Value>`, so plain Rust values can
/// be passed directly:
///
/// ```
/// # use text_tree::Tree;
/// let tree = Tree::new();
/// tree.add_leaf("a str").add_leaf(42).add_leaf(true);
/// assert!(tree.find_by_value(42).is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Ordered sequence of values.
    List(Vec<Value>),
    /// Key/value pairs in insertion order.
    Map(Vec<(String, Value)>),
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(boolean) => write!(formatter, "{boolean}"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number}"),
            Self::Text(text) => formatter.write_str(text),
            Self::List(list) => {
                formatter.write_str("[")?;
                for (index, value) in list.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                formatter.write_str("]")
            }
            Self::Map(entries) => {
                formatter.write_str("{")?;
                for (index, (key, value)) in entries.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{key}: {value}")?;
                }
                formatter.write_str("}")
            }
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Self::Bool(boolean)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<f32> for Value {
    fn from(number: f32) -> Self {
        Self::Float(number.into())
    }
}

impl From<Vec<Self>> for Value {
    fn from(list: Vec<Self>) -> Self {
        Self::List(list)
    }
}

impl From<Vec<(String, Self)>> for Value {
    fn from(entries: Vec<(String, Self)>) -> Self {
        Self::Map(entries)
    }
}

macro_rules! from_integer {
    ($($int:ty),+) => {
        $(
            impl From<$int> for Value {
                fn from(number: $int) -> Self {
                    Self::Int(number.into())
                }
            }
        )+
    };
}
from_integer!(i8, i16, i32, i64, u8, u16, u32);
