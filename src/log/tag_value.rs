use std::fmt::{Debug, Display, Formatter};

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum TagValue {
    Str(&'static str),
    String(String),
    Bool(bool),
    I64(i64),
    U64(u64),
    Null,
}
impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}
impl From<String> for TagValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
impl From<&String> for TagValue {
    fn from(value: &String) -> Self {
        Self::String(value.clone())
    }
}
impl From<bool> for TagValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl From<i32> for TagValue {
    fn from(value: i32) -> Self {
        Self::I64(i64::from(value))
    }
}
impl From<i64> for TagValue {
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}
impl From<u32> for TagValue {
    fn from(value: u32) -> Self {
        Self::U64(u64::from(value))
    }
}
impl From<u64> for TagValue {
    fn from(value: u64) -> Self {
        Self::U64(value)
    }
}
impl From<usize> for TagValue {
    fn from(value: usize) -> Self {
        Self::U64(value as u64)
    }
}
impl<T: Into<TagValue>> From<Option<T>> for TagValue {
    fn from(value: Option<T>) -> Self {
        match value {
            None => Self::Null,
            Some(t) => t.into(),
        }
    }
}
impl Display for TagValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            TagValue::Str(x) => write!(f, "{x:?}"),
            TagValue::String(x) => write!(f, "{x:?}"),
            TagValue::Bool(x) => Display::fmt(&x, f),
            TagValue::I64(x) => Display::fmt(&x, f),
            TagValue::U64(x) => Display::fmt(&x, f),
            TagValue::Null => write!(f, "null"),
        }
    }
}
