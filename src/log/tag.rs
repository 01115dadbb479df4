use crate::log::tag_value::TagValue;
use std::fmt::{Debug, Display, Formatter};

/// Makes a tag for a log event, like `tag("cookie", name)`.
pub fn tag(name: &'static str, value: impl Into<TagValue>) -> Tag {
    Tag::new(name, value)
}

/// A named value attached to a log event.
#[derive(Clone, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Tag {
    pub name: &'static str,
    pub value: TagValue,
}
impl Tag {
    pub fn new(name: &'static str, value: impl Into<TagValue>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}
impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{:?}:{}", self.name, self.value)
    }
}
impl Debug for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "Tag({}={:?})", self.name, self.value)
    }
}
