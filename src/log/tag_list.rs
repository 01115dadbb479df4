use crate::log::tag::Tag;
use crate::log::tag_value::TagValue;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Deref, DerefMut};

/// This struct converts a tuple of tags to a vector of tags.
/// It supports tuples of length 0 through 6.
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TagList(pub Vec<Tag>);
impl TagList {
    #[must_use]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, name: &'static str, value: impl Into<TagValue>) {
        self.0.push(Tag::new(name, value));
    }

    #[must_use]
    pub fn with(mut self, name: &'static str, value: impl Into<TagValue>) -> Self {
        self.push(name, value);
        self
    }

    /// Returns the value of the first tag named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&TagValue> {
        self.0
            .iter()
            .find(|tag| tag.is_named(name))
            .map(|tag| &tag.value)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Tag> {
        self.0
    }
}
impl Deref for TagList {
    type Target = Vec<Tag>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for TagList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
impl Display for TagList {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        if let Some(tag) = self.0.first() {
            write!(f, "{tag}")?;
        }
        for tag in self.0.iter().skip(1) {
            write!(f, ",{tag}")?;
        }
        Ok(())
    }
}
impl Debug for TagList {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "TagList{{")?;
        if let Some(tag) = self.0.first() {
            write!(f, "{:?}:{:?}", tag.name, tag.value)?;
        }
        for tag in self.0.iter().skip(1) {
            write!(f, ",{:?}:{:?}", tag.name, tag.value)?;
        }
        write!(f, "}}")
    }
}

impl From<Vec<Tag>> for TagList {
    fn from(v: Vec<Tag>) -> Self {
        Self(v)
    }
}
impl From<Tag> for TagList {
    fn from(a: Tag) -> Self {
        TagList(vec![a])
    }
}
// From tuples of length 0 through 6.
impl From<()> for TagList {
    fn from((): ()) -> Self {
        TagList(vec![])
    }
}
impl<A: Into<Tag>> From<(A,)> for TagList {
    fn from((a,): (A,)) -> Self {
        TagList(vec![a.into()])
    }
}
impl<A: Into<Tag>, B: Into<Tag>> From<(A, B)> for TagList {
    fn from((a, b): (A, B)) -> Self {
        TagList(vec![a.into(), b.into()])
    }
}
impl<A: Into<Tag>, B: Into<Tag>, C: Into<Tag>> From<(A, B, C)> for TagList {
    fn from((a, b, c): (A, B, C)) -> Self {
        TagList(vec![a.into(), b.into(), c.into()])
    }
}
impl<A: Into<Tag>, B: Into<Tag>, C: Into<Tag>, D: Into<Tag>> From<(A, B, C, D)> for TagList {
    fn from((a, b, c, d): (A, B, C, D)) -> Self {
        TagList(vec![a.into(), b.into(), c.into(), d.into()])
    }
}
impl<A: Into<Tag>, B: Into<Tag>, C: Into<Tag>, D: Into<Tag>, E: Into<Tag>> From<(A, B, C, D, E)>
    for TagList
{
    fn from((a, b, c, d, e): (A, B, C, D, E)) -> Self {
        TagList(vec![a.into(), b.into(), c.into(), d.into(), e.into()])
    }
}
impl<A: Into<Tag>, B: Into<Tag>, C: Into<Tag>, D: Into<Tag>, E: Into<Tag>, F: Into<Tag>>
    From<(A, B, C, D, E, F)> for TagList
{
    fn from((a, b, c, d, e, f): (A, B, C, D, E, F)) -> Self {
        TagList(vec![
            a.into(),
            b.into(),
            c.into(),
            d.into(),
            e.into(),
            f.into(),
        ])
    }
}
