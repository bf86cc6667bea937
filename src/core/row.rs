//! Row trait: one selectable list entry.

use std::borrow::Cow;

/// A list entry with a title and the lines shown in the detail pane.
pub trait Row {
    /// Title shown in the list. Only the first line is displayed.
    fn title(&self) -> Cow<'_, str>;

    /// Lines shown in the detail pane while this row is selected.
    fn contents(&self) -> Cow<'_, [String]>;
}

/// Plain owned row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextRow {
    pub title: String,
    pub contents: Vec<String>,
}

impl TextRow {
    pub fn new<I, S>(title: impl Into<String>, contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            title: title.into(),
            contents: contents.into_iter().map(Into::into).collect(),
        }
    }
}

impl Row for TextRow {
    fn title(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.title)
    }

    fn contents(&self) -> Cow<'_, [String]> {
        Cow::Borrowed(&self.contents)
    }
}

impl<T: Row + ?Sized> Row for &T {
    fn title(&self) -> Cow<'_, str> {
        (**self).title()
    }

    fn contents(&self) -> Cow<'_, [String]> {
        (**self).contents()
    }
}

impl<T: Row + ?Sized> Row for Box<T> {
    fn title(&self) -> Cow<'_, str> {
        (**self).title()
    }

    fn contents(&self) -> Cow<'_, [String]> {
        (**self).contents()
    }
}
