use serde::Deserialize;
use std::{borrow::Cow, fmt};
use v_htmlescape::escape;

/// Content slot of an element.
///
/// `Text` is a single string and is the only variant subject to escaping.
/// `Fragment` holds already rendered markup that is concatenated as is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Content {
    Text(String),
    Fragment(Vec<String>),
}

impl Content {
    pub fn markup(markup: impl Into<String>) -> Self {
        Content::Fragment(vec![markup.into()])
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(text) => text.is_empty(),
            Content::Fragment(parts) => parts.iter().all(String::is_empty),
        }
    }

    pub(crate) fn render(&self, escaped: bool) -> Cow<'_, str> {
        match self {
            Content::Text(text) if escaped => Cow::Owned(escape(text).to_string()),
            Content::Text(text) => Cow::Borrowed(text),
            Content::Fragment(parts) => Cow::Owned(parts.concat()),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

impl From<&String> for Content {
    fn from(text: &String) -> Self {
        Content::Text(text.clone())
    }
}

impl From<Vec<String>> for Content {
    fn from(parts: Vec<String>) -> Self {
        Content::Fragment(parts)
    }
}

impl From<Vec<&str>> for Content {
    fn from(parts: Vec<&str>) -> Self {
        Content::Fragment(parts.into_iter().map(str::to_string).collect())
    }
}

impl FromIterator<String> for Content {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Content::Fragment(iter.into_iter().collect())
    }
}

/// Rendered element output.
///
/// Passing it back into a wrapper keeps it as markup, so an escaping
/// generator never escapes nested elements a second time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Markup(String);

impl Markup {
    pub(crate) const fn new(markup: String) -> Self {
        Markup(markup)
    }

    /// Wraps markup produced elsewhere. It is trusted and never escaped.
    pub fn trusted(markup: impl Into<String>) -> Self {
        Markup(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Markup {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Markup {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Markup {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for Markup {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}

impl From<Markup> for Content {
    fn from(markup: Markup) -> Self {
        Content::Fragment(vec![markup.0])
    }
}

impl From<Vec<Markup>> for Content {
    fn from(parts: Vec<Markup>) -> Self {
        parts.into_iter().collect()
    }
}

impl FromIterator<Markup> for Content {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        Content::Fragment(iter.into_iter().map(Markup::into_string).collect())
    }
}

/// Body row of a structured table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TableRow {
    Cells(Vec<String>),
    Cell(String),
}

impl TableRow {
    pub fn cells(&self) -> &[String] {
        match self {
            TableRow::Cells(cells) => cells,
            TableRow::Cell(cell) => std::slice::from_ref(cell),
        }
    }
}

impl From<Vec<String>> for TableRow {
    fn from(cells: Vec<String>) -> Self {
        TableRow::Cells(cells)
    }
}

impl From<Vec<&str>> for TableRow {
    fn from(cells: Vec<&str>) -> Self {
        TableRow::Cells(cells.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for TableRow {
    fn from(cells: [&str; N]) -> Self {
        TableRow::Cells(cells.into_iter().map(str::to_string).collect())
    }
}

impl From<&str> for TableRow {
    fn from(cell: &str) -> Self {
        TableRow::Cell(cell.to_string())
    }
}

impl From<String> for TableRow {
    fn from(cell: String) -> Self {
        TableRow::Cell(cell)
    }
}
