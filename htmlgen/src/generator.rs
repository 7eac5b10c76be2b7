use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use v_htmlescape::escape;

use crate::{Attributes, Content, Element, Markup, TableRow, element::render_parts};

/// What `heading` does with a level outside of 1..=6.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevels {
    /// Out of range levels render as `h1`.
    #[default]
    Clamp,
    /// The raw level becomes the tag name: `heading(7, ..)` renders `<7 >`.
    Verbatim,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Escape attribute values and `Content::Text`. Off keeps output byte compatible.
    pub escape: bool,
    pub headings: HeadingLevels,
}

impl Options {
    pub const fn new() -> Self {
        Options { escape: false, headings: HeadingLevels::Clamp }
    }

    pub const fn escaped(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    pub const fn headings(mut self, headings: HeadingLevels) -> Self {
        self.headings = headings;
        self
    }
}

/// A partial set of [`Options`]. Unset fields leave the layer below untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Overrides {
    pub escape: Option<bool>,
    pub headings: Option<HeadingLevels>,
}

impl Overrides {
    pub fn apply(&self, base: Options) -> Options {
        Options {
            escape: self.escape.unwrap_or(base.escape),
            headings: self.headings.unwrap_or(base.headings),
        }
    }
}

/// Element builder bound to a set of [`Options`].
///
/// The free functions in [`crate::tags`] use `Generator::default()`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generator {
    options: Options,
}

impl Generator {
    pub const fn new(options: Options) -> Self {
        Generator { options }
    }

    pub const fn options(&self) -> &Options {
        &self.options
    }

    pub fn element(
        &self,
        tag: &str,
        content: impl Into<Content>,
        attributes: &Attributes,
        self_closing: bool,
    ) -> Markup {
        let content = content.into();
        Markup::new(render_parts(tag, &content, attributes, self_closing, self.options.escape))
    }

    pub fn render(&self, element: &Element) -> Markup {
        element.render(&self.options)
    }

    /// Text as it would appear inside an element's content slot.
    pub fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.escape {
            Cow::Owned(escape(text).to_string())
        } else {
            Cow::Borrowed(text)
        }
    }

    fn leaf(&self, tag: &str, content: impl Into<Content>) -> Markup {
        self.element(tag, content, &Attributes::new(), false)
    }

    fn wrap(&self, tag: &str, parts: Vec<Markup>, attributes: &Attributes) -> Markup {
        self.element(tag, parts, attributes, false)
    }

    pub fn a(
        &self,
        href: impl ToString,
        content: impl Into<Content>,
        attributes: &Attributes,
    ) -> Markup {
        let mut attributes = attributes.clone();
        attributes.insert("href", href);

        self.element("a", content, &attributes, false)
    }

    pub fn heading(
        &self,
        level: i64,
        content: impl Into<Content>,
        attributes: &Attributes,
    ) -> Markup {
        let tag = match self.options.headings {
            HeadingLevels::Clamp if (1..=6).contains(&level) => format!("h{level}"),
            HeadingLevels::Clamp => "h1".to_string(),
            HeadingLevels::Verbatim => level.to_string(),
        };

        self.element(&tag, content, attributes, false)
    }

    /// `<ol>` when `ordered`, `<ul>` otherwise, with one `<li >` per item.
    pub fn list<I>(&self, ordered: bool, items: I, attributes: &Attributes) -> Markup
    where
        I: IntoIterator,
        I::Item: Into<Content>,
    {
        let tag = if ordered { "ol" } else { "ul" };
        let items = items.into_iter().map(|item| self.leaf("li", item)).collect();

        self.wrap(tag, items, attributes)
    }

    /// Header row of `<th >` cells when `headers` is not empty, then one `<tr >` per row.
    pub fn table<H, R>(&self, headers: H, rows: R, attributes: &Attributes) -> Markup
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<TableRow>,
    {
        let mut content = Vec::new();

        let headings: Vec<Markup> = headers
            .into_iter()
            .map(|header| self.leaf("th", Content::Text(header.into())))
            .collect();
        if !headings.is_empty() {
            content.push(self.wrap("tr", headings, &Attributes::new()));
        }

        for row in rows {
            let cells = match row.into() {
                TableRow::Cells(cells) => {
                    cells.into_iter().map(|cell| self.leaf("td", cell)).collect()
                }
                TableRow::Cell(cell) => vec![self.leaf("td", cell)],
            };
            content.push(self.wrap("tr", cells, &Attributes::new()));
        }

        self.wrap("table", content, attributes)
    }

    /// `<table>` around rows that were rendered beforehand.
    pub fn table_markup(&self, rows: impl Into<Content>, attributes: &Attributes) -> Markup {
        self.element("table", rows, attributes, false)
    }

    pub fn input(&self, attributes: &Attributes) -> Markup {
        self.element("input", "", attributes, true)
    }

    /// `<select>` with an `<option value="key" >label</option>` per pair, in order.
    pub fn select<I, K, V>(&self, options: I, attributes: &Attributes) -> Markup
    where
        I: IntoIterator<Item = (K, V)>,
        K: ToString,
        V: Into<String>,
    {
        let options = options
            .into_iter()
            .map(|(value, label)| {
                self.option(value, Content::Text(label.into()), &Attributes::new())
            })
            .collect();

        self.wrap("select", options, attributes)
    }

    /// `<select>` around options that were rendered beforehand.
    pub fn select_markup(&self, options: impl Into<Content>, attributes: &Attributes) -> Markup {
        self.element("select", options, attributes, false)
    }

    pub fn option(
        &self,
        value: impl ToString,
        content: impl Into<Content>,
        attributes: &Attributes,
    ) -> Markup {
        let mut attributes = attributes.clone();
        attributes.insert("value", value);

        self.element("option", content, &attributes, false)
    }
}

/// Reads a heading level from text the way a lenient integer cast does.
///
/// Leading whitespace is skipped, then an optional sign and the leading
/// digits are taken. Anything without digits is `0`. Overflow saturates.
pub fn parse_level(raw: &str) -> i64 {
    let raw = raw.trim_start();
    let (negative, digits) = match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(i64::from(d - b'0')));

    if negative { magnitude.saturating_neg() } else { magnitude }
}
