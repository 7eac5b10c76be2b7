use std::fmt;

use crate::{Attributes, Content, Generator, Markup, Options};

/// A single element waiting to be rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub content: Content,
    pub attributes: Attributes,
    pub self_closing: bool,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element { tag: tag.into(), ..Default::default() }
    }

    pub fn content(mut self, content: impl Into<Content>) -> Self {
        self.content = content.into();
        self
    }

    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn attribute(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.attributes.insert(key, value);
        self
    }

    pub fn self_closing(mut self, self_closing: bool) -> Self {
        self.self_closing = self_closing;
        self
    }

    pub fn render(&self, options: &Options) -> Markup {
        Markup::new(render_parts(
            &self.tag,
            &self.content,
            &self.attributes,
            self.self_closing,
            options.escape,
        ))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render(&Options::default()).as_str())
    }
}

/// Renders `<tag attrs>content</tag>`, or `<tag attrs/>` when self-closing.
///
/// The tag name is not validated and the content is not escaped.
pub fn element(
    tag: &str,
    content: impl Into<Content>,
    attributes: &Attributes,
    self_closing: bool,
) -> Markup {
    Generator::default().element(tag, content, attributes, self_closing)
}

pub(crate) fn render_parts(
    tag: &str,
    content: &Content,
    attributes: &Attributes,
    self_closing: bool,
    escaped: bool,
) -> String {
    let attrs = attributes.serialize(escaped);

    if self_closing {
        format!("<{tag} {attrs}/>")
    } else {
        format!("<{tag} {attrs}>{content}</{tag}>", content = content.render(escaped))
    }
}
