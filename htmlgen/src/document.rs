//! Pages described as TOML trees of nodes.
//!
//! ```toml
//! doctype = true
//!
//! [[node]]
//! kind = "element"
//! tag = "body"
//!   [[node.children]]
//!   kind = "heading"
//!   level = 1
//!   content = "Hello"
//! ```
//!
//! An element's children render after its content. A `self_closing` element
//! has no content slot, so both its content and its children are dropped.
//!
//! Rendering options are layered: the configured options, then the
//! document's `[options]`, then whatever the caller overrides last.

use serde::Deserialize;

use crate::{
    Attributes, Content, Generator, MPath, MResult, Markup, Options, Overrides, TableRow,
    error::Error, fs::read_string, parse_level,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    #[serde(default)]
    pub doctype: bool,
    #[serde(default)]
    pub options: Overrides,
    #[serde(default, rename = "node")]
    pub nodes: Vec<Node>,
}

/// Heading level as written in a document. Floats truncate toward zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Level {
    Number(i64),
    Float(f64),
    Text(String),
}

impl Level {
    pub fn value(&self) -> i64 {
        match self {
            Level::Number(n) => *n,
            // saturates at the i64 bounds, NaN becomes 0
            Level::Float(f) => f.trunc() as i64,
            Level::Text(raw) => parse_level(raw),
        }
    }
}

impl Default for Level {
    fn default() -> Self {
        Level::Number(1)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Element {
        tag: String,
        #[serde(default)]
        content: Content,
        #[serde(default)]
        attributes: Attributes,
        #[serde(default)]
        self_closing: bool,
        #[serde(default)]
        children: Vec<Node>,
    },
    Heading {
        #[serde(default)]
        level: Level,
        #[serde(default)]
        content: Content,
        #[serde(default)]
        attributes: Attributes,
    },
    Anchor {
        href: String,
        #[serde(default)]
        content: Content,
        #[serde(default)]
        attributes: Attributes,
    },
    List {
        #[serde(default)]
        ordered: bool,
        #[serde(default)]
        items: Vec<String>,
        #[serde(default)]
        attributes: Attributes,
    },
    Table {
        #[serde(default)]
        headers: Vec<String>,
        #[serde(default)]
        rows: Vec<TableRow>,
        #[serde(default)]
        attributes: Attributes,
    },
    Select {
        /// Option values mapped to their labels, in document order.
        #[serde(default)]
        options: Attributes,
        #[serde(default)]
        attributes: Attributes,
    },
    Input {
        #[serde(default)]
        attributes: Attributes,
    },
}

impl Node {
    pub fn render(&self, generator: &Generator) -> Markup {
        match self {
            Node::Element { tag, content, attributes, self_closing, children } => {
                if children.is_empty() || *self_closing {
                    return generator.element(tag, content.clone(), attributes, *self_closing);
                }

                let mut parts = vec![match content {
                    Content::Text(text) => generator.text(text).into_owned(),
                    Content::Fragment(parts) => parts.concat(),
                }];
                parts.extend(children.iter().map(|child| child.render(generator).into_string()));

                generator.element(tag, Content::Fragment(parts), attributes, false)
            }
            Node::Heading { level, content, attributes } => {
                generator.heading(level.value(), content.clone(), attributes)
            }
            Node::Anchor { href, content, attributes } => {
                generator.a(href, content.clone(), attributes)
            }
            Node::List { ordered, items, attributes } => {
                generator.list(*ordered, items.iter().cloned(), attributes)
            }
            Node::Table { headers, rows, attributes } => {
                generator.table(headers.iter().cloned(), rows.iter().cloned(), attributes)
            }
            Node::Select { options, attributes } => generator.select(options.iter(), attributes),
            Node::Input { attributes } => generator.input(attributes),
        }
    }
}

impl Document {
    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(source)
    }

    /// Reads and parses `path`, returning the source alongside for diagnostics.
    pub fn load(path: &MPath) -> MResult<(String, Result<Self, toml::de::Error>)> {
        let source = read_string(path)?;
        let document = Document::parse(&source);
        Ok((source, document))
    }

    /// Renders every top level node with `base` options overridden by this document's.
    pub fn render(&self, base: Options) -> String {
        self.render_with(base, Overrides::default())
    }

    /// Like [`Document::render`], with `overrides` taking precedence over the document.
    pub fn render_with(&self, base: Options, overrides: Overrides) -> String {
        let generator = Generator::new(overrides.apply(self.options.apply(base)));
        let mut out = String::new();

        if self.doctype {
            out.push_str("<!DOCTYPE html>");
        }

        for node in &self.nodes {
            out.push_str(node.render(&generator).as_str());
        }

        out
    }
}

pub(crate) fn document_error(path: &MPath, error: &toml::de::Error) -> Error {
    Error::Document { path: path.clone(), message: error.message().to_string() }
}
