use camino::Utf8PathBuf;

pub mod attributes;
pub mod config;
pub mod content;
pub mod context;
pub mod document;
pub mod element;
pub mod error;
pub mod fs;
pub mod generator;
pub mod reports;
pub mod tags;

pub use attributes::{Attributes, attributes};
pub use content::{Content, Markup, TableRow};
pub use element::{Element, element};
pub use generator::{Generator, HeadingLevels, Options, Overrides, parse_level};

pub type MResult<T> = anyhow::Result<T>;

pub type MPath = Utf8PathBuf;
