use std::path::PathBuf;
use thiserror::Error;

use crate::MPath;

#[derive(Debug, Error)]
pub enum Error {
    #[error("attribute `{0}` is missing a `=` between name and value")]
    MalformedAttribute(String),

    #[error("failed to parse {path}: {message}")]
    Document { path: MPath, message: String },

    #[error("path {} is not valid UTF-8", .0.display())]
    NonUtf8Path(PathBuf),
}
