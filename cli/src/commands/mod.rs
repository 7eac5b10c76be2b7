pub mod build;
pub mod element;
pub mod render;

use anyhow::Context as _;
use clap::ArgMatches;
use htmlgen_core::{Attributes, MPath, MResult, fs::write_string};
use log::info;
use std::io::{Write, stdout};

/// Collects the repeated `--attr name=value` arguments in the order given.
pub fn attributes(matches: &ArgMatches) -> MResult<Attributes> {
    let mut attributes = Attributes::new();

    for pair in matches.get_many::<String>("attr").into_iter().flatten() {
        let (key, value) = Attributes::parse_pair(pair)?;
        attributes.insert(key, value);
    }

    Ok(attributes)
}

pub fn content(matches: &ArgMatches) -> String {
    matches.get_one::<String>("content").cloned().unwrap_or_default()
}

/// Writes markup to `--output` when given, to stdout otherwise.
pub fn emit(matches: &ArgMatches, markup: &str) -> MResult<()> {
    if let Some(path) = matches.get_one::<String>("output") {
        let path = MPath::from(path);
        write_string(&path, markup).with_context(|| format!("could not write {path}"))?;
        info!("wrote {path}");
        return Ok(());
    }

    let mut out = stdout().lock();
    writeln!(out, "{markup}")?;
    Ok(())
}
