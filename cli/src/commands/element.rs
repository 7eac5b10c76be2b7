use clap::ArgMatches;
use htmlgen_core::{MResult, context::Context, parse_level};

use super::{attributes, content, emit};

pub fn element_command(ctx: &Context, matches: &ArgMatches) -> MResult<()> {
    let tag = matches.get_one::<String>("tag").map(String::as_str).unwrap_or_default();
    let markup = ctx.generator().element(
        tag,
        content(matches),
        &attributes(matches)?,
        matches.get_flag("self-closing"),
    );

    emit(matches, markup.as_str())
}

pub fn heading_command(ctx: &Context, matches: &ArgMatches) -> MResult<()> {
    let level = matches.get_one::<String>("level").map_or(1, |raw| parse_level(raw));
    let markup = ctx.generator().heading(level, content(matches), &attributes(matches)?);

    emit(matches, markup.as_str())
}

pub fn list_command(ctx: &Context, matches: &ArgMatches) -> MResult<()> {
    let items = matches.get_many::<String>("items").into_iter().flatten().cloned();
    let markup = ctx.generator().list(matches.get_flag("ordered"), items, &attributes(matches)?);

    emit(matches, markup.as_str())
}
