use anstyle::{AnsiColor, Effects, Style};
use clap::{Arg, ArgAction, ArgMatches, Command, builder::Styles, value_parser};
use htmlgen_core::{HeadingLevels, Overrides};

pub const HEADER: Style = AnsiColor::Magenta.on_default().effects(Effects::BOLD);
pub const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
pub const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
pub const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
pub const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
pub const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
pub const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

pub const RENDER_HEADING: &str = "Rendering options";

pub fn opt(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).action(ArgAction::Set)
}

pub fn flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name).long(name).help(help).action(ArgAction::SetTrue)
}

pub fn positional(name: &'static str, help: &'static str, index: usize) -> Arg {
    Arg::new(name).help(help).index(index)
}

fn attr() -> Arg {
    opt("attr", "Attribute as name=value, repeatable. Order is kept")
        .short('a')
        .action(ArgAction::Append)
}

pub fn cli() -> Command {
    let styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };

    Command::new("htmlgen")
        .about("Build single HTML elements and whole pages from the command line")
        .styles(styles)
        .subcommand(
            Command::new("element")
                .about("Print one element")
                .arg(positional("tag", "Tag name, used verbatim", 1).required(true))
                .arg(positional("content", "Element content", 2))
                .arg(attr())
                .arg(flag("self-closing", "Render as <tag ... />, dropping the content")),
        )
        .subcommand(
            Command::new("heading")
                .about("Print a heading")
                .arg(
                    positional("level", "Heading level, read leniently as an integer", 1)
                        .required(true),
                )
                .arg(positional("content", "Heading content", 2))
                .arg(attr()),
        )
        .subcommand(
            Command::new("list")
                .about("Print a list with one <li> per item")
                .arg(Arg::new("items").help("List items").num_args(0..).index(1))
                .arg(flag("ordered", "Use <ol> instead of <ul>"))
                .arg(attr()),
        )
        .subcommand(
            Command::new("render")
                .about("Print a rendered page document")
                .arg(positional("file", "Page document (.toml)", 1).required(true)),
        )
        .subcommand(Command::new("build").about("Render every page document of the project"))
        .arg(flag("verbose", "Use verbose output").short('v').global(true))
        .arg(flag("no-color", "Disable colored output").global(true))
        .arg(flag("time", "Prints the time taken to run the command").short('t').global(true))
        .arg(flag("no-backtrace", "Do not print a backtrace on panic").global(true))
        .arg(
            flag("escape", "Escape text content and attribute values")
                .global(true)
                .help_heading(RENDER_HEADING),
        )
        .arg(
            flag("no-escape", "Write text and attribute values as given")
                .conflicts_with("escape")
                .global(true)
                .help_heading(RENDER_HEADING),
        )
        .arg(
            opt("headings", "What to do with heading levels outside of 1-6")
                .value_parser(["clamp", "verbatim"])
                .global(true)
                .help_heading(RENDER_HEADING),
        )
        .arg(
            opt("output", "Write the markup to a file instead of stdout")
                .short('o')
                .value_parser(value_parser!(String))
                .global(true),
        )
}

/// Rendering flags given on the command line. Unset flags leave the lower layers alone.
pub fn overrides(args: &ArgMatches) -> Overrides {
    let escape = if args.get_flag("escape") {
        Some(true)
    } else if args.get_flag("no-escape") {
        Some(false)
    } else {
        None
    };
    let headings = match args.get_one::<String>("headings").map(String::as_str) {
        Some("verbatim") => Some(HeadingLevels::Verbatim),
        Some("clamp") => Some(HeadingLevels::Clamp),
        _ => None,
    };

    Overrides { escape, headings }
}
