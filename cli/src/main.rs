use crate::clap::{cli, overrides};
use crate::commands::{
    build::build_command,
    element::{element_command, heading_command, list_command},
    render::render_command,
};
use crate::logger::init_logger;
use crate::panic::setup_panic_handler;
use ::clap::ArgMatches;
use anyhow::bail;
use htmlgen_core::MResult;
use htmlgen_core::context::Context;
use log::info;
use std::env;
use std::process::exit;
use std::time::Instant;

mod clap;
mod commands;
mod logger;
mod panic;

type Command = fn(&Context, &ArgMatches) -> MResult<()>;

fn main() -> MResult<()> {
    let args = cli().try_get_matches().unwrap_or_else(|err| {
        err.print().expect("Error printing error");
        exit(1);
    });

    let color = !args.get_flag("no-color");
    colored::control::set_override(color);
    init_logger(args.get_flag("verbose"), color)?;
    setup_panic_handler(args.get_flag("no-backtrace"));

    let (cmd, matches) = match args.subcommand() {
        Some((cmd, matches)) => (cmd, matches),
        None => {
            cli().print_help()?;

            return Ok(());
        }
    };

    let context = Context::new(env::current_dir()?)?.with_overrides(overrides(&args));

    let started = Instant::now();
    execute(&context, cmd, matches)?;

    if args.get_flag("time") {
        info!("finished {cmd} in {:.2?}", started.elapsed());
    }

    Ok(())
}

pub fn execute(ctx: &Context, name: &str, matches: &ArgMatches) -> MResult<()> {
    let cmd: Command = match name {
        "element" => element_command,
        "heading" => heading_command,
        "list" => list_command,
        "render" => render_command,
        "build" => build_command,
        _ => bail!("Unknown command: {name}"),
    };

    cmd(ctx, matches)
}
