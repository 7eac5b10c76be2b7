use clap::ArgMatches;
use glob::glob;
use htmlgen_core::{
    MPath, MResult,
    context::Context,
    fs::{clear_dir, to_mpath},
};
use log::{info, warn};
use rayon::prelude::*;

pub fn build_command(ctx: &Context, _matches: &ArgMatches) -> MResult<()> {
    if ctx.build_dir().exists() {
        clear_dir(ctx.build_dir())?;
    }

    let pattern = format!("{}/**/*.toml", ctx.main_dir());

    let files: Vec<MPath> = glob(&pattern)?
        .filter_map(Result::ok)
        .filter_map(|path_buf| to_mpath(path_buf).ok())
        .collect();

    if files.is_empty() {
        warn!("no page documents found in {}", ctx.main_dir());
        return Ok(());
    }

    files.par_iter().try_for_each(|file| ctx.build_file(file).map(|_| ()))?;

    info!("built {} page(s) into {}", files.len(), ctx.build_dir());
    Ok(())
}
