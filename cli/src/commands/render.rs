use clap::ArgMatches;
use htmlgen_core::{MPath, MResult, context::Context};

use super::emit;

pub fn render_command(ctx: &Context, matches: &ArgMatches) -> MResult<()> {
    let Some(file) = matches.get_one::<String>("file") else {
        anyhow::bail!("no page document given");
    };

    let file = ctx.cwd().join(MPath::from(file));
    let markup = ctx.process_file(&file)?;

    emit(matches, &markup)
}
