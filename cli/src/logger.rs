use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use htmlgen_core::MResult;
use log::LevelFilter;

/// Logs go to stderr so stdout only ever carries markup.
pub fn init_logger(verbose: bool, color: bool) -> MResult<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    Ok(Dispatch::new()
        .format(move |out, message, record| {
            let level = record.level();
            let level = if color { colors.color(level).to_string() } else { level.to_string() };
            let level = level.to_ascii_lowercase();

            out.finish(format_args!("{level} {message}"))
        })
        .level(if verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .chain(std::io::stderr())
        .apply()?)
}
