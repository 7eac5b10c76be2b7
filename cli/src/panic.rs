use colored::Colorize;
use std::fmt::Write as _;
use std::path::{Component, Path};
use sysinfo::System;
use terminal_size::{Width, terminal_size};

/// Path fragments of frames that belong to the toolchain rather than to us.
const FOREIGN_FRAMES: &[&str] = &[
    "/rustc/", "\\rustc\\", "/std/", "\\std\\", "/core/", "\\core\\", "/alloc/", "\\alloc\\",
    "/backtrace", "\\backtrace", "/.cargo/registry/", "\\.cargo\\registry\\",
];

pub fn setup_panic_handler(no_backtrace: bool) {
    std::panic::set_hook(Box::new(move |info| {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown error".into());
        let location = info
            .location()
            .map_or_else(String::new, |loc| format!("{}:{}", loc.file(), loc.line()))
            .replace('\\', "/");

        let width = terminal_size().map_or(80, |(Width(w), _)| usize::from(w));
        let divider = "━".repeat(width).bright_red();
        let title = format!("{:^width$}", " htmlgen crashed ").bright_red().bold();

        let mut text = format!(
            "{divider}\n{title}\n{}\n\n{}\n\n{}\n",
            "Please file an issue with the output below.".dimmed(),
            system_info(&location),
            message.bright_red().bold(),
        );

        if !no_backtrace {
            text.push_str(&collapsed_backtrace());
        }
        text.push_str(&divider.to_string());

        eprintln!("{text}");
    }));
}

fn system_info(location: &str) -> String {
    let mut sys = System::new();
    sys.refresh_memory();

    let mut rows = vec![
        ("VERSION", env!("CARGO_PKG_VERSION").to_string()),
        (
            "SYSTEM",
            format!(
                "{} {} {}",
                System::name().unwrap_or_else(|| "unknown".into()),
                System::cpu_arch(),
                System::os_version().unwrap_or_else(|| "unknown".into())
            ),
        ),
    ];

    if sys.total_memory() > 0 {
        rows.push((
            "MEMORY",
            format!(
                "{}/{} MB free",
                sys.available_memory() / (1024 * 1024),
                sys.total_memory() / (1024 * 1024)
            ),
        ));
    }
    if let Ok(cwd) = std::env::current_dir() {
        rows.push(("WORKING DIR", cwd.display().to_string()));
    }
    rows.push(("LOCATION", location.to_string()));

    rows.into_iter()
        .map(|(key, value)| format!("{key}: {value}").dimmed().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Frames from our own code, with runs of toolchain frames folded into one line.
fn collapsed_backtrace() -> String {
    let mut out = String::new();
    let mut folded = 0usize;

    let backtrace = backtrace::Backtrace::new();
    for symbol in backtrace.frames().iter().flat_map(backtrace::BacktraceFrame::symbols) {
        let name = symbol.name().map_or_else(|| "<unknown>".to_string(), |n| n.to_string());
        let file = symbol.filename().map(|f| f.display().to_string()).unwrap_or_default();

        if file.is_empty() || FOREIGN_FRAMES.iter().any(|pattern| file.contains(pattern)) {
            folded += 1;
            continue;
        }

        if folded > 0 {
            write_folded(&mut out, folded);
            folded = 0;
        }

        let _ = writeln!(
            out,
            "  {} {} ({}:{})",
            "→".bright_green(),
            name.dimmed(),
            shorten_path(Path::new(&file)).cyan(),
            symbol.lineno().unwrap_or(0)
        );
    }

    if folded > 0 {
        write_folded(&mut out, folded);
    }

    out
}

fn write_folded(out: &mut String, folded: usize) {
    let note = format!("... {folded} frame(s) folded ...");
    let _ = writeln!(out, "  {}", note.bright_magenta().italic());
}

/// Keeps the path from the last `src` directory on, which is what identifies a frame.
fn shorten_path(path: &Path) -> String {
    let components: Vec<Component<'_>> = path.components().collect();
    let start = components
        .iter()
        .rposition(|c| c.as_os_str() == "src")
        .map_or(0, |i| i.saturating_sub(1));

    components[start..].iter().collect::<std::path::PathBuf>().display().to_string()
}
