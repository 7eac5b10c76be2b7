use crate::MPath;
use ariadne::{Color, Label, Report, ReportKind, Source};
use std::ops::Range;

pub type MReport = Report<'static, (String, Range<usize>)>;

/// Builds a report pointing at the part of a document toml could not parse.
pub fn parse_error_report(file: &MPath, source: &str, error: &toml::de::Error) -> MReport {
    let id = file.to_string();
    let span = error.span().unwrap_or(0..0);
    let span = span.start.min(source.len())..span.end.min(source.len());

    Report::build(ReportKind::Error, (id.clone(), span.clone()))
        .with_message(format!("failed to parse {file}"))
        .with_label(
            Label::new((id, span)).with_message(error.message().to_string()).with_color(Color::Red),
        )
        .with_note("nodes are written as [[node]] tables with a `kind` key")
        .finish()
}

/// Prints the report to stderr, showing the offending lines of `source`.
pub fn print_report(report: &MReport, file: &MPath, source: &str) {
    if let Err(err) = report.eprint((file.to_string(), Source::from(source))) {
        log::error!("could not print diagnostic for {file}: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_renders_the_toml_message() {
        let source = "[[node]]\nkind = \n";
        let error = toml::from_str::<toml::Table>(source).unwrap_err();
        let report = parse_error_report(&MPath::from("page.toml"), source, &error);

        let mut out = Vec::new();
        report.write(("page.toml".to_string(), Source::from(source)), &mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        assert!(rendered.contains("failed to parse page.toml"));
        assert!(rendered.contains("[[node]] tables"));
    }
}
