use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use proofer::{ParseError, ProofError};

/// Format a ProofError for the terminal. Parse errors get the offending
/// input line with the bad span underlined.
pub fn format_error(error: &ProofError, source_id: &str, input: &str, color: bool) -> String {
    match error {
        ProofError::Parse(details) => format_parse_error(details, source_id, input, color),
        other => other.to_string(),
    }
}

pub fn format_parse_error(error: &ParseError, source_id: &str, input: &str, color: bool) -> String {
    let mut output = Vec::new();

    // ariadne counts characters, spans count bytes
    let start = error.span.col.saturating_sub(1);
    let width = input
        .get(error.span.start..error.span.end)
        .map_or(0, |text| text.chars().count());
    let end = start + width.max(1);

    let report = Report::build(ReportKind::Error, source_id, start)
        .with_config(Config::default().with_color(color))
        .with_message(error.to_string())
        .with_label(
            Label::new((source_id, start..end))
                .with_message(error.kind.to_string())
                .with_color(Color::Red),
        );

    match report
        .finish()
        .write((source_id, Source::from(input)), &mut output)
    {
        Ok(_) => String::from_utf8_lossy(&output).to_string(),
        Err(_) => error.to_string(),
    }
}
