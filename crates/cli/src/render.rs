//! Terminal output: ariadne-rendered scanner diagnostics and status lines.
//!
//! Pretty output goes to stderr so that stdout only ever carries program data
//! (`print` text or a JSON document).

use std::io::{self, IsTerminal};
use std::path::Path;

use ariadne::{Color, Config, Fmt, Label, Report, ReportKind, Source};
use decomment_core::{BatchReport, Diagnostic, FileReport, Outcome, Severity, SkipReason};

// ── Output format ───────────────────────────────────────────────────────

/// Output format for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    /// Coloured, human-oriented output on stderr.
    Pretty,
    /// A single JSON document on stdout.
    Json,
}

impl Format {
    /// Use the explicit choice, else pretty for a terminal and JSON for a pipe.
    pub(crate) fn resolve_or_detect(explicit: Option<&str>) -> Self {
        match explicit {
            Some("json") => Format::Json,
            Some("pretty") => Format::Pretty,
            _ => {
                if io::stdout().is_terminal() {
                    Format::Pretty
                } else {
                    Format::Json
                }
            }
        }
    }
}

// ── Severity mapping ────────────────────────────────────────────────────

fn report_kind(severity: Severity) -> ReportKind<'static> {
    match severity {
        Severity::Warn => ReportKind::Warning,
        Severity::Info => ReportKind::Advice,
    }
}

fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Warn => Color::Yellow,
        Severity::Info => Color::Blue,
    }
}

/// Which diagnostics are shown in pretty mode. `Info` ones (mostly regex
/// guesses on JSX closing tags) need `--verbose`.
pub(crate) fn visible(diagnostics: &[Diagnostic], verbose: bool) -> Vec<&Diagnostic> {
    diagnostics
        .iter()
        .filter(|d| verbose || d.severity != Severity::Info)
        .collect()
}

// ── Pretty rendering ────────────────────────────────────────────────────

/// Render diagnostics against their source to stderr.
pub(crate) fn render_diagnostics(source: &str, filename: &str, diagnostics: &[&Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    let config = Config::default().with_compact(false);
    let mut cache = (filename, Source::from(source));

    for diag in diagnostics {
        // Clamp so a stale span can never index past the text.
        let start = diag.span.start.min(source.len());
        let end = diag.span.end.min(source.len()).max(start);

        let mut builder = Report::build(report_kind(diag.severity), (filename, start..end))
            .with_code(diag.id)
            .with_message(&diag.message)
            .with_config(config)
            .with_label(
                Label::new((filename, start..end))
                    .with_message("treated as ending here")
                    .with_color(severity_color(diag.severity)),
            );
        if let Some(explanation) = diag.explain() {
            builder = builder.with_help(explanation);
        }
        builder.finish().eprint(&mut cache).ok();
    }
}

/// Render the diagnostics of every file that kept its source.
pub(crate) fn render_batch_diagnostics(report: &BatchReport, root: &Path, verbose: bool) {
    for file in &report.files {
        let Some(source) = &file.source else {
            continue;
        };
        let shown = visible(&file.diagnostics, verbose);
        let name = display_path(&file.path, root);
        render_diagnostics(source, &name, &shown);
    }
}

// ── Status lines ────────────────────────────────────────────────────────

/// Path relative to the walked root, or as given when the root is the file.
pub(crate) fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .ok()
        .filter(|rel| !rel.as_os_str().is_empty())
        .unwrap_or(path)
        .display()
        .to_string()
}

/// One status line per file: modified, skipped and failed files.
pub(crate) fn print_file_lines(report: &BatchReport, root: &Path, quiet: bool) {
    for file in &report.files {
        let name = display_path(&file.path, root);
        match &file.outcome {
            Outcome::Modified {
                bytes_removed,
                written,
            } if !quiet => {
                let verb = if *written { "stripped" } else { "would strip" };
                eprintln!("{}: {name} (-{bytes_removed} bytes)", verb.fg(Color::Green));
            }
            Outcome::Skipped {
                reason: SkipReason::NotUtf8,
            } if !quiet => {
                eprintln!("{}: {name} (not UTF-8)", "skipped".fg(Color::Yellow));
            }
            Outcome::Failed { error } => {
                eprintln!("{}: {}", "error".fg(Color::Red), error.describe());
            }
            _ => {}
        }
    }
}

/// Final line of a `strip` run, e.g. `3 files modified, 1204 bytes removed`.
pub(crate) fn print_summary(report: &BatchReport, dry_run: bool) {
    let modified = report.modified();
    let mut line = format!(
        "{modified} {} modified, {} bytes removed",
        plural(modified, "file"),
        report.bytes_removed()
    );
    if dry_run {
        line.push_str(" (dry run)");
    }
    let failed = report.failed();
    if failed > 0 {
        line.push_str(&format!(", {failed} failed"));
    }
    eprintln!("{line}");
}

/// Counts of diagnostics by severity, e.g. `2 warnings, 1 info`.
pub(crate) fn print_diagnostic_summary(diagnostics: &[&Diagnostic]) {
    let warnings = diagnostics
        .iter()
        .filter(|d| d.severity != Severity::Info)
        .count();
    let infos = diagnostics.len() - warnings;

    let mut parts = Vec::new();
    if warnings > 0 {
        parts.push(format!(
            "{}",
            format!("{warnings} {}", plural(warnings, "warning")).fg(Color::Yellow)
        ));
    }
    if infos > 0 {
        parts.push(format!("{}", format!("{infos} info").fg(Color::Blue)));
    }
    if !parts.is_empty() {
        eprintln!("{}", parts.join(", "));
    }
}

pub(crate) fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

/// Files that would change, for `check`.
pub(crate) fn changed_files(report: &BatchReport) -> impl Iterator<Item = &FileReport> {
    report.files.iter().filter(|f| f.is_modified())
}
