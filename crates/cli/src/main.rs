mod logging;
mod render;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use decomment_core::{BatchReport, ProcessOptions, SourceRetention, clean_source, process_path};
use decomment_diagnostics as diag;

use crate::render::{
    Format, changed_files, display_path, plural, print_diagnostic_summary, print_file_lines,
    print_summary, render_batch_diagnostics, render_diagnostics, visible,
};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "decomment",
    version,
    about = "Strip comments from JavaScript and TypeScript sources without touching strings, templates or regexes"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    /// Also show informational diagnostics in pretty output.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Strip comments from a file, or from every source file under a
    /// directory, rewriting them in place.
    Strip {
        path: PathBuf,
        /// Report what would change without writing anything.
        #[arg(long, short)]
        dry_run: bool,
        /// Only print failures and the final summary.
        #[arg(long, short)]
        quiet: bool,
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Exit 1 if any file still contains comments. For CI.
    Check {
        path: PathBuf,
        /// Only print failures and the final summary.
        #[arg(long, short)]
        quiet: bool,
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Print the stripped text of one file (`-` for stdin) to stdout.
    Print {
        file: String,
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Explain a diagnostic ID (e.g. DCM1001).
    Explain { id: String },
}

/// Flags shared by every command that scans source.
#[derive(Args, Debug)]
struct ScanArgs {
    /// File extensions to process when walking a directory (repeatable or
    /// comma-separated). Replaces the default set.
    #[arg(long = "ext", value_name = "EXT", value_delimiter = ',')]
    extensions: Vec<String>,
    /// Leave blank lines and trailing whitespace as stripping left them.
    #[arg(long)]
    no_tidy: bool,
    /// Strip `{/* */}` like any block comment, keeping the braces.
    #[arg(long)]
    keep_jsx_braces: bool,
}

impl ScanArgs {
    fn options(&self, dry_run: bool) -> ProcessOptions {
        let mut options = ProcessOptions::default();
        if !self.extensions.is_empty() {
            options.set_extensions(&self.extensions);
        }
        options.dry_run = dry_run;
        options.tidy = !self.no_tidy;
        options.strip.jsx_comments = !self.keep_jsx_braces;
        options
    }
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Strip {
            path,
            dry_run,
            quiet,
            scan,
        } => {
            let mut options = scan.options(dry_run);
            options.keep_source = retention(format, quiet, cli.verbose);
            cmd_strip(&path, &options, quiet, cli.verbose, format)?;
        }
        Cmd::Check { path, quiet, scan } => {
            let mut options = scan.options(true);
            options.keep_source = retention(format, quiet, cli.verbose);
            cmd_check(&path, &options, quiet, cli.verbose, format)?;
        }
        Cmd::Print { file, scan } => cmd_print(&file, &scan.options(true), cli.verbose, format)?,
        Cmd::Explain { id } => cmd_explain(&id, format)?,
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn run_batch(path: &Path, options: &ProcessOptions) -> Result<BatchReport> {
    tracing::debug!(path = %path.display(), ?options, "starting run");
    process_path(path, options).with_context(|| format!("cannot process {}", path.display()))
}

fn cmd_strip(
    path: &Path,
    options: &ProcessOptions,
    quiet: bool,
    verbose: bool,
    format: Format,
) -> Result<()> {
    let report = run_batch(path, options)?;

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "files": report.files,
                "modified": report.modified(),
                "failed": report.failed(),
                "bytes_removed": report.bytes_removed(),
                "dry_run": options.dry_run,
                "stats": report.stats(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            if report.files.is_empty() {
                eprintln!("warning: no matching files under {}", path.display());
                return Ok(());
            }
            if !quiet {
                render_batch_diagnostics(&report, path, verbose);
            }
            print_file_lines(&report, path, quiet);
            print_summary(&report, options.dry_run);
        }
    }

    exit_on_failures(&report);
    Ok(())
}

fn cmd_check(
    path: &Path,
    options: &ProcessOptions,
    quiet: bool,
    verbose: bool,
    format: Format,
) -> Result<()> {
    let report = run_batch(path, options)?;
    let changed: Vec<&Path> = changed_files(&report).map(|f| f.path.as_path()).collect();
    let clean = changed.is_empty() && report.failed() == 0;

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "ok": clean,
                "checked": report.files.len(),
                "would_change": changed,
                "bytes_removed": report.bytes_removed(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            if !quiet {
                render_batch_diagnostics(&report, path, verbose);
                for file in &changed {
                    eprintln!("would change: {}", display_path(file, path));
                }
            }
            print_file_lines(&report, path, true);
            if clean {
                eprintln!(
                    "{} {} checked, already clean",
                    report.files.len(),
                    plural(report.files.len(), "file")
                );
            } else {
                eprintln!(
                    "{} {} would change",
                    changed.len(),
                    plural(changed.len(), "file")
                );
            }
        }
    }

    if !clean {
        process::exit(1);
    }
    Ok(())
}

fn cmd_print(file: &str, options: &ProcessOptions, verbose: bool, format: Format) -> Result<()> {
    let (name, source) = if file == "-" {
        let text = io::read_to_string(io::stdin()).context("failed to read stdin")?;
        ("<stdin>", text)
    } else {
        let text = fs::read_to_string(file).with_context(|| format!("failed to read {file}"))?;
        (file, text)
    };

    let cleaned = clean_source(&source, options);

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "file": name,
                "text": cleaned.text,
                "stats": cleaned.stats,
                "diagnostics": cleaned.diagnostics,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            // Stripped text to stdout, diagnostics to stderr.
            print!("{}", cleaned.text);
            let shown = visible(&cleaned.diagnostics, verbose);
            render_diagnostics(&source, name, &shown);
            print_diagnostic_summary(&shown);
        }
    }
    Ok(())
}

fn cmd_explain(id: &str, format: Format) -> Result<()> {
    match format {
        Format::Json => {
            let out = serde_json::json!({
                "id": id,
                "explanation": diag::explain(id),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            // The explanation is the command's output, so stdout.
            if let Some(text) = diag::explain(id) {
                use ariadne::Fmt;
                println!("{}: {}", id.fg(ariadne::Color::Cyan), text);
            } else {
                println!("{id}: (no explanation available)");
            }
        }
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Sources are only kept for diagnostics that pretty mode will render.
fn retention(format: Format, quiet: bool, verbose: bool) -> SourceRetention {
    match format {
        Format::Json => SourceRetention::Never,
        Format::Pretty if quiet => SourceRetention::Never,
        Format::Pretty if verbose => SourceRetention::All,
        Format::Pretty => SourceRetention::Warnings,
    }
}

/// Exit with code 1 if any file could not be read or written.
/// Scanner diagnostics never affect the exit code.
fn exit_on_failures(report: &BatchReport) {
    if report.failed() > 0 {
        process::exit(1);
    }
}
