mod render;

use std::fs;
use std::io::Read;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rwl_toolchain_core::validate_source;
use rwl_toolchain_diagnostics::{self as diag, Diagnostic, Severity};

use crate::render::{Format, print_summary, render_diagnostics};

// ── CLI definition ──────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "rwl",
    version,
    about = "RWL toolchain — lint RWL rewrite-rule files and explain diagnostics"
)]
struct Cli {
    /// Output mode: "pretty" for coloured terminal output, "json" for
    /// machine-readable JSON. Defaults to "pretty" when stdout is a TTY,
    /// "json" otherwise.
    #[arg(long, global = true, value_parser = ["pretty", "json"])]
    output: Option<String>,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Lint an RWL file (`-` reads from stdin).
    #[command(visible_alias = "check")]
    Lint { file: String },

    /// Explain a diagnostic ID (e.g. RWL1102).
    Explain { id: String },
}

// ── Main ────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = Format::resolve_or_detect(cli.output.as_deref());

    match cli.cmd {
        Cmd::Lint { file } => cmd_lint(&file, format)?,
        Cmd::Explain { id } => cmd_explain(&id, format),
    }

    Ok(())
}

// ── Commands ────────────────────────────────────────────────────────────

fn cmd_lint(file: &str, format: Format) -> Result<()> {
    let input = read_input(file)?;
    let result = validate_source(&input);

    match format {
        Format::Json => {
            let out = serde_json::json!({
                "ok": result.ok,
                "diagnostics": result.issues,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Format::Pretty => {
            render_diagnostics(&input, file, &result.issues, format);
            print_summary(&result.issues);
            if result.ok {
                eprintln!("syntax ok");
            }
        }
    }

    exit_on_errors(&result.issues);
    Ok(())
}

fn cmd_explain(id: &str, format: Format) {
    let id = id.to_uppercase();
    let Some(explanation) = diag::explain(&id) else {
        eprintln!("unknown diagnostic id: {id}");
        process::exit(2);
    };

    match format {
        Format::Json => {
            let out = serde_json::json!({ "id": id, "explanation": explanation });
            println!("{out}");
        }
        Format::Pretty => {
            println!("{id}");
            println!("  {explanation}");
        }
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        Ok(buf)
    } else {
        fs::read_to_string(file).with_context(|| format!("failed to read {file}"))
    }
}

/// Exit with status 1 when any diagnostic is an error.
fn exit_on_errors(diagnostics: &[Diagnostic]) {
    if diagnostics
        .iter()
        .any(|d| matches!(d.severity, Severity::Error))
    {
        process::exit(1);
    }
}
