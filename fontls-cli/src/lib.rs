//! fontls CLI (made by FontLab https://www.fontlab.com/)

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use regex::Regex;

use fontls_core::enumerate::{list_families, FamilyQuery, ListOptions, DEFAULT_CHARSET};
use fontls_core::normalize::NormalizeOptions;
use fontls_core::output::{write_json_pretty, write_ndjson};

/// CLI entrypoint for fontls.
#[derive(Debug, Parser)]
#[command(
    name = "fontls",
    about = "Installed font family listing (made by FontLab https://www.fontlab.com/)"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List installed font family names via the host graphics subsystem
    List(ListArgs),
}

#[derive(Debug, Args)]
struct ListArgs {
    /// Keep one entry per style the host reports instead of Regular only
    #[arg(long = "all-styles", action = ArgAction::SetTrue)]
    all_styles: bool,

    /// Charset selector for the host query (default: any charset)
    #[arg(long = "charset", value_hint = ValueHint::Other)]
    charset: Option<u8>,

    /// Regex patterns; keep only families matching at least one
    #[arg(short = 'n', long = "name", value_hint = ValueHint::Other)]
    name_patterns: Vec<String>,

    /// Emit a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Control colorized output (auto|always|never)
    #[arg(long = "color", default_value_t = ColorChoice::Auto, value_enum)]
    color: ColorChoice,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

/// Parse CLI args and execute the selected command.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::List(args) => run_list(args),
    }
}

fn run_list(args: ListArgs) -> Result<()> {
    let opts = build_options(&args)?;
    let patterns = compile_patterns(&args.name_patterns)?;

    let families = list_families(&opts)?;
    let families = filter_names(families, &patterns);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let use_color = match args.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => handle.is_terminal(),
    };

    if args.ndjson {
        write_ndjson(&families, &mut handle)?;
    } else if args.json {
        write_json_pretty(&families, &mut handle)?;
    } else {
        write_plain(&families, &mut handle, use_color)?;
    }

    Ok(())
}

fn build_options(args: &ListArgs) -> Result<ListOptions> {
    let charset = match args.charset {
        Some(value) => value,
        None => default_charset()?,
    };

    Ok(ListOptions {
        query: FamilyQuery::new().with_charset(charset),
        normalize: NormalizeOptions {
            regular_only: !args.all_styles,
        },
    })
}

/// Charset selector from `FONTLS_CHARSET`, falling back to the broad default.
fn default_charset() -> Result<u8> {
    match env::var("FONTLS_CHARSET") {
        Ok(raw) => raw
            .trim()
            .parse::<u8>()
            .with_context(|| format!("invalid FONTLS_CHARSET: {raw}")),
        Err(_) => Ok(DEFAULT_CHARSET),
    }
}

fn compile_patterns(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).with_context(|| format!("invalid regex: {p}")))
        .collect()
}

fn filter_names(names: Vec<String>, patterns: &[Regex]) -> Vec<String> {
    if patterns.is_empty() {
        return names;
    }

    names
        .into_iter()
        .filter(|name| patterns.iter().any(|re| re.is_match(name)))
        .collect()
}

fn write_plain(names: &[String], mut w: impl Write, color: bool) -> Result<()> {
    for name in names {
        let rendered = apply_color(name, color);
        writeln!(w, "{rendered}")?;
    }
    Ok(())
}

fn apply_color(text: &str, color: bool) -> String {
    if !color {
        return text.to_string();
    }

    format!("\u{1b}[36m{text}\u{1b}[0m")
}
