// SPDX-License-Identifier: MIT
//
// rampkit: perceptual color ramps and design tokens from the command line.
//
// This binary wires the library crates to files and stdout:
//
//   rk-color  → hex parsing, OKLCH math, contrast
//   rk-ramp   → nine-step ramp per palette color
//   rk-tokens → primitives / semantic / component token bundle
//
// Data flow for `rampkit tokens`:
//
//   config (TOML or preset) → validate → generate_ramps → build_tokens
//       → css() | json() → stdout or --output file

mod config;

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write as _};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use rk_ramp::{RampBatch, StopSet, generate_ramp9, generate_ramps};
use rk_tokens::contrast::contrast_report;
use rk_tokens::{TokenBundle, build_tokens};

use config::Config;

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "rampkit", version, about = "Perceptual color ramps and design tokens", long_about = None)]
struct Cli {
    /// Increase log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the nine-step ramp for one color
    Ramp {
        /// Base color (`#rgb`, `#rrggbb`, `rgb()`, `hsl()` or `oklch()`)
        color: String,
        /// Sampling positions along the gradient
        #[arg(long, default_value_t = StopSet::Figma)]
        stops: StopSet,
        /// Print as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Build the token bundle for a palette
    Tokens {
        #[command(flatten)]
        source: Source,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Css)]
        format: Format,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Report WCAG contrast for text and accent pairs
    Check {
        #[command(flatten)]
        source: Source,
    },
    /// List builtin presets
    Presets,
}

#[derive(Args)]
struct Source {
    /// Palette config file (TOML)
    #[arg(short, long, conflicts_with = "preset")]
    config: Option<PathBuf>,
    /// Builtin preset name
    #[arg(short, long)]
    preset: Option<String>,
    /// Override the config's stop set
    #[arg(long)]
    stops: Option<StopSet>,
}

impl Source {
    fn load(&self) -> Result<Config> {
        let mut config = match (&self.config, &self.preset) {
            (Some(path), _) => Config::load(path)?,
            (None, Some(name)) => Config::preset(name)?,
            (None, None) => Config::preset("default")?,
        };
        if let Some(stops) = self.stops {
            config.stops = stops;
        }
        Ok(config)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Css,
    Json,
}

// ─── Commands ───────────────────────────────────────────────────────────────

fn ramp(color: &str, stops: StopSet, json: bool) -> Result<String> {
    let ramp = generate_ramp9(color, stops).with_context(|| format!("cannot build a ramp for {color:?}"))?;
    if json {
        return Ok(serde_json::to_string_pretty(&ramp)? + "\n");
    }
    let mut out = String::new();
    for (step, hex) in ramp.iter() {
        writeln!(out, "{step}  {hex}")?;
    }
    Ok(out)
}

/// Ramps for every palette color, then the bundle.
///
/// A color that fails to parse is reported and skipped; the build only
/// fails if a mapped role needed it.
fn bundle(config: &Config) -> Result<TokenBundle> {
    let RampBatch { ramps, failures } = generate_ramps(
        config.palette.iter().map(|c| (c.id.as_str(), c.hex.as_str())),
        config.stops,
    );
    for (id, err) in &failures {
        log::warn!("skipping palette color {id:?}: {err}");
    }
    Ok(build_tokens(&config.palette, &ramps, &config.mapping)?)
}

fn tokens(config: &Config, format: Format) -> Result<String> {
    let bundle = bundle(config)?;
    Ok(match format {
        Format::Css => bundle.css(),
        Format::Json => serde_json::to_string_pretty(&bundle.json())? + "\n",
    })
}

fn check(config: &Config) -> Result<String> {
    let report = contrast_report(&bundle(config)?);
    let mut out = String::new();
    let mut failing = 0;
    for c in &report {
        let verdict = if c.passes() { "ok" } else { "LOW" };
        writeln!(
            out,
            "{:<5}  {:<14} on {:<15} {:>6.2}:1  (min {:.1})  {verdict}",
            c.theme.name(),
            c.foreground.name(),
            c.background.name(),
            c.ratio,
            c.minimum,
        )?;
        if !c.passes() {
            log::warn!(
                "{} theme: {} on {} is {:.2}:1, below {:.1}:1",
                c.theme,
                c.foreground.name(),
                c.background.name(),
                c.ratio,
                c.minimum
            );
            failing += 1;
        }
    }
    if failing > 0 {
        print!("{out}");
        bail!("{failing} of {} pairs below the minimum contrast", report.len());
    }
    Ok(out)
}

fn presets() -> String {
    let mut out = String::new();
    for name in rk_tokens::builtin::builtin_names() {
        out.push_str(name);
        out.push('\n');
    }
    out
}

fn run(cli: Cli) -> Result<()> {
    let (text, output) = match cli.command {
        Command::Ramp { color, stops, json } => (ramp(&color, stops, json)?, None),
        Command::Tokens {
            source,
            format,
            output,
        } => (tokens(&source.load()?, format)?, output),
        Command::Check { source } => (check(&source.load()?)?, None),
        Command::Presets => (presets(), None),
    };

    match output {
        Some(path) => {
            fs::write(&path, text).with_context(|| format!("failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => io::stdout().write_all(text.as_bytes())?,
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("rampkit: {e:#}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
