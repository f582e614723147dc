// Chunk: docs/chunks/replay_driver - Scripted host event replay
//!
//! textarea-limiter: replays a scripted editing session against a limited
//! field and prints the field state after every step as one JSON line.
//!
//! # Usage
//!
//! ```bash
//! # Script from a file, limits from the script (or defaults)
//! textarea-limiter session.json
//!
//! # Script from stdin, limits from a config file with a flag override
//! textarea-limiter --config limits.json --max-line-length 20 < session.json
//!
//! # Engine logs on stderr
//! RUST_LOG=textarea_limiter_buffer=debug textarea-limiter session.json
//! ```

use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use textarea_limiter::buffer::LimiterConfig;
use textarea_limiter::script::{replay, Script};
use textarea_limiter::LimitedField;
use tracing_subscriber::EnvFilter;

/// Replay host events against a width-limited text field.
#[derive(Parser, Debug)]
#[command(name = "textarea-limiter", version, about)]
struct Args {
    /// Script file; reads stdin when omitted or "-"
    script: Option<PathBuf>,

    /// JSON limits file; takes precedence over the script's own config
    #[arg(short, long, env = "TEXTAREA_LIMITER_CONFIG")]
    config: Option<PathBuf>,

    /// Maximum total width
    #[arg(long)]
    max_total_length: Option<usize>,

    /// Maximum width of one visual line
    #[arg(long)]
    max_line_length: Option<usize>,

    /// Maximum number of visual lines
    #[arg(long, conflicts_with = "unlimited_lines")]
    max_lines: Option<usize>,

    /// Remove the line count limit
    #[arg(long)]
    unlimited_lines: bool,

    /// Drop overflowing input instead of reporting it
    #[arg(long)]
    auto_truncate: bool,

    /// Keep overflowing input and report validity
    #[arg(long, conflicts_with = "auto_truncate")]
    signal: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut LimiterConfig) {
        if let Some(total) = self.max_total_length {
            config.max_total_length = total;
        }
        if let Some(line) = self.max_line_length {
            config.max_line_length = line;
        }
        if let Some(lines) = self.max_lines {
            config.max_lines = Some(lines);
        }
        if self.unlimited_lines {
            config.max_lines = None;
        }
        if self.auto_truncate {
            config.auto_truncate = true;
        }
        if self.signal {
            config.auto_truncate = false;
        }
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn read_script(path: Option<&Path>) -> anyhow::Result<Script> {
    let text = match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display()))?,
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading script from stdin")?;
            text
        }
    };
    serde_json::from_str(&text).context("parsing script")
}

fn read_config(path: &Path) -> anyhow::Result<LimiterConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let script = read_script(args.script.as_deref())?;
    let mut config = match &args.config {
        Some(path) => read_config(path)?,
        None => script.config.unwrap_or_default(),
    };
    args.apply_overrides(&mut config);
    tracing::debug!(?config, steps = script.steps.len(), "starting replay");

    let mut field =
        LimitedField::with_value(config, &script.initial).context("invalid field limits")?;
    let reports = replay(&mut field, script.steps);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for report in &reports {
        serde_json::to_writer(&mut out, report)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
