//! chatcast CLI — dispatch sample messages through notional chat platforms.
//!
//! Run `chatcast` with no arguments to print the demonstration transcripts.

mod demo;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};
use colored::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chatcast_core::config::ChatcastConfig;
use chatcast_core::timestamp::{self, parse_timestamp};
use chatcast_core::{Channel, Dispatcher, Message, Platform};

// ─── CLI Definition ────────────────────────────────────────

/// chatcast — send messages through WhatsApp, Telegram, Facebook and Instagram (on paper)
#[derive(Parser)]
#[command(name = "chatcast", version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demonstration scenario (default)
    Demo {
        /// Send time for every message, e.g. "2024-01-05 09:03"
        #[arg(long)]
        at: Option<String>,
    },

    /// Send a single message built from arguments
    Send {
        /// Platform to send through
        #[arg(long, value_enum)]
        via: PlatformArg,

        /// Phone number or handle
        #[arg(long)]
        to: String,

        /// Show a Telegram recipient as a username instead of a number
        #[arg(long)]
        user: bool,

        /// Message kind
        #[arg(long, value_enum, default_value_t = KindArg::Text)]
        kind: KindArg,

        /// Attached file name (video, photo, file)
        #[arg(long)]
        file: Option<String>,

        /// File format (defaults to the file extension)
        #[arg(long)]
        format: Option<String>,

        /// Video duration in seconds
        #[arg(long)]
        duration: Option<i64>,

        /// Send time, e.g. "2024-01-05 09:03" (defaults to now)
        #[arg(long)]
        at: Option<String>,

        /// Message content
        content: String,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the default config file location
    Path,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PlatformArg {
    Whatsapp,
    Telegram,
    Facebook,
    Instagram,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Whatsapp => Platform::WhatsApp,
            PlatformArg::Telegram => Platform::Telegram,
            PlatformArg::Facebook => Platform::Facebook,
            PlatformArg::Instagram => Platform::Instagram,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Text,
    Video,
    Photo,
    File,
}

// ─── Helpers ───────────────────────────────────────────────

/// Load the config for a command.
///
/// An explicit `--config` must load. A broken file at the implicit default
/// location is skipped with a warning.
fn load_config(explicit: Option<&Path>, default_path: &Path) -> anyhow::Result<ChatcastConfig> {
    if let Some(path) = explicit {
        return ChatcastConfig::load(path).with_context(|| format!("loading {}", path.display()));
    }
    Ok(ChatcastConfig::load(default_path).unwrap_or_else(|e| {
        warn!("Ignoring {}: {}", default_path.display(), e);
        ChatcastConfig::default()
    }))
}

/// `--at` wins, then the config's `[demo].sent_at`, then the clock.
fn resolve_sent_at(at: Option<&str>, config: &ChatcastConfig) -> anyhow::Result<NaiveDateTime> {
    match at {
        Some(raw) => Ok(parse_timestamp(raw)?),
        None => Ok(config.effective_sent_at(timestamp::now())?),
    }
}

fn build_channel(platform: Platform, recipient: &str, user: bool) -> Channel {
    if user && platform != Platform::Telegram {
        warn!("--user only affects Telegram, ignoring it for {}", platform);
    }
    match platform {
        Platform::WhatsApp => Channel::whatsapp(recipient),
        Platform::Telegram => Channel::telegram(recipient, !user),
        Platform::Facebook => Channel::facebook(recipient),
        Platform::Instagram => Channel::instagram(recipient),
    }
}

/// Flags given on the command line that `kind` has no field for.
fn ignored_flags(
    kind: KindArg,
    file: Option<&str>,
    format: Option<&str>,
    duration: Option<i64>,
) -> Vec<&'static str> {
    let mut ignored = Vec::new();
    if kind == KindArg::Text {
        if file.is_some() {
            ignored.push("--file");
        }
        if format.is_some() {
            ignored.push("--format");
        }
    }
    if kind != KindArg::Video && duration.is_some() {
        ignored.push("--duration");
    }
    ignored
}

fn build_message(
    kind: KindArg,
    content: &str,
    file: Option<&str>,
    format: Option<&str>,
    duration: Option<i64>,
    sent_at: NaiveDateTime,
) -> Message {
    for flag in ignored_flags(kind, file, format, duration) {
        warn!("{} does not apply to {:?} messages, ignoring it", flag, kind);
    }

    let file_name = file.unwrap_or_default();
    let format = format
        .map(str::to_string)
        .or_else(|| {
            file_name
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_lowercase())
        })
        .unwrap_or_default();

    match kind {
        KindArg::Text => Message::text(content, sent_at),
        KindArg::Video => Message::video(
            content,
            file_name,
            &format,
            duration.unwrap_or_default(),
            sent_at,
        ),
        KindArg::Photo => Message::photo(content, file_name, &format, sent_at),
        KindArg::File => Message::file(content, file_name, &format, sent_at),
    }
}

// ─── Commands ──────────────────────────────────────────────

fn run_demo<W: Write>(config: &ChatcastConfig, at: Option<&str>, out: W) -> anyhow::Result<()> {
    let sent_at = resolve_sent_at(at, config)?;
    let scenario = match config.resolve_scenario(sent_at)? {
        Some(custom) => {
            info!("Using scenario from config ({} dispatches)", custom.len());
            custom
        }
        None => demo::sample_scenario(sent_at),
    };

    let mut dispatcher = Dispatcher::new(out);
    dispatcher.run(&scenario)?;
    Ok(())
}

fn run_send<W: Write>(config: &ChatcastConfig, args: SendArgs<'_>, out: W) -> anyhow::Result<()> {
    let sent_at = resolve_sent_at(args.at, config)?;
    let channel = build_channel(args.via.into(), args.to, args.user);
    let message = build_message(
        args.kind,
        args.content,
        args.file,
        args.format,
        args.duration,
        sent_at,
    );

    channel.validate()?;
    message.validate()?;

    let mut dispatcher = Dispatcher::new(out);
    dispatcher.send(&channel, &message)?;
    Ok(())
}

struct SendArgs<'a> {
    via: PlatformArg,
    to: &'a str,
    user: bool,
    kind: KindArg,
    file: Option<&'a str>,
    format: Option<&'a str>,
    duration: Option<i64>,
    at: Option<&'a str>,
    content: &'a str,
}

fn run_config<W: Write>(
    config: &ChatcastConfig,
    shown: &Path,
    action: ConfigAction,
    mut out: W,
) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            writeln!(out, "{}", format!("# {}", shown.display()).dimmed())?;
            write!(out, "{}", config.to_toml()?)?;
        }
        ConfigAction::Path => {
            writeln!(out, "{}", ChatcastConfig::default_path().display())?;
        }
    }
    Ok(())
}

fn run<W: Write>(cli: Cli, default_config: &Path, out: W) -> anyhow::Result<()> {
    let explicit = cli.config.as_deref();

    match cli.command {
        // ─── Demo (default) ────────────────────────────
        // A bare run is the fixed demonstration unless a config is named.
        None => {
            let config = match explicit {
                Some(_) => load_config(explicit, default_config)?,
                None => ChatcastConfig::default(),
            };
            run_demo(&config, None, out)
        }
        Some(Commands::Demo { at }) => {
            let config = load_config(explicit, default_config)?;
            run_demo(&config, at.as_deref(), out)
        }

        // ─── One-shot Send ─────────────────────────────
        Some(Commands::Send {
            via,
            to,
            user,
            kind,
            file,
            format,
            duration,
            at,
            content,
        }) => {
            let config = load_config(explicit, default_config)?;
            run_send(
                &config,
                SendArgs {
                    via,
                    to: &to,
                    user,
                    kind,
                    file: file.as_deref(),
                    format: format.as_deref(),
                    duration,
                    at: at.as_deref(),
                    content: &content,
                },
                out,
            )
        }

        // ─── Config ────────────────────────────────────
        Some(Commands::Config { action }) => {
            let config = load_config(explicit, default_config)?;
            let shown = explicit.unwrap_or(default_config);
            run_config(&config, shown, action, out)
        }
    }
}

// ─── Main ──────────────────────────────────────────────────

fn main() {
    // Transcripts own stdout, diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let default_config = ChatcastConfig::default_path();
    if let Err(e) = run(Cli::parse(), &default_config, io::stdout().lock()) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
