//! Penwise CLI
//!
//! Command-line access to the editor core:
//! - Writing stats for a draft file
//! - Replaying recorded editor events
//! - Generating a default config file

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};

use penwise::config::{generate_default_config, Config};
use penwise::editor::{EditorEvent, EditorSession, EditorSnapshot};
use penwise::logging::init_logging;

#[derive(Parser)]
#[command(name = "penwise")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Writing stats and editor session tools for Penwise drafts")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: <config dir>/penwise/config.toml, then ./penwise.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show word count, reading time and daily goal progress for a draft
    Stats {
        /// Draft file (default: stdin)
        path: Option<PathBuf>,
        /// Title to show (default: file name)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Apply JSON-lines editor events to a fresh session and print the result
    Replay {
        /// Event file (default: stdin)
        path: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Stats { path, title } => {
            let body = read_input(path.as_deref())?;
            let mut session = EditorSession::new(config.session_context()?);

            let title = title
                .or_else(|| {
                    path.as_deref()
                        .and_then(Path::file_stem)
                        .map(|s| s.to_string_lossy().to_string())
                })
                .unwrap_or_default();
            session.set_title(title);
            session.set_body(body);

            tracing::debug!(
                chars = session.compute_metrics().character_count,
                "computing draft stats"
            );
            print_snapshot(&session.snapshot(), cli.format)?;
        }

        Commands::Replay { path } => {
            let input = read_input(path.as_deref())?;
            let mut session = EditorSession::new(config.session_context()?);

            let summary = replay_events(&mut session, &input);
            tracing::info!(
                applied = summary.applied,
                skipped = summary.skipped,
                "replay finished"
            );
            print_snapshot(&session.snapshot(), cli.format)?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Read a file, or stdin when no path is given
fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

/// Counts from a replay run
#[derive(Debug, Default, PartialEq, Eq)]
struct ReplaySummary {
    applied: usize,
    skipped: usize,
}

/// Apply one event per line. Blank lines are ignored; malformed lines are
/// logged and skipped so the session never sees them.
fn replay_events(session: &mut EditorSession, input: &str) -> ReplaySummary {
    let mut summary = ReplaySummary::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match EditorEvent::from_json(line) {
            Ok(event) => {
                if let Some(outcome) = session.apply(event) {
                    tracing::info!(line = idx + 1, outcome = ?outcome, "quick action not available");
                }
                summary.applied += 1;
            }
            Err(e) => {
                tracing::warn!(line = idx + 1, error = %e, "skipping malformed event");
                summary.skipped += 1;
            }
        }
    }

    summary
}

fn print_snapshot(snapshot: &EditorSnapshot, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render_table(snapshot)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(snapshot)?),
    }
    Ok(())
}

fn render_table(snapshot: &EditorSnapshot) -> String {
    let on_off = |flag: bool| if flag { "on" } else { "off" };
    let title = if snapshot.title.is_empty() {
        "(untitled)"
    } else {
        snapshot.title.as_str()
    };

    format!(
        "Title:         {}\n\
         Words:         {}\n\
         Characters:    {}\n\
         Reading time:  {} min\n\
         Daily goal:    {}% of {} words\n\
         Voice input:   {}\n\
         Gesture input: {}\n",
        title,
        snapshot.metrics.word_count,
        snapshot.metrics.character_count,
        snapshot.metrics.reading_time_minutes,
        snapshot.goal.whole_percent(),
        snapshot.goal.target_words,
        on_off(snapshot.voice_active),
        on_off(snapshot.gesture_active),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_applies_events_in_order() {
        let mut session = EditorSession::default();
        let input = r#"{"type": "title_changed", "value": "Notes"}
{"type": "body_changed", "value": "first"}
{"type": "body_changed", "value": "second version"}

{"type": "toggle_voice"}
{"type": "quick_action", "action": "save"}
"#;

        let summary = replay_events(&mut session, input);
        assert_eq!(summary, ReplaySummary { applied: 5, skipped: 0 });
        assert_eq!(session.title(), "Notes");
        assert_eq!(session.body(), "second version");
        assert!(session.voice_active());
        assert!(!session.gesture_active());
    }

    #[test]
    fn test_replay_skips_malformed_lines() {
        let mut session = EditorSession::default();
        let input = r#"{"type": "body_changed", "value": "kept"}
{"type": "body_changed", "value": null}
{"type": "toggle_gesture"
{"type": "toggle_gesture"}"#;

        let summary = replay_events(&mut session, input);
        assert_eq!(summary, ReplaySummary { applied: 2, skipped: 2 });
        assert_eq!(session.body(), "kept");
        assert!(session.gesture_active());
    }

    #[test]
    fn test_render_table() {
        let mut session = EditorSession::default();
        session.set_body(vec!["word"; 250].join(" "));
        session.toggle_gesture();

        let table = render_table(&session.snapshot());
        assert!(table.contains("Title:         (untitled)\n"));
        assert!(table.contains("Words:         250\n"));
        assert!(table.contains("Reading time:  2 min\n"));
        assert!(table.contains("Daily goal:    50% of 500 words\n"));
        assert!(table.contains("Voice input:   off\n"));
        assert!(table.contains("Gesture input: on\n"));
    }

    #[test]
    fn test_stats_count_characters_not_bytes() {
        let mut session = EditorSession::default();
        session.set_body("naïve café 😀");

        assert_eq!(session.body().len(), 17);
        assert_eq!(session.compute_metrics().character_count, 12);

        let table = render_table(&session.snapshot());
        assert!(table.contains("Characters:    12\n"));
    }
}
