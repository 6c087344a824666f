use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use battle_core::{
    Action, BattleConfig, BattleReport, BattleSession, DataType, FightOutcome, SessionListener,
};
use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Text front end for the battle scene")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay button presses against a fresh scene and emit a JSON report.
    Play(PlayArgs),
    /// Pretty-print an existing report.
    Report(ReportArgs),
    /// Print the starting labels for a config.
    Labels(LabelsArgs),
}

#[derive(Args)]
struct PlayArgs {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Comma separated presses, e.g. `power+,power+,money-,fight`.
    #[arg(long, value_delimiter = ',', required = true)]
    actions: Vec<Action>,
    #[arg(long)]
    report: Option<PathBuf>,
    #[arg(long)]
    id: Option<String>,
}

#[derive(Args)]
struct ReportArgs {
    #[arg(long)]
    input: PathBuf,
}

#[derive(Args)]
struct LabelsArgs {
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Play(args) => handle_play(args),
        Commands::Report(args) => handle_report(args),
        Commands::Labels(args) => handle_labels(args),
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

fn load_config(path: Option<&Path>) -> Result<BattleConfig> {
    let config = match path {
        Some(path) => BattleConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => BattleConfig::default(),
    };
    init_tracing(config.telemetry.trace_filter());
    Ok(config)
}

/// Renders the scene's text fields to stdout.
struct ConsoleListener;

impl SessionListener for ConsoleListener {
    fn stat_changed(&mut self, _kind: DataType, _value: i64, label: &str) {
        println!("{label}");
    }

    fn enemy_power_changed(&mut self, _power: i64, label: &str) {
        println!("{label}");
    }

    fn fight_resolved(&mut self, outcome: FightOutcome, _player_power: i64, _enemy_power: i64) {
        match outcome {
            FightOutcome::Victory => println!("You won!"),
            FightOutcome::Defeat => println!("You lost!"),
        }
    }
}

fn handle_play(args: PlayArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let mut session = BattleSession::new(&config);
    {
        let mut active = session.bind(ConsoleListener);
        for action in args.actions {
            if active.press(action).is_none() {
                println!("Ignored {action}: the fight is over");
            }
        }
    }

    let run_id = args
        .id
        .unwrap_or_else(|| format!("run-{}", Utc::now().format("%Y%m%dT%H%M%S")));
    let report = BattleReport::from_session(run_id, &session);
    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(path) = args.report.as_ref() {
        report
            .write(path)
            .with_context(|| format!("failed to write report {}", path.display()))?;
        info!(target: "battle_cli", path = %path.display(), "report written");
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn handle_report(args: ReportArgs) -> Result<()> {
    init_tracing(battle_core::config::DEFAULT_TRACE_FILTER);
    let report = BattleReport::read(&args.input)
        .with_context(|| format!("failed to read report {}", args.input.display()))?;
    let outcome = report
        .outcome
        .map(|outcome| outcome.to_string())
        .unwrap_or_else(|| "no fight".to_owned());
    println!(
        "Report {} -> {} ({} actions, {} power {})",
        report.id, outcome, report.actions_applied, report.enemy.name, report.enemy.power
    );
    for entry in &report.stats {
        println!("  {}", entry.label);
    }
    Ok(())
}

fn handle_labels(args: LabelsArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let session = BattleSession::new(&config);
    for kind in DataType::ALL {
        println!("{}", session.stats().display_label(kind));
    }
    println!("{}", session.enemy().power_label(session.stats()));
    Ok(())
}
