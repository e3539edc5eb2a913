use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use aula_core::schedule::Schedule;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    ChecklistService, Clock, CommunityBrowser, ContributionService, LocalContributionService,
    NoticeStyle,
};
use storage::{ProgressStore, Storage};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

mod schedule;
mod seed;

const DEFAULT_DB_URL: &str = "sqlite://aula.sqlite3";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    clock: Clock,
    schedule: Schedule,
    checklist: Arc<ChecklistService>,
    community: Arc<CommunityBrowser>,
}

impl UiApp for DesktopApp {
    fn clock(&self) -> Clock {
        self.clock
    }

    fn schedule(&self) -> Schedule {
        self.schedule.clone()
    }

    fn checklist(&self) -> Arc<ChecklistService> {
        Arc::clone(&self.checklist)
    }

    fn community(&self) -> Arc<CommunityBrowser> {
        Arc::clone(&self.community)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    db_url: String,
    schedule: Option<PathBuf>,
    admin: bool,
    toasts: bool,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui   [--db <sqlite_url>] [--schedule <path>] [--admin] [--no-toasts]");
    eprintln!("  cargo run -p app -- seed [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults for ui:");
    eprintln!("  --db {DEFAULT_DB_URL}");
    eprintln!("  built-in schedule when --schedule is absent");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  AULA_DB_URL, AULA_SCHEDULE, AULA_ADMIN=1, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Seed,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "seed" => Some(Self::Seed),
            _ => None,
        }
    }
}

impl Args {
    fn from_env() -> Self {
        Self {
            db_url: std::env::var("AULA_DB_URL")
                .ok()
                .map_or_else(|| DEFAULT_DB_URL.into(), normalize_sqlite_url),
            schedule: std::env::var_os("AULA_SCHEDULE").map(PathBuf::from),
            admin: std::env::var("AULA_ADMIN").is_ok_and(|value| value == "1"),
            toasts: true,
        }
    }

    fn parse(mut self, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    self.db_url = normalize_sqlite_url(value);
                }
                "--schedule" => {
                    self.schedule = Some(PathBuf::from(require_value(args, "--schedule")?));
                }
                "--admin" => self.admin = true,
                "--no-toasts" => self.toasts = false,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(self)
    }

    fn notice_style(&self) -> NoticeStyle {
        if self.toasts {
            NoticeStyle::Toast
        } else {
            NoticeStyle::Alert
        }
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(
            log_fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter),
        )
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "unknown subcommand")
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let parsed = Args::from_env()
        .parse(&mut argv.into_iter())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;

    prepare_sqlite_file(&parsed.db_url)?;
    let storage = Storage::sqlite(&parsed.db_url).await?;
    info!(db = %parsed.db_url, "storage ready");

    let clock = Clock::default();
    let contributions = Arc::new(LocalContributionService::new(
        Arc::clone(&storage.lessons),
        parsed.admin,
    ));

    match cmd {
        Command::Ui => {
            let schedule = schedule::load_schedule(parsed.schedule.as_deref())?;
            let checklist = Arc::new(ChecklistService::new(
                clock,
                ProgressStore::new(Arc::clone(&storage.values)),
            ));
            let service: Arc<dyn ContributionService> = contributions;
            let community = Arc::new(CommunityBrowser::new(service, parsed.notice_style()));

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                clock,
                schedule,
                checklist,
                community,
            });
            let context = build_app_context(&app);

            // Some dev setups default to an always-on-top window.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Aula")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Seed => {
            let count = seed::seed_lessons(&contributions, clock.now()).await?;
            eprintln!("seed: published {count} lessons into {}", parsed.db_url);
            Ok(())
        }
    }
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
