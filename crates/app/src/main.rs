use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    Clock, ClubCatalog, CountdownService, InMemorySink, QuizFlowService, SignupService,
    SignupSink,
};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidFixedNow { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidFixedNow { raw } => {
                write!(f, "invalid --fixed-now value (want RFC 3339): {raw}")
            }
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

fn parse_fixed_now(raw: &str) -> Result<DateTime<Utc>, ArgsError> {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|t| t.to_utc())
        .map_err(|_| ArgsError::InvalidFixedNow {
            raw: raw.to_string(),
        })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--fixed-now <rfc3339>] [--log <filter>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --fixed-now  pin the clock, e.g. 2025-11-01T09:00:00Z (demos/screenshots)");
    eprintln!("  --log        tracing filter, defaults to info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CLUB_FIXED_NOW, CLUB_LOG");
}

struct Args {
    fixed_now: Option<DateTime<Utc>>,
    log_filter: String,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut fixed_now = std::env::var("CLUB_FIXED_NOW")
            .ok()
            .map(|raw| parse_fixed_now(&raw))
            .transpose()?;
        let mut log_filter = std::env::var("CLUB_LOG")
            .ok()
            .unwrap_or_else(|| "info".to_string());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--fixed-now" => {
                    let value = require_value(args, "--fixed-now")?;
                    fixed_now = Some(parse_fixed_now(&value)?);
                }
                "--log" => {
                    log_filter = require_value(args, "--log")?;
                }
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            fixed_now,
            log_filter,
        })
    }
}

struct DesktopApp {
    catalog: Arc<ClubCatalog>,
    countdown: Arc<CountdownService>,
    quiz_flow: Arc<QuizFlowService>,
    signups: Arc<SignupService>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<ClubCatalog> {
        Arc::clone(&self.catalog)
    }

    fn countdown(&self) -> Arc<CountdownService> {
        Arc::clone(&self.countdown)
    }

    fn quiz_flow(&self) -> Arc<QuizFlowService> {
        Arc::clone(&self.quiz_flow)
    }

    fn signups(&self) -> Arc<SignupService> {
        Arc::clone(&self.signups)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&parsed.log_filter)?)
        .init();

    let clock = parsed.fixed_now.map_or_else(Clock::system, Clock::fixed);
    if let Clock::Fixed(at) = clock {
        tracing::info!(%at, "running with a pinned clock");
    }

    let catalog = Arc::new(ClubCatalog::seeded());
    let sink = Arc::new(InMemorySink::new()) as Arc<dyn SignupSink>;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog: Arc::clone(&catalog),
        countdown: Arc::new(CountdownService::new(clock, Arc::clone(&catalog))),
        quiz_flow: Arc::new(QuizFlowService::new(Arc::clone(&catalog))),
        signups: Arc::new(SignupService::new(clock, Arc::clone(&catalog), sink)),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev
    // setups. Explicitly disable it so the app doesn't behave like a modal.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("GMU Coding Club")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);

    Ok(())
}
