//! Repotable binary entrypoint kept minimal. The runtime lives in `repotable::app`.

use std::fmt;
use std::process::ExitCode;
use std::sync::OnceLock;

use clap::Parser;
use repotable::args::{self, Args};
use repotable::{index, logic, theme};

/// Log timestamp formatter (`YYYY-MM-DDTHH:MM:SS` in local time).
struct RepotableTimer;

impl tracing_subscriber::fmt::time::FormatTime for RepotableTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// What: Install the global tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter used when `RUST_LOG` is unset.
///
/// Output:
/// - None; logs go to `<config_dir>/logs/repotable.log`, or stderr when the
///   file cannot be opened.
fn init_logging(level: &str) {
    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level))
    };
    let mut log_path = theme::logs_dir();
    log_path.push("repotable.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(RepotableTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter())
                .with_target(false)
                .with_ansi(true)
                .with_writer(std::io::stderr)
                .with_timer(RepotableTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args::determine_log_level(&args));

    let settings = theme::settings();
    let path = args::resolve_data_path(&args, &settings);
    tracing::info!(path = %path.display(), dedupe = args.dedupe, "Repotable starting");

    let store = match index::load_store(&path, args.dedupe, settings.top_languages) {
        Ok(store) => store,
        Err(err) => {
            tracing::error!(error = %err, "failed to load data");
            eprintln!("repotable: {err}");
            return ExitCode::FAILURE;
        }
    };

    let query = args::initial_query(&args, &settings);
    if args.print || args.json {
        let view = logic::build_view_with(&store, &query, settings.recent_count);
        if args.json {
            match args::render_json(&view) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    tracing::error!(error = %err, "failed to serialize view");
                    eprintln!("repotable: {err}");
                    return ExitCode::FAILURE;
                }
            }
        } else {
            print!("{}", args::render_text(&view, settings.show_summary));
        }
        return ExitCode::SUCCESS;
    }

    let code = match repotable::app::run(&store, query, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = ?err, "Application error");
            eprintln!("repotable: {err}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("Repotable exited");
    code
}
