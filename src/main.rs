use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leave_tracker::cli::{handle_calendar_command, handle_leave_command};
use leave_tracker::config::paths::{LeavePaths, DATA_DIR_ENV};
use leave_tracker::config::settings::Settings;
use leave_tracker::services::LeaveSession;
use leave_tracker::storage::Storage;

#[derive(Parser)]
#[command(
    name = "leave",
    version,
    about = "Vacation, sick leave and day-off scheduling for small teams",
    long_about = "Leave Tracker books vacations, sick leave and days off per employee, \
                  refuses overlapping bookings and renders company and per-employee \
                  calendars in the terminal."
)]
struct Cli {
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding the data file, settings and audit log
    #[arg(long, global = true, env = DATA_DIR_ENV, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Leave(leave_tracker::cli::LeaveCommands),

    /// Calendar views
    #[command(subcommand, alias = "cal")]
    Calendar(leave_tracker::cli::CalendarCommands),

    /// Show current configuration and paths
    Config,

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "leave_tracker=debug"
    } else {
        "leave_tracker=warn"
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
    );

    // stdout carries command output, diagnostics go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Initialize paths and settings
    let paths = match cli.data_dir {
        Some(dir) => LeavePaths::with_base_dir(dir),
        None => LeavePaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let storage = Storage::new(&paths)?;
    let audit_log = storage.audit.clone();
    let (repository, audit) = storage.into_parts();
    let audit = settings.audit_enabled.then_some(audit);
    let mut session = LeaveSession::open(repository, audit);

    match cli.command {
        Some(Commands::Leave(cmd)) => {
            handle_leave_command(&mut session, &settings, cmd)?;
        }
        Some(Commands::Calendar(cmd)) => {
            handle_calendar_command(&session, &settings, cmd)?;
        }
        Some(Commands::Config) => {
            println!("Leave Tracker Configuration");
            println!("===========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data file:       {}", paths.employees_file().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Calendar months: {}", settings.window_months());
            println!("  Week starts on:  {:?}", settings.week_start);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        Some(Commands::Audit { count }) => {
            let entries = audit_log.read_recent(count)?;
            if entries.is_empty() {
                println!("No audit entries.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        None => {
            println!("Leave Tracker - vacation and sick leave scheduling");
            println!();
            println!("Run 'leave --help' for usage information.");
            println!("Run 'leave calendar company' to see the next months.");
        }
    }

    Ok(())
}
