//! Storedesk binary entry point.
//!
//! Resolves configuration, initializes logging, opens the single long-lived
//! database connection, and hands stdin/stdout to the menu loop.

use log::{error, info};
use std::io;
use std::process::ExitCode;
use storedesk_cli::menu::run_main_menu;
use storedesk_cli::prompt::Console;
use storedesk_core::db::open_db;
use storedesk_core::{default_log_level, init_logging, SqliteRecordRepository};

fn main() -> ExitCode {
    let db_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "storedesk.db".to_string());

    if let Err(err) = try_init_logging() {
        // The tool stays usable without file logging.
        eprintln!("warning: file logging disabled: {err}");
    }
    info!(
        "event=app_start module=cli status=ok version={} db_path={db_path}",
        env!("CARGO_PKG_VERSION")
    );

    let conn = match open_db(&db_path) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=app_exit module=cli status=error error_code=db_open_failed error={err}");
            eprintln!("failed to open database `{db_path}`: {err}");
            return ExitCode::FAILURE;
        }
    };

    let repo = match SqliteRecordRepository::try_new(&conn) {
        Ok(repo) => repo,
        Err(err) => {
            error!("event=app_exit module=cli status=error error_code=db_not_ready error={err}");
            eprintln!("database `{db_path}` is not usable: {err}");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    match run_main_menu(&mut console, &repo) {
        Ok(()) => {
            info!("event=app_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=app_exit module=cli status=error error={err}");
            eprintln!("fatal: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_init_logging() -> Result<(), String> {
    let log_dir = std::env::current_dir()
        .map_err(|err| format!("cannot resolve working directory: {err}"))?
        .join("logs");
    init_logging(default_log_level(), log_dir)
}
