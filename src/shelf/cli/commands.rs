use super::print::print_messages;
use super::setup::{Cli, Commands};
use super::shell::Shell;
use clap::Parser;
use directories::ProjectDirs;
use shelf::api::{ConfigAction, LibraryApi, ShelfPaths};
use shelf::commands::config as config_cmd;
use shelf::config::{ShelfConfig, KEYS};
use shelf::error::Result;
use shelf::model::Admin;
use shelf::store::fs::FileStore;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

struct AppContext {
    paths: ShelfPaths,
    admin: Admin,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ctx = init_context(&cli);
    debug!(
        config_dir = %ctx.paths.config_dir.display(),
        data_file = %ctx.paths.data_file.display(),
        "resolved paths"
    );

    match cli.command {
        None | Some(Commands::Shell) => handle_shell(&ctx),
        Some(Commands::Seed) => handle_seed(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

/// Logs go to stderr so they never mix with the menu on stdout.
/// `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "shelf=debug" } else { "shelf=error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn config_dir(cwd: &Path) -> PathBuf {
    if let Some(home) = std::env::var_os("SHELF_HOME") {
        return PathBuf::from(home);
    }
    ProjectDirs::from("com", "shelf", "shelf")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| cwd.to_path_buf())
}

fn init_context(cli: &Cli) -> AppContext {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_dir = config_dir(&cwd);

    let config = ShelfConfig::load(&config_dir).unwrap_or_else(|e| {
        warn!(error = %e, "ignoring unreadable config, using defaults");
        ShelfConfig::default()
    });

    let data_file = match &cli.data {
        Some(path) if path.is_absolute() => path.clone(),
        Some(path) => cwd.join(path),
        None => config.data_path(&cwd),
    };

    AppContext {
        paths: ShelfPaths {
            config_dir,
            data_file,
        },
        admin: config.admin(),
    }
}

fn open_api(ctx: &AppContext) -> Result<LibraryApi<FileStore>> {
    LibraryApi::open(FileStore::new(&ctx.paths.data_file), ctx.admin.clone())
}

fn handle_shell(ctx: &AppContext) -> Result<()> {
    let mut api = open_api(ctx)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(&mut api, stdin.lock(), stdout.lock()).run()
}

fn handle_seed(ctx: &AppContext) -> Result<()> {
    let mut api = open_api(ctx)?;
    let result = api.seed()?;
    print_messages(&mut io::stdout(), &result.messages)?;
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = config_cmd::run(&ctx.paths, action)?;
    let mut out = io::stdout();
    if show_all {
        if let Some(config) = &result.config {
            for key in KEYS {
                let value = config.display_value(key).unwrap_or_default();
                writeln!(out, "{} = {}", key, value)?;
            }
        }
    }
    print_messages(&mut out, &result.messages)?;
    Ok(())
}
