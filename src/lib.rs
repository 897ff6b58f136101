//! siteops library root.
//! Exposes the CLI parser, the run() entry point and the internal modules.

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod session;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::{self, Context};
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use ui::messages::field_errors;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &Context) -> AppResult<()> {
    match &cli.command {
        Commands::Init { force } => commands::init::handle(*force),
        Commands::Config {
            print_config,
            edit_config,
            editor,
        } => commands::config::handle(ctx, *print_config, *edit_config, editor),
        Commands::Login {
            token,
            email,
            password,
        } => commands::auth::login(ctx, token, email, password),
        Commands::Logout => commands::auth::logout(ctx),
        Commands::Whoami => commands::auth::whoami(ctx),
        Commands::Employees { action } => commands::employees::handle(action, ctx),
        Commands::Roles { action } => commands::roles::handle(action, ctx),
        Commands::Categories { action } => commands::categories::handle(action, ctx),
        Commands::Occurrences { action } => commands::occurrences::handle(action, ctx),
        Commands::Sites { action } => commands::sites::handle(action, ctx),
        Commands::Sop { action } => commands::sop::handle(action, ctx),
        Commands::Overview { page } => commands::overview::handle(ctx, *page),
        Commands::Report(args) => commands::report::handle(args, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(url) = &cli.api {
        cfg.api_base_url = url.clone();
    }
    if let Some(path) = &cli.session {
        cfg.session_file = path.clone();
    }

    logging::initialize(&cfg);
    tracing::debug!(api = %cfg.api_base_url, "starting");

    let ctx = Context::new(cfg);
    let result = dispatch(&cli, &ctx);

    if let Err(e) = &result {
        tracing::error!(error = %e, "command failed");
        match e {
            AppError::Validation { fields, .. } => field_errors(fields),
            e if e.is_auth_failure() => {
                // the next command must start from `login`
                let _ = ctx.store.clear();
            }
            _ => {}
        }
    }

    result
}
