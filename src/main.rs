// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::{CommandFactory, Parser};
use cli::Args;
use commands::{
    handle_match_command, handle_match_ids_command, handle_profile_command,
    handle_set_api_key_command, handle_show_config_command,
};
use logging::setup_logging;
use riftstats::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Keep the guard alive so buffered log lines are flushed on exit
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Configuration operations first, they need no API access
    if let Some(new_key) = &args.new_api_key {
        return handle_set_api_key_command(new_key).await;
    }

    if args.show_config {
        return handle_show_config_command().await;
    }

    let result = if let Some(match_id) = &args.match_id {
        handle_match_command(&args, match_id).await
    } else if let Some(puuid) = &args.matches_for {
        handle_match_ids_command(&args, puuid).await
    } else if let Some(riot_id) = &args.riot_id {
        handle_profile_command(&args, riot_id).await
    } else {
        Args::command().print_help()?;
        return Ok(());
    };

    if let Err(e) = &result {
        tracing::error!("Command failed ({:?}): {}", e.kind(), e);
    }
    result
}
