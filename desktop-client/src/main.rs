mod config;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use common::config::ConfigManager;
use common::games::tictactoe::{TicTacToeSession, TicTacToeSessionSettings};
use common::{log, logger};

use config::{Config, get_config_manager};
use ui::TicTacToeApp;

#[derive(Parser)]
#[command(name = "tictactoe_client", about = "Tic-tac-toe against a perfect-play computer")]
struct Args {
    #[arg(long)]
    use_log_prefix: bool,

    /// YAML config file, defaults to tictactoe_client_config.yaml next to the executable
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = match args.config {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => get_config_manager(),
    };
    let config = config_manager.get_config().unwrap_or_else(|e| {
        log!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    let session = TicTacToeSession::new(TicTacToeSessionSettings::from(&config.game));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Tic Tac Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Tic Tac Toe",
        options,
        Box::new(move |_cc| Ok(Box::new(TicTacToeApp::new(session)))),
    )?;

    log!("Client shut down");

    Ok(())
}
