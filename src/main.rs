mod app;

use app::cli::Args;
use app::config::Config;
use app::constructor::AppConstructor;
use app::{
    App,
    main_loop::AppMainLoop,
    terminal::{init_terminal, restore_terminal},
};
use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Parse command line arguments
    let args = Args::parse();

    // Handle --generate-config option
    if let Some(path) = &args.generate_config {
        let config_path = if path.is_dir() || path.to_str() == Some(".") {
            path.join("config.toml")
        } else {
            path.clone()
        };
        Config::generate_default(config_path)?;
        return Ok(());
    }

    // Determine config path for logging later
    let config_path = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .map(|d| d.join("spindle").join("config.toml"))
            .unwrap_or_default()
    });
    let config_existed = config_path.exists();

    // Load config first for logger initialization
    let (mut config, config_warnings) = Config::load(args.config.clone())?;

    if let Some(ref client_id) = args.client_id {
        config.spotify.client_id = client_id.clone();
    }

    // Initialize logger first
    if config.logging.enabled {
        app::logging::ensure_log_directory()?;
        app::logging::init_logger(&config.logging)?;
        app::logging::log_startup_info();
        app::logging::log_config_loading(&config_path, !config_existed);

        for warning in &config_warnings {
            log::warn!("{}", warning);
        }
    }

    // Log in before entering the alternate screen so the auth URL stays
    // readable on the plain terminal.
    let client = app::auth::login(&config.spotify).await?;

    // Initialize terminal
    let terminal = init_terminal()?;

    // Save logging state before app takes ownership
    let logging_enabled = config.logging.enabled;

    let app = App::new(config, client);

    // Run application
    let result = app.run(terminal).await;

    // Log shutdown before restoring terminal
    if logging_enabled {
        app::logging::log_shutdown_info();
    }

    // Restore terminal
    restore_terminal()?;
    result
}
