mod server_config;
mod shutdown;
mod sse_handler;
mod web_server;

use clap::Parser;
use snake_engine::{EngineError, SnakeGame, log, log_warn, logger};

use server_config::{DEFAULT_CONFIG_FILE, get_config_manager};
use web_server::{WebServerState, run_web_server};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "snake_server")]
struct Args {
    /// Path to the YAML config; created with defaults when missing.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Server".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config = get_config_manager(&args.config).load_or_create()?;
    log!("Loaded config from {}", args.config);

    let game = SnakeGame::new(config.engine.clone());
    let arena = config.arena;
    game.restart(arena.width, arena.height, arena.food_count).await;

    let (trigger, signal) = shutdown::channel();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                log!("Shutdown signal received");
                trigger.fire();
            }
            Err(e) => {
                log_warn!("Failed to listen for Ctrl+C: {}", e);
                // Dropping the trigger would stop the server.
                std::future::pending::<()>().await;
            }
        }
    });

    let engine_task = {
        let game = game.clone();
        let signal = signal.clone();
        async move {
            match game.run(signal.wait()).await {
                Ok(()) | Err(EngineError::Cancelled) => Ok::<(), BoxError>(()),
            }
        }
    };

    let state = WebServerState {
        game,
        arena,
        shutdown: signal,
    };
    let web_task = async move {
        run_web_server(state, &config.listen_address)
            .await
            .map_err(BoxError::from)
    };

    tokio::try_join!(engine_task, web_task)?;

    log!("Server shut down gracefully");
    Ok(())
}
