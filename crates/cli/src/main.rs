mod args;
mod config;
mod ops;
mod state;
mod version;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use args::{Args, Op, Parser};
use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    let code = run().await;
    std::process::exit(code);
}

// Returned as an exit code so the log writer guard is dropped, and flushed,
// before the process exits
async fn run() -> i32 {
    let args = Args::parse();

    // Get the configuration from the environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error loading configuration: {}", e);
            return 2;
        }
    };

    // Set up logging. Stdout is reserved for command output.
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let env_filter = EnvFilter::builder()
        .with_default_directive((*config.log_level()).into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(non_blocking_writer)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(stderr_layer).init();

    register_panic_logger();
    version::report_version();

    let state = match AppState::from_config(config) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("could not setup app state: {}", e);
            return 2;
        }
    };
    tracing::debug!(api_base_url = %state.config().api_base_url(), "resolved configuration");

    match args.command.execute(&state).await {
        Ok(r) => {
            println!("{}", r);
            0
        }
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {}", e);
            1
        }
    }
}

fn register_panic_logger() {
    std::panic::set_hook(Box::new(|panic| match panic.location() {
        Some(loc) => {
            tracing::error!(
                message = %panic,
                panic.file = loc.file(),
                panic.line = loc.line(),
                panic.column = loc.column(),
            );
        }
        None => tracing::error!(message = %panic),
    }));
}
