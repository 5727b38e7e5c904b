use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "movie-server")]
#[command(about = "Movie catalog and recommendation server", long_about = None)]
struct Args {
    #[arg(short, long)]
    config: Option<String>,
    #[arg(short, long)]
    debug: bool,
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug {
        "movie_server_rs=debug,tower_http=debug"
    } else {
        "movie_server_rs=info,tower_http=info"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    match args.log_format {
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
    }

    if let Err(e) = movie_server_rs::run(args.config.as_deref()).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
