use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "tmdb-proxy")]
#[command(about = "Simplified JSON proxy for the TMDb movie API", long_about = None)]
struct Args {
    #[arg(short, long, default_value = "tmdb-proxy.yaml")]
    config: String,

    /// Log upstream requests (api key redacted)
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let default_filter = if args.debug {
        "tmdb_proxy=debug,tower_http=debug"
    } else {
        "tmdb_proxy=info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = tmdb_proxy::run(&args.config, args.debug).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
