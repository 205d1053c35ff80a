use anyhow::Result;
use clap::Parser;
use shortlink::config;
use tracing_subscriber::EnvFilter;

/// Short link redirector with asynchronous visit analytics.
#[derive(Parser)]
#[command(name = "shortlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the bind address (`LISTEN`)
    #[arg(short, long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
        config.validate()?;
    }

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    shortlink::server::run(&config).await
}

fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
