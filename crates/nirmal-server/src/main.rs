use clap::Parser;
use nirmal_core::AppConfig;
use nirmal_server::Server;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "nirmal", version, about = "Nirmal complaint service")]
struct Cli {
    /// Path to a TOML config file.
    #[arg(long, env = "NIRMAL_CONFIG")]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config and PORT).
    #[arg(long)]
    port: Option<u16>,

    /// Users JSON file (overrides config).
    #[arg(long)]
    users_file: Option<PathBuf>,

    /// Complaints JSON file (overrides config).
    #[arg(long)]
    complaints_file: Option<PathBuf>,

    /// Officer secret code (overrides config and OFFICER_SECRET).
    #[arg(long)]
    officer_secret: Option<String>,
}

impl Cli {
    fn apply(self, config: &mut AppConfig) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = self.users_file {
            config.storage.users_file = path;
        }
        if let Some(path) = self.complaints_file {
            config.storage.complaints_file = path;
        }
        if let Some(secret) = self.officer_secret {
            config.auth.officer_secret = Some(secret);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.apply(&mut config);

    Server::new(config).run().await
}
