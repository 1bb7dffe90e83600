use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use urlshort::config::{load_config, validate_config, ConfigError, ServiceConfig};
use urlshort::lifecycle::{load_mapping, StartupError};
use urlshort::observability::logging;
use urlshort::{Format, HitPolicy, HttpServer};

#[derive(Parser)]
#[command(name = "urlshort")]
#[command(about = "Redirect mapped request paths to their destination URLs", long_about = None)]
struct Cli {
    /// Service configuration file (TOML).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Redirects document (YAML or JSON). Overrides the config file.
    #[arg(short, long)]
    redirects: Option<PathBuf>,

    /// Redirects document format (yaml, yml, json). Defaults to the file extension.
    #[arg(short, long)]
    format: Option<Format>,

    /// Address to listen on. Overrides the config file.
    #[arg(short, long)]
    bind: Option<String>,

    /// Also run the fallback handler after answering a mapped path.
    #[arg(long)]
    fallthrough: bool,
}

impl Cli {
    fn apply(&self, config: &mut ServiceConfig) {
        if let Some(redirects) = &self.redirects {
            config.redirects.path = Some(redirects.clone());
            config.redirects.format = None;
        }
        if let Some(format) = self.format {
            config.redirects.format = Some(format);
        }
        if let Some(bind) = &self.bind {
            config.listener.bind_address = bind.clone();
        }
        if self.fallthrough {
            config.redirects.hit_policy = HitPolicy::RedirectThenFallback;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path).map_err(StartupError::Config)?,
        None => ServiceConfig::default(),
    };
    cli.apply(&mut config);
    validate_config(&config)
        .map_err(|errors| StartupError::Config(ConfigError::Validation(errors)))?;

    logging::init(&config.observability);

    tracing::info!("urlshort v{} starting", env!("CARGO_PKG_VERSION"));

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        hit_policy = ?config.redirects.hit_policy,
        "Configuration loaded"
    );

    let mapping = load_mapping(&config.redirects).await?;

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            address: config.listener.bind_address.clone(),
            source,
        })?;

    tracing::info!(
        address = %listener.local_addr()?,
        "Listening for connections"
    );

    let server = HttpServer::new(config, mapping);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
