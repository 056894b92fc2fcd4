use std::{net::SocketAddr, path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use textcard::{
    BackgroundCatalog, CardService, DEFAULT_FONT_PATH, Hinting, ImageService, RenderParams,
    STOCK_DIR, ServiceConfig,
    server::{self, ServerConfig},
};

#[derive(Parser, Debug)]
#[command(name = "textcard", version)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8080")]
    listen: SocketAddr,

    /// Filename of the TTF font.
    #[arg(long, default_value = DEFAULT_FONT_PATH)]
    fontfile: PathBuf,

    /// Directory holding the stock background images.
    #[arg(long, default_value = STOCK_DIR)]
    images_dir: PathBuf,

    /// Screen resolution in dots per inch.
    #[arg(long, default_value_t = 144.0)]
    dpi: f64,

    /// Font size in points.
    #[arg(long, default_value_t = 16.0)]
    size: f64,

    /// Line spacing (e.g. 2 means double spaced).
    #[arg(long, default_value_t = 1.5)]
    spacing: f64,

    /// Glyph hinting: none | full. Unrecognized values mean none.
    #[arg(long, default_value = "none")]
    hinting: String,

    /// Seconds allowed for reading a request body.
    #[arg(long, default_value_t = 5)]
    read_timeout_secs: u64,

    /// Seconds allowed for rendering and encoding a response.
    #[arg(long, default_value_t = 5)]
    write_timeout_secs: u64,

    /// Seconds in-flight requests may run after SIGINT/SIGTERM.
    #[arg(long, default_value_t = 2)]
    shutdown_grace_secs: u64,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Cli {
    fn service_config(&self) -> ServiceConfig {
        ServiceConfig {
            font_path: self.fontfile.clone(),
            catalog: BackgroundCatalog::stock().with_dir(&self.images_dir),
            params: RenderParams {
                dpi: self.dpi,
                size: self.size,
                spacing: self.spacing,
                hinting: Hinting::parse(&self.hinting),
            },
        }
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            listen: self.listen,
            read_timeout: Duration::from_secs(self.read_timeout_secs),
            write_timeout: Duration::from_secs(self.write_timeout_secs),
            shutdown_grace: Duration::from_secs(self.shutdown_grace_secs),
        }
    }
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let service_config = cli.service_config();
    service_config
        .validate()
        .context("invalid service configuration")?;
    tracing::info!(
        font = %service_config.font_path.display(),
        images = %service_config.catalog.dir().display(),
        backgrounds = service_config.catalog.len(),
        params = ?service_config.params,
        "starting textcard"
    );

    let service: Arc<dyn ImageService> = Arc::new(CardService::new(service_config));
    server::serve(cli.server_config(), service, server::shutdown_signal())
        .await
        .context("serve HTTP")?;

    tracing::info!("bye");
    Ok(())
}
