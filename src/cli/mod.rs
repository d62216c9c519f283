use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
#[command(version, about = "Backend of a landmark location-guessing game.")]
pub struct Args {
    #[arg(long, env = "LISTEN_ADDRESS")]
    #[arg(default_value = "0.0.0.0:5000")]
    pub listen_address: SocketAddr,
    #[arg(long, env = "JWT_SIGNING_KEY")]
    pub jwt_signing_key: String,
    /// NDJSON file with one `{"name", "latitude", "longitude"}` object per line. The built-in
    /// landmark catalog is used when omitted.
    #[arg(long, env = "LOCATIONS")]
    pub locations: Option<PathBuf>,
    /// Origin allowed by the CORS policy; `*` allows any origin.
    #[arg(long = "allowed-origin", env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
    /// Quickwit instance to ship structured request and scoring logs to.
    #[arg(long, env = "QUICKWIT_URL")]
    pub quickwit_url: Option<Url>,
    #[arg(long, env = "LOGGING_BATCH_SIZE")]
    #[arg(default_value_t = 100)]
    pub logging_batch_size: usize,
}
