mod search;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use camdb_core::DEFAULT_RESOURCE_NAME;
use camdb_store::{
    BundledSource, CacheSettings, CachedStore, CameraService, CameraSource, FileSource,
};

#[derive(Debug, Parser)]
#[command(name = "camdb-cli")]
#[command(about = "Search traffic cameras by name")]
struct Cli {
    /// Case-insensitive substring to look for in camera names.
    #[arg(short, long)]
    name: Option<String>,

    /// Read cameras from this `;`-delimited file instead of the bundled data.
    #[arg(long, env = "CAMDB_CSV_PATH")]
    file: Option<PathBuf>,

    /// Bundled resource to read when no file is given.
    #[arg(long, env = "CAMDB_RESOURCE_NAME", default_value = DEFAULT_RESOURCE_NAME)]
    resource: String,

    /// `key=value` arguments; only `name=<term>` is recognised.
    #[arg(value_name = "KEY=VALUE")]
    pairs: Vec<String>,
}

impl Cli {
    /// The search term from `--name` or a `name=` pair, ignoring blanks.
    fn search_term(&self) -> Option<&str> {
        let from_pairs = || {
            self.pairs.iter().find_map(|pair| {
                let (key, value) = pair.split_once('=')?;
                key.trim().eq_ignore_ascii_case("name").then_some(value)
            })
        };

        self.name
            .as_deref()
            .or_else(from_pairs)
            .filter(|term| !term.trim().is_empty())
    }

    fn source(&self) -> CameraSource {
        match self.file.as_ref().filter(|p| !p.as_os_str().is_empty()) {
            Some(path) => CameraSource::File(FileSource::new(path)),
            None => CameraSource::Bundled(BundledSource::new(self.resource.clone())),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let log_level = std::env::var("CAMDB_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    for pair in &cli.pairs {
        if !pair.split_once('=').is_some_and(|(k, _)| k.trim().eq_ignore_ascii_case("name")) {
            tracing::warn!(argument = %pair, "ignoring unrecognised argument");
        }
    }

    let usage = Cli::command().render_help().to_string();
    let service = CameraService::new(CachedStore::new(cli.source(), CacheSettings::disabled()));
    let code = search::run(
        &service,
        cli.search_term(),
        &usage,
        &mut std::io::stdout(),
        &mut std::io::stderr(),
    )
    .await;

    ExitCode::from(code)
}
