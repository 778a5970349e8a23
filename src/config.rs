use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use std::{env, str::FromStr};

pub const DEFAULT_BUCKET: &str = "words-submission-bucket";

/// Which object store backs the service.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    S3,
    Memory,
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "s3" => Ok(Backend::S3),
            "memory" => Ok(Backend::Memory),
            other => bail!("unknown backend `{}` (expected `s3` or `memory`)", other),
        }
    }
}

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub bucket: String,
    pub backend: Backend,
    pub endpoint_url: Option<String>,
    pub static_dir: String,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Stores submitted words in an object-storage bucket")]
pub struct Args {
    /// Host to bind to (overrides WORD_BUCKET_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides WORD_BUCKET_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Bucket holding the words (overrides WORD_BUCKET_BUCKET)
    #[arg(long)]
    pub bucket: Option<String>,

    /// Object store backend (overrides WORD_BUCKET_BACKEND)
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    /// Custom S3 endpoint, e.g. LocalStack or MinIO (overrides WORD_BUCKET_ENDPOINT_URL)
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Directory served under /static (overrides WORD_BUCKET_STATIC_DIR)
    #[arg(long)]
    pub static_dir: Option<String>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        Self::merge(Args::parse(), |name: &str| env::var(name))
    }

    /// CLI values win over environment values, which win over defaults.
    fn merge<F>(args: Args, var: F) -> Result<Self>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        let lookup = |name: &str| -> Result<Option<String>> {
            match var(name) {
                Ok(value) => Ok(Some(value)),
                Err(env::VarError::NotPresent) => Ok(None),
                Err(err) => Err(err).with_context(|| format!("reading {}", name)),
            }
        };

        // --- Environment fallback ---
        let env_host = lookup("WORD_BUCKET_HOST")?.unwrap_or_else(|| "0.0.0.0".into());
        let env_port = match lookup("WORD_BUCKET_PORT")? {
            Some(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing WORD_BUCKET_PORT value `{}`", value))?,
            None => 5000,
        };
        let env_bucket = lookup("WORD_BUCKET_BUCKET")?.unwrap_or_else(|| DEFAULT_BUCKET.into());
        let env_backend = match lookup("WORD_BUCKET_BACKEND")? {
            Some(value) => value
                .parse::<Backend>()
                .context("parsing WORD_BUCKET_BACKEND")?,
            None => Backend::S3,
        };
        let env_endpoint = lookup("WORD_BUCKET_ENDPOINT_URL")?.filter(|url| !url.is_empty());
        let env_static = lookup("WORD_BUCKET_STATIC_DIR")?.unwrap_or_else(|| "./static".into());

        // --- Merge ---
        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            bucket: args.bucket.unwrap_or(env_bucket),
            backend: args.backend.unwrap_or(env_backend),
            endpoint_url: args.endpoint_url.or(env_endpoint),
            static_dir: args.static_dir.unwrap_or(env_static),
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
