use anyhow::{Context, Result};
use std::path::PathBuf;
use structopt::StructOpt;

pub const STORAGE_PATH: &str = "~/.config/sparks/storage.json";

/// Firebase project settings. Only the API key and project id are needed to
/// reach Firestore; the rest are carried so one `.env` serves every client.
#[derive(Debug, Clone, Default, StructOpt)]
pub struct FirebaseConfig {
    #[structopt(long, env = "FIREBASE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    #[structopt(long, env = "FIREBASE_AUTH_DOMAIN")]
    pub auth_domain: Option<String>,
    #[structopt(long, env = "FIREBASE_PROJECT_ID")]
    pub project_id: Option<String>,
    #[structopt(long, env = "FIREBASE_STORAGE_BUCKET")]
    pub storage_bucket: Option<String>,
    #[structopt(long, env = "FIREBASE_MESSAGING_SENDER_ID")]
    pub messaging_sender_id: Option<String>,
    #[structopt(long, env = "FIREBASE_APP_ID")]
    pub app_id: Option<String>,
    #[structopt(long, env = "FIREBASE_MEASUREMENT_ID")]
    pub measurement_id: Option<String>,
}

#[derive(Debug, Clone, Default, StructOpt)]
pub struct UnsplashConfig {
    #[structopt(long = "unsplash-access-key", env = "UNSPLASH_ACCESS_KEY", hide_env_values = true)]
    pub access_key: Option<String>,
}

pub fn require<'a>(value: &'a Option<String>, name: &str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .with_context(|| format!("{} is not set", name))
}

pub fn expand_path(path: &str) -> Result<PathBuf> {
    let expanded = shellexpand::full(path)
        .with_context(|| format!("Path {} is invalid", path))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// The `--storage` override if given, otherwise the default file; both expanded
pub fn storage_path(overridden: Option<&str>) -> Result<PathBuf> {
    expand_path(overridden.unwrap_or(STORAGE_PATH))
}
