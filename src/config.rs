use std::{env, path::PathBuf};

/// Roughly what browsers allow per origin in local storage.
const DEFAULT_STORAGE_QUOTA: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub storage_dir: PathBuf,
    /// `None` disables the quota.
    pub storage_quota: Option<usize>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let storage_dir = env::var("STORAGE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".sfh-storage"));
        let storage_quota = match env::var("STORAGE_QUOTA_BYTES") {
            Ok(raw) => parse_quota(&raw)?,
            Err(_) => Some(DEFAULT_STORAGE_QUOTA),
        };
        Ok(Self {
            host,
            port,
            storage_dir,
            storage_quota,
        })
    }
}

fn parse_quota(raw: &str) -> anyhow::Result<Option<usize>> {
    let bytes: usize = raw
        .trim()
        .parse()
        .map_err(|_| anyhow::anyhow!("STORAGE_QUOTA_BYTES must be a byte count, got {raw:?}"))?;
    Ok((bytes > 0).then_some(bytes))
}
