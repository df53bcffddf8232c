use std::ffi::OsString;
use std::path::PathBuf;

/// Mock server configuration loaded from environment variables. The listen
/// port and simulation mode come from the CLI instead, see `main.rs`.
#[derive(Debug)]
pub struct MockConfig {
    /// Hostname advertised in `browser_download_url` values (default
    /// "localhost"). Env var: `MOCK_SERVER_HOST`.
    pub host: String,
    /// Directory scanned for binary payloads on download requests (default
    /// "/app/data"). Env var: `DATA_DIR`.
    pub data_dir: PathBuf,
}

impl MockConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("MOCK_SERVER_HOST").ok(),
            std::env::var_os("DATA_DIR"),
        )
    }

    fn from_vars(host: Option<String>, data_dir: Option<OsString>) -> Self {
        Self {
            host: host.unwrap_or_else(|| "localhost".to_owned()),
            data_dir: data_dir
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/app/data")),
        }
    }
}
