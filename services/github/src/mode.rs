use clap::ValueEnum;

/// Which class of success or failure behavior the server exhibits.
/// Selected once at startup and immutable for the server's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub enum SimulationMode {
    /// Serve the canned release metadata and real files from the data dir.
    Normal,
    /// Hold every request open past any reasonable client timeout.
    Timeout,
    /// 403 with a rate-limit message on every path.
    RateLimit,
    /// 500 on every path.
    ServerError,
    /// 200 on the releases endpoint with a body no JSON parser accepts.
    MalformedJson,
    /// 200 on download paths with bytes that are not a valid archive.
    CorruptedBinary,
    /// 404 on download paths even when the file exists on disk.
    MissingBinary,
}

impl SimulationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Timeout => "timeout",
            Self::RateLimit => "rate_limit",
            Self::ServerError => "server_error",
            Self::MalformedJson => "malformed_json",
            Self::CorruptedBinary => "corrupted_binary",
            Self::MissingBinary => "missing_binary",
        }
    }
}

impl std::fmt::Display for SimulationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
