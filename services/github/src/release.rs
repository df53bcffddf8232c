use serde::Serialize;

/// Tag advertised by the mock's single published release.
pub const RELEASE_TAG: &str = "v2024.1.1";

/// Asset file-name prefix: the name of the binary the installer under test
/// downloads.
pub const PACKAGE_PREFIX: &str = "km";

/// The eight naming conventions installers are known to match on: Rust
/// target triples plus the legacy `<os>-<arch>` aliases.
pub const ASSET_SUFFIXES: [&str; 8] = [
    "x86_64-unknown-linux-gnu",
    "aarch64-unknown-linux-gnu",
    "x86_64-apple-darwin",
    "aarch64-apple-darwin",
    "linux-amd64",
    "linux-arm64",
    "darwin-amd64",
    "darwin-arm64",
];

/// One downloadable artifact of a release, serialized with the field names
/// the installer expects from the real releases API.
#[derive(Debug, Clone, Serialize)]
pub struct AssetDescriptor {
    pub name: String,
    pub browser_download_url: String,
}

/// The fixed in-memory record behind the releases-latest endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseDescriptor {
    pub tag_name: String,
    pub name: String,
    pub assets: Vec<AssetDescriptor>,
}

impl ReleaseDescriptor {
    /// Build the latest-release record with every download URL pointing
    /// back at this server's own host and port.
    pub fn latest(host: &str, port: u16) -> Self {
        let assets = ASSET_SUFFIXES
            .iter()
            .map(|suffix| {
                let name = format!("{PACKAGE_PREFIX}-{suffix}.tar.gz");
                let browser_download_url =
                    format!("http://{host}:{port}/releases/download/{RELEASE_TAG}/{name}");
                AssetDescriptor {
                    name,
                    browser_download_url,
                }
            })
            .collect();
        Self {
            tag_name: RELEASE_TAG.to_owned(),
            name: format!("Release {RELEASE_TAG}"),
            assets,
        }
    }
}
