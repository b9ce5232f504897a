use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use mend_core::models::pain_scale::PainScale;

/// Version stamped on every saved config. Version 1 introduced `pain_scale`.
pub const CURRENT_VERSION: u32 = 1;

const APP_DIR: &str = "mend";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MendConfig {
    /// 0 when the file predates versioning.
    #[serde(default)]
    pub config_version: u32,
    /// Root of the directory-backed document store.
    pub data_dir: PathBuf,
    /// Scale used to validate submitted pain levels. Added in v1.
    #[serde(default)]
    pub pain_scale: PainScale,
    /// Name recorded as the actor on audit events.
    #[serde(default = "default_actor")]
    pub actor: String,
    pub created_at: jiff::Timestamp,
}

impl MendConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_dir,
            pain_scale: PainScale::default(),
            actor: default_actor(),
            created_at: jiff::Timestamp::now(),
        }
    }
}

fn default_actor() -> String {
    std::env::var("USER").unwrap_or_else(|_| "cli".to_string())
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(APP_DIR))
}

/// `<config dir>/mend/config.json`.
pub fn default_config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// `<data dir>/mend`, falling back to the working directory.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from(".mend"))
}

/// Load the config at `path`, or defaults if no file exists yet.
pub fn load_or_default(path: &Path) -> eyre::Result<MendConfig> {
    if path.exists() {
        load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(MendConfig::new(default_data_dir()))
    }
}

pub fn load_config(path: &Path) -> eyre::Result<MendConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("cannot read config {}: {e}", path.display()))?;

    let raw: serde_json::Value = serde_json::from_str(&contents)?;
    let version = stored_version(&raw)?;
    Ok(serde_json::from_value(migrate(raw, version)?)?)
}

/// `config_version` as written on disk; files from before versioning have none.
fn stored_version(raw: &serde_json::Value) -> eyre::Result<u32> {
    match raw.get("config_version").and_then(serde_json::Value::as_u64) {
        None => Ok(0),
        Some(v) => u32::try_from(v).map_err(|_| eyre::eyre!("config_version {v} is out of range")),
    }
}

/// Bring a raw config document written at `from_version` up to
/// [`CURRENT_VERSION`]. Documents from a newer mend are refused.
pub fn migrate(mut raw: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} was written by a newer mend \
             (this one understands up to {CURRENT_VERSION}); upgrade mend to read it"
        ));
    }

    let fields = raw
        .as_object_mut()
        .ok_or_else(|| eyre::eyre!("config must be a JSON object"))?;

    if from_version == 0 {
        // Unversioned stores only ever held 0-10 pain levels.
        fields
            .entry("pain_scale")
            .or_insert_with(|| PainScale::ZeroToTen.as_str().into());
        tracing::info!(pain_scale = %PainScale::ZeroToTen, "config upgraded to version 1");
    }

    fields.insert("config_version".to_string(), CURRENT_VERSION.into());
    Ok(raw)
}

/// Persist `config` with owner-only permissions. The file is stamped with
/// [`CURRENT_VERSION`] and only replaces the old one once fully written.
pub fn save_config(path: &Path, config: &MendConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent directory", path.display()))?;
    std::fs::create_dir_all(dir)?;

    let body = serde_json::to_string_pretty(&MendConfig {
        config_version: CURRENT_VERSION,
        ..config.clone()
    })?;

    let staging = path.with_extension("json.tmp");
    std::fs::write(&staging, body)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&staging, std::fs::Permissions::from_mode(0o600))?;
    }
    std::fs::rename(&staging, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
