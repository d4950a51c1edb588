use std::path::{Path, PathBuf};

use revcycle_core::models::provider::ProviderInfo;
use revcycle_core::settings::AnalysisSettings;
use revcycle_export::styles::LetterStyles;
use serde::{Deserialize, Serialize};

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevcycleConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    #[serde(default)]
    pub analysis: AnalysisSettings,
    /// Sender block on appeal letters.
    #[serde(default)]
    pub provider: ProviderInfo,
    /// Tera template replacing the built-in appeal letter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appeal_template_path: Option<PathBuf>,
    /// Typography for DOCX letters.
    #[serde(default)]
    pub letter_styles: LetterStyles,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    /// Start with the sample datasets loaded instead of empty lists.
    #[serde(default)]
    pub load_demo_on_start: bool,
}

impl Default for RevcycleConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            bind_addr: default_bind_addr(),
            analysis: AnalysisSettings::default(),
            provider: ProviderInfo::default(),
            appeal_template_path: None,
            letter_styles: LetterStyles::default(),
            max_upload_bytes: default_max_upload_bytes(),
            load_demo_on_start: false,
        }
    }
}

fn default_bind_addr() -> String {
    DEFAULT_BIND_ADDR.to_string()
}

fn default_max_upload_bytes() -> usize {
    DEFAULT_MAX_UPLOAD_BYTES
}

/// `$REVCYCLE_CONFIG`, or `config.json` under the platform config directory.
pub fn config_path() -> eyre::Result<PathBuf> {
    if let Ok(path) = std::env::var("REVCYCLE_CONFIG") {
        return Ok(PathBuf::from(path));
    }
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("revcycle").join("config.json"))
}

/// Load the config at `path`. A missing file yields the defaults.
pub fn load_config(path: &Path) -> eyre::Result<RevcycleConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "no config file, using defaults");
        return Ok(RevcycleConfig::default());
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: RevcycleConfig = serde_json::from_value(migrated)?;
    config
        .analysis
        .validate()
        .map_err(|e| eyre::eyre!("config at {}: {e}", path.display()))?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update revcycle."
        ));
    }

    // v0 → v1: top-level `underpayment_threshold` moved into
    // `analysis.underpayment_threshold_pct`.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        if let Some(threshold) = obj.remove("underpayment_threshold") {
            let analysis = obj
                .entry("analysis")
                .or_insert_with(|| serde_json::json!({}));
            let analysis = analysis
                .as_object_mut()
                .ok_or_else(|| eyre::eyre!("config `analysis` is not a JSON object"))?;
            analysis
                .entry("underpayment_threshold_pct")
                .or_insert(threshold);
        }
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (moved underpayment_threshold)");
    }

    // Future migrations go here:
    // if from_version < 2 { ... }

    Ok(json)
}

pub fn save_config(config: &RevcycleConfig, path: &Path) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

/// Environment overrides applied on top of the file.
pub fn apply_env_overrides(config: &mut RevcycleConfig) {
    if let Ok(bind) = std::env::var("REVCYCLE_BIND") {
        config.bind_addr = bind;
    }
}

/// Read the configured appeal template, if any.
pub fn load_appeal_template(config: &RevcycleConfig) -> eyre::Result<Option<String>> {
    let Some(path) = &config.appeal_template_path else {
        return Ok(None);
    };
    let template = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read appeal template at {}: {e}", path.display()))?;
    Ok(Some(template))
}
