use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const APP_FOLDER_NAME: &str = "MediaTecnicaPortal";

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UiSettings {
    #[serde(default)]
    pub last_theme: Option<String>,
    #[serde(default)]
    pub window_size: Option<(f32, f32)>,
    /// Section id opened on launch; falls back to the schedule when unset
    /// or unknown.
    #[serde(default)]
    pub start_section: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    pub version: String,
    pub base_path: String,
    #[serde(default)]
    pub ui: UiSettings,
}

pub fn default_base_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()));

    if let Some(dir) = exe_dir {
        return dir.join("data");
    }

    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_FOLDER_NAME)
}

pub fn ensure_base_folders(base: &Path) -> io::Result<()> {
    let dirs = [
        base.to_path_buf(),
        base.join("config"),
        base.join("themes"),
        base.join("logs"),
    ];

    for d in dirs {
        if !d.exists() {
            fs::create_dir_all(&d)?;
        }
    }

    Ok(())
}

pub fn settings_path(base: &Path) -> PathBuf {
    base.join("config").join("settings.json")
}

pub fn load_or_init_settings(base: &Path) -> io::Result<Settings> {
    let config_path = settings_path(base);

    if config_path.exists() {
        let contents = fs::read_to_string(&config_path)?;
        let mut settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("JSON parse error: {e}")))?;

        // Ensure base_path stays in sync with the current base
        if settings.base_path != base.to_string_lossy() {
            settings.base_path = base.to_string_lossy().to_string();
        }
        return Ok(settings);
    }

    let settings = Settings {
        version: "0.1.0".to_string(),
        base_path: base.to_string_lossy().to_string(),
        ui: UiSettings::default(),
    };

    let json = serde_json::to_string_pretty(&settings)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("JSON encode error: {e}")))?;
    fs::write(&config_path, json)?;

    Ok(settings)
}

pub fn save_settings(settings: &Settings, base: &Path) -> io::Result<()> {
    let config_path = settings_path(base);
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("JSON encode error: {e}")))?;
    fs::write(&config_path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_defaults_and_reload_keeps_edits() -> io::Result<()> {
        let tmp = tempfile::tempdir()?;
        let base = tmp.path();
        ensure_base_folders(base)?;

        let mut settings = load_or_init_settings(base)?;
        assert!(settings_path(base).exists());
        assert!(settings.ui.last_theme.is_none());

        settings.ui.last_theme = Some("chalkboard_dark".to_string());
        settings.ui.start_section = Some("forum".to_string());
        save_settings(&settings, base)?;

        let reloaded = load_or_init_settings(base)?;
        assert_eq!(reloaded.ui.last_theme.as_deref(), Some("chalkboard_dark"));
        assert_eq!(reloaded.ui.start_section.as_deref(), Some("forum"));
        Ok(())
    }

    #[test]
    fn base_path_resyncs_when_the_folder_moves() -> io::Result<()> {
        let tmp = tempfile::tempdir()?;
        let base = tmp.path();
        ensure_base_folders(base)?;

        let mut settings = load_or_init_settings(base)?;
        settings.base_path = "/somewhere/else".to_string();
        save_settings(&settings, base)?;

        let reloaded = load_or_init_settings(base)?;
        assert_eq!(reloaded.base_path, base.to_string_lossy());
        Ok(())
    }
}
