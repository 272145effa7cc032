use std::fs;
use std::path::Path;

use anyhow::Context;
use scraper_ui_core::UiConfig;
use ui_logging::ui_info;

/// Reads a RON `UiConfig`. Missing fields keep their defaults; no path means all defaults.
pub fn load(path: Option<&Path>) -> anyhow::Result<UiConfig> {
    let Some(path) = path else {
        return Ok(UiConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    let config: UiConfig = ron::from_str(&content)
        .with_context(|| format!("parsing config file {}", path.display()))?;

    ui_info!("Loaded UI config from {:?}", path);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn no_path_gives_defaults() {
        assert_eq!(load(None).unwrap(), UiConfig::default());
    }

    #[test]
    fn partial_file_overrides_named_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui.ron");
        fs::write(&path, "(tick_interval_ms: 20, min_query_chars: 3)").unwrap();

        let config = load(Some(&path)).unwrap();

        assert_eq!(config.tick_interval_ms, 20);
        assert_eq!(config.min_query_chars, 3);
        assert_eq!(config.progress_ceiling, 95);
    }

    #[test]
    fn broken_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ui.ron");
        fs::write(&path, "(tick_interval_ms: \"fast\")").unwrap();

        let err = load(Some(&path)).unwrap_err();

        assert!(format!("{err}").contains("ui.ron"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load(Some(&dir.path().join("absent.ron"))).is_err());
    }
}
