use crate::models::layout::ScoreboardLayout;
use std::fs;
use std::path::PathBuf;

/// Loads and persists scoreboard layout calibration.
///
/// The offset table is configuration, not code: it lives as JSON under the
/// platform config directory, and a missing file falls back to the built-in
/// 1920-wide defaults.
pub struct LayoutManager {
    config_dir: PathBuf,
    layout_path: PathBuf,
}

impl LayoutManager {
    /// Create a new LayoutManager instance
    ///
    /// This will create the config directory if it doesn't exist.
    /// Returns an error if directory creation fails.
    pub fn new() -> Result<Self, String> {
        // Get platform-specific config directory
        let config_dir = dirs::config_dir()
            .ok_or("Failed to determine config directory")?
            .join("match-scanner");

        fs::create_dir_all(&config_dir)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;

        let layout_path = config_dir.join("layout.json");

        Ok(Self {
            config_dir,
            layout_path,
        })
    }

    /// Save layout calibration to disk
    pub fn save(&self, layout: &ScoreboardLayout) -> Result<(), String> {
        fs::create_dir_all(&self.config_dir)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;

        // Pretty print for hand-editing during calibration
        let json = serde_json::to_string_pretty(layout)
            .map_err(|e| format!("Failed to serialize layout: {}", e))?;

        fs::write(&self.layout_path, json)
            .map_err(|e| format!("Failed to write layout file: {}", e))?;

        Ok(())
    }

    /// Load layout calibration from disk
    ///
    /// If the layout file doesn't exist, returns the default calibration
    pub fn load(&self) -> Result<ScoreboardLayout, String> {
        if !self.layout_exists() {
            return Ok(ScoreboardLayout::default());
        }

        let content = fs::read_to_string(&self.layout_path)
            .map_err(|e| format!("Failed to read layout file: {}", e))?;

        let layout: ScoreboardLayout = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse layout file: {}", e))?;

        Ok(layout)
    }

    /// Get the layout file path
    pub fn layout_file_path(&self) -> &PathBuf {
        &self.layout_path
    }

    /// Check if a layout file exists
    pub fn layout_exists(&self) -> bool {
        self.layout_path.exists()
    }
}
