pub mod scene;
pub mod settings;

use std::collections::HashMap;

pub use scene::SceneState;
pub use settings::AppSettings;

/// Combined application state
pub struct AppState {
    pub scene: SceneState,
    pub settings: AppSettings,
    /// Mesh build errors (object id → message), refreshed by the viewport
    pub build_errors: HashMap<String, String>,
    /// World position of the current surface hit, written by the viewport
    /// each frame for the status bar readout
    pub hover_hit: Option<[f32; 3]>,
    /// Show settings window
    pub show_settings_window: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            scene: SceneState::default(),
            settings: AppSettings::load(),
            build_errors: HashMap::new(),
            hover_hit: None,
            show_settings_window: false,
        }
    }
}
