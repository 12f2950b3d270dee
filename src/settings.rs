use std::path::PathBuf;

use bevy::prelude::{App, Resource, info, warn};
use bevy_persistent::prelude::{Persistent, StorageFormat};
use serde::{Deserialize, Serialize};
use tj_movement::config::{MovementConfig, PlayerTuning};
use tj_util::constants::{DEFAULT_TURN_SENSITIVITY_LEVEL, MAX_TURN_SENSITIVITY_LEVEL, SETTINGS_DIR, SETTINGS_FILE};

#[derive(Resource, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct PlayerSettings {
    pub turn_sensitivity: u8,
    pub movement: MovementConfig,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        PlayerSettings {
            turn_sensitivity: DEFAULT_TURN_SENSITIVITY_LEVEL,
            movement: MovementConfig::default(),
        }
    }
}

impl PlayerSettings {
    pub fn tuning(&self, is_real_player: bool) -> PlayerTuning {
        if is_real_player {
            PlayerTuning::from_sensitivity_level(self.turn_sensitivity)
        } else {
            PlayerTuning::default()
        }
    }

    pub fn step_sensitivity(&mut self, up: bool) {
        self.turn_sensitivity = if up {
            (self.turn_sensitivity + 1).min(MAX_TURN_SENSITIVITY_LEVEL)
        } else {
            self.turn_sensitivity.saturating_sub(1)
        };
    }
}

pub fn settings_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SETTINGS_DIR)
        .join(SETTINGS_FILE)
}

// Without a usable file the game runs on defaults and saves nothing.
pub fn init_settings(app: &mut App) {
    let path = settings_path();

    let settings = Persistent::<PlayerSettings>::builder()
        .name("player settings")
        .format(StorageFormat::Json)
        .path(path.clone())
        .default(PlayerSettings::default())
        .build();

    match settings {
        Ok(settings) => {
            info!("loaded settings from {}", path.display());
            app.insert_resource(settings);
        }
        Err(err) => warn!("falling back to default settings, {} is unusable: {err:?}", path.display()),
    }
}
