//! Content domain: data-driven tuning loaded from RON files.

mod data;
mod loader;
mod validation;

pub use data::{CatConfig, CatTuning, GameOptions};
pub use loader::{ConfigLoadError, load_cat_config, parse_cat_config};
pub use validation::{ConfigValidationError, validate_config};

use bevy::prelude::*;
use std::path::Path;

pub const CAT_CONFIG_PATH: &str = "assets/data/cat.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CatConfig>()
            .add_systems(PreStartup, load_config_at_startup);
    }
}

/// Load the cat config, falling back to built-in defaults if the file is
/// missing, malformed or fails validation.
fn load_config_at_startup(mut config: ResMut<CatConfig>) {
    let loaded = match load_cat_config(Path::new(CAT_CONFIG_PATH)) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}; using default cat tuning", e);
            return;
        }
    };

    let errors = validate_config(&loaded);
    if !errors.is_empty() {
        for e in &errors {
            error!("Invalid cat config: {}", e);
        }
        warn!(
            "{} invalid value(s) in {}; using default cat tuning",
            errors.len(),
            CAT_CONFIG_PATH
        );
        return;
    }

    info!(
        "Loaded cat config: speed={}, jump_height={}, gravity={}, speed_rate={}, hunger_rate={}",
        loaded.tuning.speed,
        loaded.tuning.jump_height,
        loaded.tuning.gravity,
        loaded.options.speed_rate,
        loaded.options.hunger_rate
    );
    *config = loaded;
}
