//! Sanity checks for loaded tuning values.

use super::data::{CatConfig, CatTuning, GameOptions};

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct ConfigValidationError {
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' is {} but must be {}",
            self.field, self.value, self.expected
        )
    }
}

/// Push an error when `ok` is false. NaN fails every comparison, so it is rejected too.
fn require(
    errors: &mut Vec<ConfigValidationError>,
    field: &'static str,
    value: f32,
    expected: &'static str,
    ok: bool,
) {
    if !ok {
        errors.push(ConfigValidationError {
            field,
            value,
            expected,
        });
    }
}

/// Validate the whole config. Returns an empty list when everything is usable.
pub fn validate_config(config: &CatConfig) -> Vec<ConfigValidationError> {
    let mut errors = validate_tuning(&config.tuning);
    errors.extend(validate_options(&config.options));
    errors
}

pub fn validate_tuning(tuning: &CatTuning) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();

    require(&mut errors, "speed", tuning.speed, ">= 0", tuning.speed >= 0.0);
    require(&mut errors, "jump_height", tuning.jump_height, "> 0", tuning.jump_height > 0.0);
    // The jump impulse takes sqrt(h * g * -2), so gravity has to point down
    require(&mut errors, "gravity", tuning.gravity, "< 0", tuning.gravity < 0.0);
    require(
        &mut errors,
        "min_fall_speed",
        tuning.min_fall_speed,
        "< 0",
        tuning.min_fall_speed < 0.0,
    );
    require(
        &mut errors,
        "max_rise_speed",
        tuning.max_rise_speed,
        "> 0",
        tuning.max_rise_speed > 0.0,
    );
    require(&mut errors, "probe_radius", tuning.probe_radius, "> 0", tuning.probe_radius > 0.0);
    require(&mut errors, "wet_duration", tuning.wet_duration, ">= 0", tuning.wet_duration >= 0.0);
    require(
        &mut errors,
        "respawn_grace",
        tuning.respawn_grace,
        ">= 0",
        tuning.respawn_grace >= 0.0,
    );
    require(&mut errors, "respawn_speed", tuning.respawn_speed, "> 0", tuning.respawn_speed > 0.0);
    require(
        &mut errors,
        "active_hunger_rate",
        tuning.active_hunger_rate,
        ">= 0",
        tuning.active_hunger_rate >= 0.0,
    );
    require(
        &mut errors,
        "resting_hunger_rate",
        tuning.resting_hunger_rate,
        ">= 0",
        tuning.resting_hunger_rate >= 0.0,
    );

    errors
}

pub fn validate_options(options: &GameOptions) -> Vec<ConfigValidationError> {
    let mut errors = Vec::new();
    require(&mut errors, "speed_rate", options.speed_rate, ">= 0", options.speed_rate >= 0.0);
    require(&mut errors, "hunger_rate", options.hunger_rate, ">= 0", options.hunger_rate >= 0.0);
    errors
}
