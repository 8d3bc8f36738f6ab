//! Core domain: overlay visibility and input routing.

use bevy::prelude::*;

use crate::cat::MenuSink;
use crate::core::state::InputMode;

/// Pause and win overlay flags plus the active input map. UI systems mirror
/// these into node visibility.
#[derive(Resource, Debug, Default)]
pub struct MenuOverlays {
    pub pause_visible: bool,
    pub win_visible: bool,
    pub input_mode: InputMode,
}

impl MenuOverlays {
    pub fn accepts_movement(&self) -> bool {
        self.input_mode == InputMode::Movement
    }
}

impl MenuSink for MenuOverlays {
    fn pause_overlay_visible(&self) -> bool {
        self.pause_visible
    }

    fn set_pause_overlay(&mut self, visible: bool) {
        self.pause_visible = visible;
    }

    fn set_win_overlay(&mut self, visible: bool) {
        self.win_visible = visible;
    }

    fn set_input_mode(&mut self, mode: InputMode) {
        if self.input_mode != mode {
            debug!("Input mode {:?} -> {:?}", self.input_mode, mode);
        }
        self.input_mode = mode;
    }
}
