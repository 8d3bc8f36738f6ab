//! Core domain: which input map is live.

/// Movement drives the cat; Menu only listens for pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Movement,
    Menu,
}
