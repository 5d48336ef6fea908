//! Notifications delivered by the host client.

use serde::{Deserialize, Serialize};
use tracker_core::{ContainerId, Skill, VarbitId};

/// Client connection state as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameState {
    LoginScreen,
    LoggingIn,
    /// Region load while logged in.
    Loading,
    LoggedIn,
    ConnectionLost,
    Hopping,
}

impl GameState {
    /// Returns true while a logged-in session is running.
    ///
    /// Region loads keep the session; hopping worlds ends it.
    pub fn is_session_active(self) -> bool {
        matches!(self, Self::LoggedIn | Self::Loading)
    }
}

/// A notification from the host, or a command from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// The contents of an item container changed.
    ItemContainerChanged { container: ContainerId },
    /// A skill gained experience.
    StatChanged { skill: Skill },
    /// A varbit changed value.
    VarbitChanged { varbit: VarbitId },
    /// The client connection state changed.
    GameStateChanged { state: GameState },
    /// The user asked to zero all crafted counters.
    ResetRequested,
}
