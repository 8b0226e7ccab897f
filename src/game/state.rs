//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Cards remain in the deck; another round can be played.
    Running,
    /// The deck is exhausted and the outcome is fixed.
    Finished,
}
