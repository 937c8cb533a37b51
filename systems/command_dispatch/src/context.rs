use fell_desert_core::SquaddieRef;

/// Kind of input the player is providing.
///
/// Only [`InteractionPhase::Browsing`] is produced by the dispatcher today.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InteractionPhase {
    /// Free exploration of the map.
    #[default]
    Browsing,
    /// Choosing an action for the acting squaddie.
    SelectingAction,
    /// Choosing a target for the chosen action.
    SelectingTarget,
    /// Confirming the chosen action and target.
    ConfirmingAction,
    /// Reviewing the outcome of an action.
    ViewingResults,
}

/// Interaction state carried by the caller between dispatches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandContext {
    /// Squaddie picked by the last coordinate inspection.
    pub selected_squaddie: Option<SquaddieRef>,
    /// Current interaction phase.
    pub interaction_phase: InteractionPhase,
    /// Squaddie performing an action, if any.
    pub acting_squaddie: Option<SquaddieRef>,
}

impl CommandContext {
    /// Creates a browsing context with the provided selection.
    #[must_use]
    pub fn browsing(selected_squaddie: Option<SquaddieRef>) -> Self {
        Self {
            selected_squaddie,
            interaction_phase: InteractionPhase::Browsing,
            acting_squaddie: None,
        }
    }
}
