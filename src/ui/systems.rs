// src/ui/systems.rs
use bevy::prelude::*;

use crate::grid::events::GridOperationFeedback;
use crate::ui::UiFeedbackState;

/// Keeps the latest feedback message; an error in the same frame wins over successes.
pub fn handle_ui_feedback(
    mut feedback_events: EventReader<GridOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut latest: Option<&GridOperationFeedback> = None;
    for event in feedback_events.read() {
        if latest.map_or(true, |current| event.is_error || !current.is_error) {
            latest = Some(event);
        }
    }

    if let Some(event) = latest {
        ui_feedback_state.last_message = event.message.clone();
        ui_feedback_state.is_error = event.is_error;
        if event.is_error {
            warn!("UI Feedback (Error): {}", event.message);
        } else {
            info!("UI Feedback: {}", event.message);
        }
    }
}
