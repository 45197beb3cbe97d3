//! Pure choice-resolution state machine.
//!
//! Every operation takes the content bundle and the current state and returns
//! a new state; invalid interactions (wrong status, out-of-range index,
//! missing required item) return the unchanged state, recording a diagnostic
//! message where one helps the presentation layer. The only hard error is a
//! scene id missing from content: that is a content-integrity bug, not a bad
//! player interaction.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Choice, Ending, FictionContent, Scene};

/// Maximum number of items a run can carry.
pub const MAX_INVENTORY: usize = 5;

/// Hard error raised when static content is internally inconsistent.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContentError {
    /// A transition referenced a scene id the bundle does not declare.
    #[error("scene `{0}` does not exist in this content bundle")]
    UnknownScene(String),
}

/// Run status, derived from the current scene's ending tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FictionStatus {
    /// The current scene is non-terminal.
    Playing,
    /// The current scene carries a win ending.
    Win,
    /// The current scene carries a lose ending.
    Lose,
}

impl FictionStatus {
    fn from_ending(ending: Option<Ending>) -> Self {
        match ending {
            None => Self::Playing,
            Some(Ending::Win) => Self::Win,
            Some(Ending::Lose) => Self::Lose,
        }
    }
}

/// Complete run state; recreated wholesale on restart or theme change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FictionState {
    current_scene: String,
    inventory: BTreeSet<String>,
    history: Vec<String>,
    status: FictionStatus,
    last_event: Option<String>,
}

impl FictionState {
    /// Id of the scene the run is currently in.
    #[must_use]
    pub fn current_scene(&self) -> &str {
        &self.current_scene
    }

    /// Items held, capacity-bounded by [`MAX_INVENTORY`].
    #[must_use]
    pub const fn inventory(&self) -> &BTreeSet<String> {
        &self.inventory
    }

    /// Append-only sequence of visited scene ids, starting scene included.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Status derived from the current scene's ending tag.
    #[must_use]
    pub const fn status(&self) -> FictionStatus {
        self.status
    }

    /// Diagnostic message recorded by the most recent transition, if any.
    #[must_use]
    pub fn last_event(&self) -> Option<&str> {
        self.last_event.as_deref()
    }
}

/// Creates a fresh run at the bundle's declared start scene.
#[must_use]
pub fn create_initial_state(content: &FictionContent) -> FictionState {
    FictionState {
        current_scene: content.start_scene().to_owned(),
        inventory: BTreeSet::new(),
        history: vec![content.start_scene().to_owned()],
        status: FictionStatus::Playing,
        last_event: None,
    }
}

/// Looks up a scene by id, failing hard on a missing id.
pub fn scene_by_id<'a>(content: &'a FictionContent, id: &str) -> Result<&'a Scene, ContentError> {
    content
        .find_scene(id)
        .ok_or_else(|| ContentError::UnknownScene(id.to_owned()))
}

/// The scene the run is currently in.
pub fn current_scene<'a>(
    content: &'a FictionContent,
    state: &FictionState,
) -> Result<&'a Scene, ContentError> {
    scene_by_id(content, state.current_scene())
}

/// Reports whether the choice's gate, if any, is satisfied by the run's
/// inventory.
#[must_use]
pub fn is_choice_available(choice: &Choice, state: &FictionState) -> bool {
    match choice.required_item() {
        None => true,
        Some(item) => state.inventory.contains(item),
    }
}

/// Resolves the choice at `choice_index` in the run's current scene.
///
/// Returns the successor state without mutating the input. A run that is not
/// playing, or an out-of-range index, returns the state unchanged. A gated
/// choice without its required item stays in place and records a
/// `Requires <item>` message. Granted items are added below capacity with a
/// pickup message; at capacity the transition still happens but the item is
/// dropped and `Inventory full` is recorded.
pub fn make_choice(
    content: &FictionContent,
    state: &FictionState,
    choice_index: usize,
) -> Result<FictionState, ContentError> {
    if state.status != FictionStatus::Playing {
        return Ok(state.clone());
    }

    let scene = current_scene(content, state)?;
    let Some(choice) = scene.choices().get(choice_index) else {
        return Ok(state.clone());
    };

    if let Some(required) = choice.required_item() {
        if !state.inventory.contains(required) {
            let mut rejected = state.clone();
            rejected.last_event = Some(format!("Requires {required}"));
            return Ok(rejected);
        }
    }

    let mut inventory = state.inventory.clone();
    let mut last_event = None;
    if let Some(gained) = choice.item_gained() {
        if !inventory.contains(gained) {
            if inventory.len() < MAX_INVENTORY {
                let _ = inventory.insert(gained.to_owned());
                last_event = Some(format!("Picked up {gained}"));
            } else {
                last_event = Some("Inventory full".to_owned());
            }
        }
    }

    let next = scene_by_id(content, choice.next_scene())?;
    let mut history = state.history.clone();
    history.push(next.id().to_owned());

    Ok(FictionState {
        current_scene: next.id().to_owned(),
        inventory,
        history,
        status: FictionStatus::from_ending(next.ending()),
        last_event,
    })
}
