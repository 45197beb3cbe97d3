//! Scene-graph content types for the branching fiction engine.

use serde::{Deserialize, Serialize};
use pixel_arcade_core::ThemeId;

/// Terminal outcome a scene may carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ending {
    /// Reaching the scene wins the story.
    Win,
    /// Reaching the scene loses the story.
    Lose,
}

/// Labeled, optionally gated, optionally item-granting edge between scenes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    label: String,
    next_scene: String,
    required_item: Option<String>,
    item_gained: Option<String>,
}

impl Choice {
    /// Creates an ungated choice leading to `next_scene`.
    #[must_use]
    pub fn new(label: &str, next_scene: &str) -> Self {
        Self {
            label: label.to_owned(),
            next_scene: next_scene.to_owned(),
            required_item: None,
            item_gained: None,
        }
    }

    /// Gates the choice behind possession of `item`.
    #[must_use]
    pub fn requires(mut self, item: &str) -> Self {
        self.required_item = Some(item.to_owned());
        self
    }

    /// Grants `item` when the choice is taken.
    #[must_use]
    pub fn grants(mut self, item: &str) -> Self {
        self.item_gained = Some(item.to_owned());
        self
    }

    /// Text shown for the choice.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Scene the choice leads to.
    #[must_use]
    pub fn next_scene(&self) -> &str {
        &self.next_scene
    }

    /// Item that must be held before the choice can be taken.
    #[must_use]
    pub fn required_item(&self) -> Option<&str> {
        self.required_item.as_deref()
    }

    /// Item picked up by taking the choice.
    #[must_use]
    pub fn item_gained(&self) -> Option<&str> {
        self.item_gained.as_deref()
    }
}

/// One node of the scene graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    id: String,
    text: String,
    choices: Vec<Choice>,
    ending: Option<Ending>,
}

impl Scene {
    /// Creates a non-terminal scene with the provided choices.
    #[must_use]
    pub fn new(id: &str, text: &str, choices: Vec<Choice>) -> Self {
        Self {
            id: id.to_owned(),
            text: text.to_owned(),
            choices,
            ending: None,
        }
    }

    /// Creates a terminal scene carrying an ending and no choices.
    #[must_use]
    pub fn terminal(id: &str, text: &str, ending: Ending) -> Self {
        Self {
            id: id.to_owned(),
            text: text.to_owned(),
            choices: Vec::new(),
            ending: Some(ending),
        }
    }

    /// Stable identifier of the scene within its bundle.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Narrative text shown for the scene.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Outgoing choices in display order; empty for terminal scenes.
    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Terminal tag, if any.
    #[must_use]
    pub const fn ending(&self) -> Option<Ending> {
        self.ending
    }
}

/// Immutable fiction content bundle for one theme.
///
/// Scenes form a directed, possibly cyclic graph keyed by id; the bundle is
/// an arena looked up by id rather than a pointer graph, which keeps
/// traversal and validation simple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FictionContent {
    theme: ThemeId,
    title: String,
    intro: String,
    start_scene: String,
    scenes: Vec<Scene>,
}

impl FictionContent {
    /// Creates a bundle from explicit scenes.
    #[must_use]
    pub fn new(theme: ThemeId, title: &str, intro: &str, start_scene: &str, scenes: Vec<Scene>) -> Self {
        Self {
            theme,
            title: title.to_owned(),
            intro: intro.to_owned(),
            start_scene: start_scene.to_owned(),
            scenes,
        }
    }

    /// Theme the bundle belongs to.
    #[must_use]
    pub const fn theme(&self) -> ThemeId {
        self.theme
    }

    /// Display title of the story.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Introductory blurb shown before the first scene.
    #[must_use]
    pub fn intro(&self) -> &str {
        &self.intro
    }

    /// Id of the scene every run starts in.
    #[must_use]
    pub fn start_scene(&self) -> &str {
        &self.start_scene
    }

    /// Every scene in the bundle.
    #[must_use]
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// Looks up a scene by id without error context.
    ///
    /// Engine operations use [`crate::scene_by_id`] instead so a missing id
    /// surfaces as a content-integrity error.
    #[must_use]
    pub fn find_scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.iter().find(|scene| scene.id() == id)
    }
}
