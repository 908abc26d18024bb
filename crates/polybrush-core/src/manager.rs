//! Owner of the active interaction.

use crate::features::FeatureSink;
use crate::input::InputEvent;
use crate::interaction::{BrushError, SketchInteraction};

/// Holds at most one active interaction per host context.
///
/// Switching modes detaches the old interaction (aborting any in-progress
/// sketch) and attaches the new one; there are no ambient globals. The host
/// must serialize managers that target the same feature collection.
#[derive(Debug)]
pub struct InteractionManager<K: FeatureSink> {
    active: Option<SketchInteraction<K>>,
}

impl<K: FeatureSink> Default for InteractionManager<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: FeatureSink> InteractionManager<K> {
    /// Create a manager with no active interaction.
    pub fn new() -> Self {
        Self { active: None }
    }

    /// Attach an interaction, returning the previously active one.
    ///
    /// A previously active interaction is aborted before it is handed back:
    /// its in-progress sketch, if any, is discarded uncommitted.
    pub fn attach(&mut self, interaction: SketchInteraction<K>) -> Option<SketchInteraction<K>> {
        let previous = self.detach();
        self.active = Some(interaction);
        previous
    }

    /// Detach and return the active interaction, aborting it first.
    pub fn detach(&mut self) -> Option<SketchInteraction<K>> {
        let mut interaction = self.active.take()?;
        interaction.abort();
        Some(interaction)
    }

    /// True if an interaction is attached.
    pub fn is_attached(&self) -> bool {
        self.active.is_some()
    }

    /// The active interaction, if any.
    pub fn active(&self) -> Option<&SketchInteraction<K>> {
        self.active.as_ref()
    }

    /// Mutable access to the active interaction.
    pub fn active_mut(&mut self) -> Option<&mut SketchInteraction<K>> {
        self.active.as_mut()
    }

    /// Forward an event to the active interaction.
    ///
    /// Returns `Ok(false)` when nothing is attached.
    pub fn handle_event(&mut self, event: &InputEvent) -> Result<bool, BrushError> {
        match self.active.as_mut() {
            Some(interaction) => interaction.handle_event(event),
            None => Ok(false),
        }
    }

    /// Forward a view-resolution change to the active interaction.
    pub fn resolution_changed(&mut self, resolution: f64) {
        if let Some(interaction) = self.active.as_mut() {
            interaction.resolution_changed(resolution);
        }
    }
}
