//! Tab strip state machine
//!
//! One [`TabStrip`] handle per tab container, cloned into the tab controls.
//! The descriptor list is regenerated only when the derived child list
//! actually changes (deep equality), and the active selection must always
//! reference an existing descriptor or be `None` when there are no tabs.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::descriptor::{TabDescriptor, TabItem};
use crate::error::TabsError;
use crate::key::{Key, KeyOutcome};
use crate::Result;

#[derive(Debug, Default)]
struct TabsState {
    /// Last reconciled child snapshot; the regeneration guard
    items: Vec<TabItem>,
    descriptors: Vec<TabDescriptor>,
    active_tab_id: Option<String>,
}

impl TabsState {
    fn active_index(&self) -> Option<usize> {
        let active = self.active_tab_id.as_ref()?;
        self.descriptors
            .iter()
            .position(|descriptor| &descriptor.tab_id == active)
    }

    fn active_descriptor(&self) -> Option<&TabDescriptor> {
        self.active_index().map(|index| &self.descriptors[index])
    }
}

pub struct TabStrip {
    state: Arc<RwLock<TabsState>>,
}

impl TabStrip {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(TabsState::default())),
        }
    }

    pub fn with_children(children: &[TabItem]) -> Self {
        let strip = Self::new();
        strip.reconcile(children);
        strip
    }

    /// Reconcile against the derived child list.
    ///
    /// When the list differs from the previous snapshot every descriptor is
    /// discarded and reallocated with fresh ids. Selection survives the
    /// regeneration iff a new descriptor carries the previously active
    /// tab's name; otherwise it resets to the first descriptor (or `None`
    /// for an empty list). Returns whether a regeneration happened.
    pub fn reconcile(&self, children: &[TabItem]) -> bool {
        let mut state = self.state.write();
        if state.items == children {
            return false;
        }

        let state = &mut *state;
        let active_name = state.active_descriptor().map(|d| d.name.clone());

        state.items = children.to_vec();
        state.descriptors = children.iter().map(TabDescriptor::new).collect();
        state.active_tab_id = state
            .descriptors
            .iter()
            .find(|descriptor| Some(&descriptor.name) == active_name.as_ref())
            .or_else(|| state.descriptors.first())
            .map(|descriptor| descriptor.tab_id.clone());

        tracing::debug!(
            tabs = state.descriptors.len(),
            active = ?state.active_tab_id,
            "Regenerated tab descriptors"
        );

        true
    }

    /// Click selection. Returns the tab's name for the host's activation
    /// callback.
    pub fn select(&self, tab_id: &str) -> Result<String> {
        let mut state = self.state.write();
        let name = state
            .descriptors
            .iter()
            .find(|descriptor| descriptor.tab_id == tab_id)
            .map(|descriptor| descriptor.name.clone())
            .ok_or_else(|| TabsError::TabNotFound(tab_id.to_string()))?;

        state.active_tab_id = Some(tab_id.to_string());

        tracing::debug!(tab_id = %tab_id, name = %name, "Tab selected");

        Ok(name)
    }

    /// Keyboard handling. ArrowRight/ArrowLeft move selection with
    /// wrap-around; ArrowDown targets the active panel without changing
    /// selection. With zero tabs every key is a no-op.
    pub fn handle_key(&self, key: Key) -> KeyOutcome {
        let mut state = self.state.write();
        if state.descriptors.is_empty() {
            return KeyOutcome::Ignored;
        }

        match key {
            Key::ArrowRight => Self::step(&mut state, 1),
            Key::ArrowLeft => Self::step(&mut state, -1),
            Key::ArrowDown => match state.active_descriptor() {
                Some(descriptor) => KeyOutcome::FocusPanel {
                    panel_id: descriptor.panel_id.clone(),
                },
                None => KeyOutcome::Ignored,
            },
            Key::Other => KeyOutcome::Ignored,
        }
    }

    fn step(state: &mut TabsState, delta: isize) -> KeyOutcome {
        let len = state.descriptors.len() as isize;
        let current = state.active_index().unwrap_or(0) as isize;
        let next = (current + delta).rem_euclid(len) as usize;

        let descriptor = &state.descriptors[next];
        let tab_id = descriptor.tab_id.clone();
        let name = descriptor.name.clone();
        state.active_tab_id = Some(tab_id.clone());

        tracing::debug!(tab_id = %tab_id, name = %name, "Roving focus moved");

        KeyOutcome::FocusTab { tab_id, name }
    }

    pub fn descriptors(&self) -> Vec<TabDescriptor> {
        self.state.read().descriptors.clone()
    }

    pub fn active_tab_id(&self) -> Option<String> {
        self.state.read().active_tab_id.clone()
    }

    pub fn active(&self) -> Option<TabDescriptor> {
        self.state.read().active_descriptor().cloned()
    }

    pub fn len(&self) -> usize {
        self.state.read().descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().descriptors.is_empty()
    }
}

impl Clone for TabStrip {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}
