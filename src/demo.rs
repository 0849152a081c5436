//! Interactivity Demo
//!
//! State behind the small click-through widgets on the marketing pages:
//! toggleable filter chips, a time-slot picker and a fake submit button
//! that flips to "Saved ✓" for a moment.

use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Duration;

/// Label shown on a submit button right after a fake submit
pub const SAVED_LABEL: &str = "Saved ✓";

/// How long the saved label stays before the button reverts
pub const REVERT_AFTER: Duration = Duration::from_millis(1400);

/// Independently toggleable filter chips
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChipSet {
    chips: Vec<String>,
    active: BTreeSet<usize>,
}

impl ChipSet {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            chips: labels.into_iter().map(Into::into).collect(),
            active: BTreeSet::new(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.chips
    }

    /// Flip a chip; returns its new state, or None for an unknown index
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if index >= self.chips.len() {
            return None;
        }
        if self.active.remove(&index) {
            Some(false)
        } else {
            self.active.insert(index);
            Some(true)
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active.contains(&index)
    }

    /// Labels of the active chips, in display order
    pub fn active_labels(&self) -> Vec<&str> {
        self.active.iter().map(|&i| self.chips[i].as_str()).collect()
    }
}

/// A bookable time slot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slot {
    pub label: String,
    pub disabled: bool,
}

impl Slot {
    pub fn open(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: false,
        }
    }

    pub fn taken(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disabled: true,
        }
    }
}

/// Single-choice slot picker
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SlotPicker {
    slots: Vec<Slot>,
    selected: Option<usize>,
}

impl SlotPicker {
    pub fn new(slots: Vec<Slot>) -> Self {
        Self {
            slots,
            selected: None,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Make a slot the only active one. Disabled or unknown slots are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        match self.slots.get(index) {
            Some(slot) if !slot.disabled => {
                self.selected = Some(index);
                true
            }
            _ => false,
        }
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Trimmed label of the selected slot
    pub fn selected_label(&self) -> Option<&str> {
        self.selected.map(|i| self.slots[i].label.trim())
    }
}

/// Submit button of a fake form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitButton {
    initial: String,
    saved: bool,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            initial: label.into(),
            saved: false,
        }
    }

    /// Fake a submit: disable and show the saved label.
    ///
    /// The caller schedules [`SubmitButton::revert`] after [`REVERT_AFTER`].
    pub fn submit(&mut self) {
        self.saved = true;
    }

    /// Re-enable and restore the original label
    pub fn revert(&mut self) {
        self.saved = false;
    }

    pub fn disabled(&self) -> bool {
        self.saved
    }

    pub fn label(&self) -> &str {
        if self.saved {
            SAVED_LABEL
        } else {
            &self.initial
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chips_toggle_independently() {
        let mut chips = ChipSet::new(["Haircut", "Beard", "Kids"]);

        assert_eq!(chips.toggle(2), Some(true));
        assert_eq!(chips.toggle(0), Some(true));
        assert_eq!(chips.active_labels(), vec!["Haircut", "Kids"]);

        assert_eq!(chips.toggle(2), Some(false));
        assert!(!chips.is_active(2));
        assert!(chips.is_active(0));
        assert_eq!(chips.toggle(9), None);
    }

    #[test]
    fn test_slot_picker_single_choice() {
        let mut picker = SlotPicker::new(vec![
            Slot::open(" 10:00 "),
            Slot::taken("10:30"),
            Slot::open("11:00"),
        ]);
        assert_eq!(picker.selected_label(), None);

        assert!(picker.select(0));
        assert_eq!(picker.selected_label(), Some("10:00"));

        assert!(picker.select(2));
        assert!(!picker.is_selected(0));
        assert!(picker.is_selected(2));
    }

    #[test]
    fn test_disabled_slot_ignored() {
        let mut picker = SlotPicker::new(vec![Slot::open("10:00"), Slot::taken("10:30")]);
        picker.select(0);

        assert!(!picker.select(1));
        assert!(!picker.select(5));
        assert_eq!(picker.selected_label(), Some("10:00"));
    }

    #[test]
    fn test_submit_button_reverts() {
        let mut button = SubmitButton::new("Send request");
        assert_eq!(button.label(), "Send request");

        button.submit();
        assert!(button.disabled());
        assert_eq!(button.label(), "Saved ✓");

        button.revert();
        assert!(!button.disabled());
        assert_eq!(button.label(), "Send request");
        assert_eq!(REVERT_AFTER.as_millis(), 1400);
    }
}
