#![forbid(unsafe_code)]

//! Navigation stack: ordered screens with push/pop and stack-clearing sweeps.
//!
//! The stack owns its screens bottom-up: index 0 is the root and the last
//! entry is the visible top. Mutations delegate nothing; this type is the
//! platform primitive the rest of the toolkit drives.
//!
//! # Invariants
//!
//! - Index 0 is the stack's root; the last entry is the visible top.
//! - `pop()` never removes the root.
//! - Clearing sweeps iterate from the end backward, so removal never shifts
//!   an index that is still pending.
//! - Visibility hooks fire only when the visible top actually changes;
//!   entries removed from under the top were already covered and get none.
//!
//! # Failure Modes
//!
//! - `pop()` with one entry or none returns `None` (no panic).
//! - `clear_intermediate()` with fewer than three entries is a no-op.
//! - `clear_all_but_top()` with fewer than two entries is a no-op.

use tracing::debug;

use crate::screen::{Screen, ScreenEntry, ScreenId};

/// A stack-based screen holder supporting push and pop with back navigation.
pub struct NavStack {
    /// Screens in visual order (bottom to top).
    entries: Vec<ScreenEntry>,
    /// Whether an interactive back gesture may pop the visible screen.
    back_gesture_enabled: bool,
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NavStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            back_gesture_enabled: true,
        }
    }

    /// Create a stack seeded with a root screen.
    pub fn with_root(root: ScreenEntry) -> Self {
        let mut stack = Self::new();
        stack.push(root);
        stack
    }

    // --- Stack Operations ---

    /// Push a screen onto the stack, making it the visible top.
    ///
    /// Returns the unique `ScreenId` of the pushed entry.
    pub fn push(&mut self, mut entry: ScreenEntry) -> ScreenId {
        if let Some(top) = self.entries.last_mut() {
            top.screen_mut().on_disappear();
        }
        entry.screen_mut().on_appear();
        let id = entry.id();
        debug!(title = entry.title(), depth = self.entries.len() + 1, "push");
        self.entries.push(entry);
        id
    }

    /// Pop the visible top, if more than one entry remains.
    ///
    /// The root is not poppable; on a single-entry or empty stack this
    /// returns `None` and changes nothing.
    pub fn pop(&mut self) -> Option<ScreenEntry> {
        if self.entries.len() < 2 {
            return None;
        }
        let mut removed = self.entries.pop()?;
        removed.screen_mut().on_disappear();
        if let Some(top) = self.entries.last_mut() {
            top.screen_mut().on_appear();
        }
        debug!(depth = self.entries.len(), "pop");
        Some(removed)
    }

    /// Pop everything above the root.
    ///
    /// Returns the removed entries in LIFO order (previous top first).
    pub fn pop_to_root(&mut self) -> Vec<ScreenEntry> {
        if self.entries.len() < 2 {
            return Vec::new();
        }
        if let Some(top) = self.entries.last_mut() {
            top.screen_mut().on_disappear();
        }
        let removed: Vec<ScreenEntry> = self.entries.drain(1..).rev().collect();
        if let Some(root) = self.entries.last_mut() {
            root.screen_mut().on_appear();
        }
        debug!(removed = removed.len(), "pop_to_root");
        removed
    }

    /// Remove every entry strictly between the root and the visible top.
    ///
    /// `[root, A, B, C]` becomes `[root, C]`. The sweep runs from the end
    /// backward so each removal leaves the remaining pending indices valid.
    /// Returns the number of entries removed.
    pub fn clear_intermediate(&mut self) -> usize {
        let len = self.entries.len();
        if len < 3 {
            return 0;
        }
        let mut removed = 0;
        for index in (1..len - 1).rev() {
            self.entries.remove(index);
            removed += 1;
        }
        debug!(removed, "clear_intermediate");
        removed
    }

    /// Remove everything except the visible top, the root included.
    ///
    /// `[root, A, B]` becomes `[B]`. Returns the number of entries removed.
    pub fn clear_all_but_top(&mut self) -> usize {
        let len = self.entries.len();
        if len < 2 {
            return 0;
        }
        let mut removed = 0;
        for index in (0..len - 1).rev() {
            self.entries.remove(index);
            removed += 1;
        }
        debug!(removed, "clear_all_but_top");
        removed
    }

    // --- Back Gesture ---

    /// Enable or disable the interactive back gesture for this stack.
    pub fn set_back_gesture(&mut self, enabled: bool) {
        self.back_gesture_enabled = enabled;
    }

    /// Whether the interactive back gesture may pop the visible screen.
    pub fn back_gesture_enabled(&self) -> bool {
        self.back_gesture_enabled
    }

    // --- State Queries ---

    /// Check if the stack holds no screens.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of screens on the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.entries.len()
    }

    /// The root entry, if any.
    pub fn root(&self) -> Option<&ScreenEntry> {
        self.entries.first()
    }

    /// The visible top entry, if any.
    pub fn top(&self) -> Option<&ScreenEntry> {
        self.entries.last()
    }

    /// Mutable access to the visible top entry.
    pub fn top_mut(&mut self) -> Option<&mut ScreenEntry> {
        self.entries.last_mut()
    }

    /// The ID of the visible top, if any.
    pub fn top_id(&self) -> Option<ScreenId> {
        self.entries.last().map(|entry| entry.id())
    }

    /// Check if a screen with the given ID is on the stack.
    pub fn contains(&self, id: ScreenId) -> bool {
        self.entries.iter().any(|entry| entry.id() == id)
    }

    /// All entries in visual order (bottom to top).
    pub fn entries(&self) -> &[ScreenEntry] {
        &self.entries
    }
}
