#![forbid(unsafe_code)]

//! The stateless navigation service.
//!
//! Every operation takes the root container as an explicit parameter,
//! locates the active navigation stack (or the presented sheet) and
//! delegates to the tree primitives. When nothing is located the operation
//! is a no-op; the locator already logged the single diagnostic.

use cairn_tree::{
    Detent, HostedScreen, NavStack, Root, ScreenEntry, ScreenId, Sheet, SheetConfig, SheetSize,
};

use crate::locator::active_stack;

/// What happens to prior stack entries after a push.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StackBehaviour {
    /// Leave the stack as pushed.
    #[default]
    Keep,
    /// Drop everything between the root and the new top.
    ClearIntermediate,
    /// Drop everything except the new top.
    ClearAll,
}

/// Configuration for [`Navigator::push`].
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PushConfig {
    /// Title for the host adapter wrapping the pushed content.
    pub title: Option<String>,
    /// Disable the interactive back gesture after this push.
    pub disable_back_gesture: bool,
    /// Stack policy applied after the push completes.
    pub behaviour: StackBehaviour,
}

impl PushConfig {
    /// Default push: untitled, back gesture enabled, stack kept.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host adapter's title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Disable the interactive back gesture after this push.
    pub fn disable_back_gesture(mut self, disable: bool) -> Self {
        self.disable_back_gesture = disable;
        self
    }

    /// Set the stack policy applied after the push.
    pub fn behaviour(mut self, behaviour: StackBehaviour) -> Self {
        self.behaviour = behaviour;
        self
    }
}

/// Stateless navigation helpers over a [`Root`].
///
/// All operations are associated functions; the service holds no state of
/// its own and touches only the tree it is handed.
pub struct Navigator;

impl Navigator {
    /// Find the currently active navigation stack under `root`.
    ///
    /// Returns `None` (after one diagnostic) when the root's structure
    /// matches no recognized pattern.
    pub fn locate(root: &mut Root) -> Option<&mut NavStack> {
        active_stack(root)
    }

    /// Pop the active stack back to its root screen.
    ///
    /// Returns the number of screens removed.
    pub fn pop_to_root(root: &mut Root) -> usize {
        match active_stack(root) {
            Some(stack) => stack.pop_to_root().len(),
            None => 0,
        }
    }

    /// Pop the visible screen of the active stack.
    pub fn pop(root: &mut Root) -> Option<ScreenEntry> {
        active_stack(root).and_then(NavStack::pop)
    }

    /// Remove every screen between the active stack's root and its top.
    ///
    /// Returns the number of screens removed.
    pub fn clear_intermediate(root: &mut Root) -> usize {
        active_stack(root).map_or(0, NavStack::clear_intermediate)
    }

    /// Remove every screen of the active stack except the visible top.
    ///
    /// Returns the number of screens removed.
    pub fn clear_all_but_top(root: &mut Root) -> usize {
        active_stack(root).map_or(0, NavStack::clear_all_but_top)
    }

    /// Wrap `content` in a host adapter and push it onto the active stack,
    /// then apply the configured back-gesture toggle and stack policy.
    ///
    /// Returns the pushed screen's ID, or `None` when no stack is located
    /// (a silent no-op beyond the locator's diagnostic).
    pub fn push<C: Send + 'static>(
        root: &mut Root,
        content: C,
        config: PushConfig,
    ) -> Option<ScreenId> {
        let stack = active_stack(root)?;

        let mut hosted = HostedScreen::new(content);
        if let Some(title) = config.title {
            hosted = hosted.with_title(title);
        }
        let id = stack.push(ScreenEntry::new(Box::new(hosted)));
        stack.set_back_gesture(!config.disable_back_gesture);

        match config.behaviour {
            StackBehaviour::Keep => {}
            StackBehaviour::ClearIntermediate => {
                stack.clear_intermediate();
            }
            StackBehaviour::ClearAll => {
                stack.clear_all_but_top();
            }
        }
        Some(id)
    }

    /// Present `content` as a bottom sheet over `root`, with the default
    /// presentation preferences.
    ///
    /// Returns whether the sheet was presented.
    pub fn present_sheet<C: Send + 'static>(root: &mut Root, content: C, size: SheetSize) -> bool {
        Self::present_sheet_with(root, content, size, SheetConfig::default())
    }

    /// Present `content` as a bottom sheet with explicit preferences.
    pub fn present_sheet_with<C: Send + 'static>(
        root: &mut Root,
        content: C,
        size: SheetSize,
        config: SheetConfig,
    ) -> bool {
        let sheet = Sheet::hosting(content, size).with_config(config);
        root.present(sheet).is_ok()
    }

    /// Animate the presented sheet to a specific detent, or to `None` to
    /// release the explicit selection. No presented sheet: no-op.
    pub fn select_sheet_detent(root: &mut Root, detent: Option<Detent>) {
        if let Some(sheet) = root.presented_sheet_mut() {
            sheet.select_detent(detent);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_tree::{Container, NavStack, SheetState};

    fn seeded_root() -> Root {
        let mut stack = NavStack::new();
        stack.push(ScreenEntry::hosting("home"));
        Root::new(vec![Container::Navigation(stack)])
    }

    fn depth(root: &mut Root) -> usize {
        Navigator::locate(root).map_or(0, |stack| stack.depth())
    }

    #[test]
    fn push_keep_appends() {
        let mut root = seeded_root();
        let id = Navigator::push(&mut root, "detail", PushConfig::new()).unwrap();
        let stack = Navigator::locate(&mut root).unwrap();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.top_id(), Some(id));
    }

    #[test]
    fn push_clear_all_leaves_single_entry() {
        let mut root = seeded_root();
        let _ = Navigator::push(&mut root, "a", PushConfig::new());
        let _ = Navigator::push(&mut root, "b", PushConfig::new());

        let id = Navigator::push(
            &mut root,
            "fresh",
            PushConfig::new().behaviour(StackBehaviour::ClearAll),
        )
        .unwrap();

        let stack = Navigator::locate(&mut root).unwrap();
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top_id(), Some(id));
    }

    #[test]
    fn push_clear_intermediate_keeps_root_and_new_top() {
        let mut root = seeded_root();
        let root_id = Navigator::locate(&mut root).unwrap().root().unwrap().id();
        let _ = Navigator::push(&mut root, "a", PushConfig::new());
        let _ = Navigator::push(&mut root, "b", PushConfig::new());

        let id = Navigator::push(
            &mut root,
            "summary",
            PushConfig::new().behaviour(StackBehaviour::ClearIntermediate),
        )
        .unwrap();

        let stack = Navigator::locate(&mut root).unwrap();
        assert_eq!(stack.depth(), 2);
        assert_eq!(stack.root().map(|entry| entry.id()), Some(root_id));
        assert_eq!(stack.top_id(), Some(id));
    }

    #[test]
    fn push_sets_back_gesture() {
        let mut root = seeded_root();
        let _ = Navigator::push(
            &mut root,
            "locked",
            PushConfig::new().disable_back_gesture(true),
        );
        assert!(!Navigator::locate(&mut root).unwrap().back_gesture_enabled());

        let _ = Navigator::push(&mut root, "free", PushConfig::new());
        assert!(Navigator::locate(&mut root).unwrap().back_gesture_enabled());
    }

    #[test]
    fn push_titles_the_host_adapter() {
        let mut root = seeded_root();
        let _ = Navigator::push(&mut root, "detail", PushConfig::new().title("Detail"));
        let stack = Navigator::locate(&mut root).unwrap();
        assert_eq!(stack.top().unwrap().title(), "Detail");
    }

    #[test]
    fn operations_degrade_without_a_stack() {
        let mut root = Root::new(Vec::new());
        assert!(Navigator::push(&mut root, "x", PushConfig::new()).is_none());
        assert!(Navigator::pop(&mut root).is_none());
        assert_eq!(Navigator::pop_to_root(&mut root), 0);
        assert_eq!(Navigator::clear_intermediate(&mut root), 0);
        assert_eq!(Navigator::clear_all_but_top(&mut root), 0);
    }

    #[test]
    fn pop_and_pop_to_root_delegate() {
        let mut root = seeded_root();
        let _ = Navigator::push(&mut root, "a", PushConfig::new());
        let _ = Navigator::push(&mut root, "b", PushConfig::new());

        assert!(Navigator::pop(&mut root).is_some());
        assert_eq!(depth(&mut root), 2);

        let _ = Navigator::push(&mut root, "c", PushConfig::new());
        assert_eq!(Navigator::pop_to_root(&mut root), 2);
        assert_eq!(depth(&mut root), 1);
    }

    #[test]
    fn sheet_lifecycle_through_navigator() {
        let mut root = seeded_root();
        assert!(Navigator::present_sheet(
            &mut root,
            "filters",
            SheetSize::HalfAllowFull
        ));

        let sheet = root.presented_sheet().unwrap();
        assert_eq!(
            sheet.state(),
            SheetState::Presented {
                detent: Some(Detent::Medium)
            }
        );

        Navigator::select_sheet_detent(&mut root, Some(Detent::Large));
        assert_eq!(
            root.presented_sheet().unwrap().selected_detent(),
            Some(Detent::Large)
        );

        // A second presentation is refused while the first is up.
        assert!(!Navigator::present_sheet(&mut root, "other", SheetSize::Full));
    }

    #[test]
    fn detent_selection_without_sheet_is_noop() {
        let mut root = seeded_root();
        Navigator::select_sheet_detent(&mut root, Some(Detent::Large));
        assert!(root.presented_sheet().is_none());
    }
}
