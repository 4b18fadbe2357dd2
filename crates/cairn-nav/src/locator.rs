#![forbid(unsafe_code)]

//! Locating the active navigation stack under a root container.
//!
//! The scan is fixed-depth (at most three levels), not a general tree
//! search; application roots are assumed shallow. In order, for each child
//! of the root:
//!
//! 1. A tab container is entered through its selected tab only. If the
//!    selected tab's container is itself navigation-capable it wins;
//!    otherwise its children are scanned one level.
//! 2. A navigation-capable child wins without further descent.
//! 3. Any other child has its children scanned one level.
//!
//! The first match wins. Absence is not an error: a single diagnostic is
//! logged and `None` returned, and every dependent operation degrades to a
//! no-op.

use cairn_tree::{Container, NavStack, Root};
use tracing::warn;

/// Find the currently active navigation stack under `root`.
pub(crate) fn active_stack(root: &mut Root) -> Option<&mut NavStack> {
    for child in root.children_mut() {
        match child {
            Container::Tab(tabs) => {
                if let Some(selected) = tabs.selected_container_mut() {
                    if selected.is_navigation() {
                        return selected.as_navigation_mut();
                    }
                    if let Some(stack) = selected.nested_navigation_mut() {
                        return Some(stack);
                    }
                }
            }
            Container::Navigation(stack) => return Some(stack),
            other => {
                if let Some(stack) = other.nested_navigation_mut() {
                    return Some(stack);
                }
            }
        }
    }
    warn!("no navigation stack under root; navigation calls are no-ops");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairn_tree::{NavStack, ScreenEntry, TabContainer};

    fn stack_titled(title: &str) -> NavStack {
        NavStack::with_root(ScreenEntry::new(Box::new(
            cairn_tree::HostedScreen::new(()).with_title(title),
        )))
    }

    #[test]
    fn direct_navigation_child_wins() {
        let mut root = Root::new(vec![
            Container::plain(Vec::new()),
            stack_titled("direct").into(),
        ]);
        let found = active_stack(&mut root).unwrap();
        assert_eq!(found.top().unwrap().title(), "direct");
    }

    #[test]
    fn selected_tab_subtree_only() {
        let tabs = TabContainer::new(vec![
            stack_titled("tab0").into(),
            stack_titled("tab1").into(),
        ]);
        let mut root = Root::new(vec![Container::Tab(tabs)]);

        let found = active_stack(&mut root).unwrap();
        assert_eq!(found.top().unwrap().title(), "tab0");

        root.children_mut()[0].as_tab_mut().unwrap().select(1);
        let found = active_stack(&mut root).unwrap();
        assert_eq!(found.top().unwrap().title(), "tab1");
    }

    #[test]
    fn tab_with_wrapped_stack_descends_one_level() {
        // The selected tab holds a plain container that wraps the stack.
        let wrapped = Container::plain(vec![stack_titled("wrapped").into()]);
        let tabs = TabContainer::new(vec![wrapped]);
        let mut root = Root::new(vec![Container::Tab(tabs)]);

        let found = active_stack(&mut root).unwrap();
        assert_eq!(found.top().unwrap().title(), "wrapped");
    }

    #[test]
    fn adjacent_tabs_are_never_searched() {
        // Only tab 1 is selected; the stack lives in tab 0.
        let tabs = TabContainer::new(vec![
            stack_titled("tab0").into(),
            Container::plain(Vec::new()),
        ]);
        let mut root = Root::new(vec![Container::Tab(tabs)]);
        root.children_mut()[0].as_tab_mut().unwrap().select(1);

        assert!(active_stack(&mut root).is_none());
    }

    #[test]
    fn plain_child_scans_one_level() {
        let mut root = Root::new(vec![Container::plain(vec![stack_titled("nested").into()])]);
        let found = active_stack(&mut root).unwrap();
        assert_eq!(found.top().unwrap().title(), "nested");
    }

    #[test]
    fn two_levels_deep_is_out_of_reach() {
        let mut root = Root::new(vec![Container::plain(vec![Container::plain(vec![
            stack_titled("buried").into(),
        ])])]);
        assert!(active_stack(&mut root).is_none());
    }

    #[test]
    fn first_match_wins() {
        let mut root = Root::new(vec![
            stack_titled("first").into(),
            stack_titled("second").into(),
        ]);
        let found = active_stack(&mut root).unwrap();
        assert_eq!(found.top().unwrap().title(), "first");
    }

    #[test]
    fn empty_root_finds_nothing() {
        let mut root = Root::new(Vec::new());
        assert!(active_stack(&mut root).is_none());
    }
}
