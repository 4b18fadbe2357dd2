#![no_main]

//! Arbitrary container trees against the locator.
//!
//! Builds a bounded-depth tree from fuzz input and checks that locating the
//! active stack never panics and is stable across repeated calls.

use arbitrary::Arbitrary;
use cairn_nav::Navigator;
use cairn_tree::{Container, NavStack, PlainContainer, Root, ScreenEntry, TabContainer};
use libfuzzer_sys::fuzz_target;

const MAX_DEPTH: usize = 3;

#[derive(Arbitrary, Debug)]
enum NodePlan {
    Plain(Vec<NodePlan>),
    Tab { tabs: Vec<NodePlan>, selected: u8 },
    Navigation { screens: u8 },
}

fn build(plan: NodePlan, depth: usize) -> Container {
    match plan {
        _ if depth >= MAX_DEPTH => Container::Plain(PlainContainer::new(Vec::new())),
        NodePlan::Plain(children) => Container::plain(
            children
                .into_iter()
                .take(4)
                .map(|child| build(child, depth + 1))
                .collect(),
        ),
        NodePlan::Tab { tabs, selected } => {
            let mut container = TabContainer::new(
                tabs.into_iter()
                    .take(4)
                    .map(|tab| build(tab, depth + 1))
                    .collect(),
            );
            container.select(selected as usize);
            Container::Tab(container)
        }
        NodePlan::Navigation { screens } => {
            let mut stack = NavStack::new();
            for _ in 0..screens.min(8) {
                stack.push(ScreenEntry::hosting(()));
            }
            Container::Navigation(stack)
        }
    }
}

fuzz_target!(|plans: Vec<NodePlan>| {
    let children: Vec<Container> = plans
        .into_iter()
        .take(6)
        .map(|plan| build(plan, 0))
        .collect();
    let mut root = Root::new(children);

    // Locating must never panic, and must be stable across repeated calls.
    let first = Navigator::locate(&mut root).map(|stack| stack.top_id());
    let second = Navigator::locate(&mut root).map(|stack| stack.top_id());
    assert_eq!(first, second);
});
