#![no_main]

//! Arbitrary mutation sequences against a navigation stack.
//!
//! Checks that no sequence panics and that the structural guarantees hold
//! after every step: the root survives everything except an all-but-top
//! sweep, and the clearing sweeps leave the documented shapes.

use arbitrary::Arbitrary;
use cairn_tree::{NavStack, ScreenEntry};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Push,
    Pop,
    PopToRoot,
    ClearIntermediate,
    ClearAllButTop,
    SetBackGesture(bool),
}

fuzz_target!(|ops: Vec<Op>| {
    let mut stack = NavStack::new();

    for op in ops {
        let before = stack.depth();
        let root_id = stack.root().map(|entry| entry.id());
        let top_id = stack.top_id();

        match op {
            Op::Push => {
                let id = stack.push(ScreenEntry::hosting(()));
                assert_eq!(stack.top_id(), Some(id));
                assert_eq!(stack.depth(), before + 1);
            }
            Op::Pop => {
                let removed = stack.pop();
                if before < 2 {
                    assert!(removed.is_none());
                    assert_eq!(stack.depth(), before);
                } else {
                    assert_eq!(removed.map(|entry| entry.id()), top_id);
                    assert_eq!(stack.depth(), before - 1);
                }
                assert_eq!(stack.root().map(|entry| entry.id()), root_id);
            }
            Op::PopToRoot => {
                let removed = stack.pop_to_root();
                assert_eq!(removed.len(), before.saturating_sub(1));
                assert_eq!(stack.depth(), before.min(1));
                assert_eq!(stack.root().map(|entry| entry.id()), root_id);
            }
            Op::ClearIntermediate => {
                stack.clear_intermediate();
                assert_eq!(stack.depth(), before.min(2));
                assert_eq!(stack.root().map(|entry| entry.id()), root_id);
                assert_eq!(stack.top_id(), top_id);
            }
            Op::ClearAllButTop => {
                stack.clear_all_but_top();
                assert_eq!(stack.depth(), before.min(1));
                assert_eq!(stack.top_id(), top_id);
            }
            Op::SetBackGesture(enabled) => {
                stack.set_back_gesture(enabled);
                assert_eq!(stack.back_gesture_enabled(), enabled);
            }
        }
    }
});
