#![forbid(unsafe_code)]

//! Programmatic navigation helpers for the cairn container tree.
//!
//! This crate is the thin service layer over [`cairn_tree`]: locate the
//! active navigation stack under a root, pop in its several flavors, push
//! arbitrary content with a stack-clearing policy, and present bottom
//! sheets with detent configurations.
//!
//! Everything is a stateless call on [`Navigator`] taking the root
//! container as an explicit parameter, so synthetic trees test the whole
//! surface without any live UI. The single failure mode, "no navigation
//! stack under this root", logs one diagnostic and degrades every
//! dependent operation to a no-op.
//!
//! # Example
//!
//! ```
//! use cairn_nav::{Navigator, PushConfig, StackBehaviour};
//! use cairn_tree::{Container, NavStack, Root, ScreenEntry, SheetSize};
//!
//! let stack = NavStack::with_root(ScreenEntry::hosting("home"));
//! let mut root = Root::new(vec![Container::Navigation(stack)]);
//!
//! let detail = Navigator::push(&mut root, "detail", PushConfig::new().title("Detail"));
//! assert!(detail.is_some());
//!
//! let checkout = Navigator::push(
//!     &mut root,
//!     "checkout",
//!     PushConfig::new().behaviour(StackBehaviour::ClearIntermediate),
//! );
//! assert_eq!(Navigator::locate(&mut root).unwrap().top_id(), checkout);
//! assert_eq!(Navigator::locate(&mut root).unwrap().depth(), 2);
//!
//! Navigator::present_sheet(&mut root, "filters", SheetSize::HalfAllowFull);
//! assert!(root.presented_sheet().is_some());
//! ```

mod locator;
pub mod navigator;

pub use navigator::{Navigator, PushConfig, StackBehaviour};
