#![forbid(unsafe_code)]

//! Container tree for cairn: screens, navigation stacks, tab containers, and
//! the bottom-sheet presentation adapter.
//!
//! The hierarchy is a labeled tree over three node variants (plain, tab,
//! navigation), queried through typed capability accessors rather than
//! downcasts. All state is ephemeral and owned by the tree; mutation happens
//! in place through `&mut` on whichever thread runs the embedding
//! application's UI loop.
//!
//! # Example
//!
//! ```
//! use cairn_tree::{Container, NavStack, Root, ScreenEntry, TabContainer};
//!
//! let inbox = NavStack::with_root(ScreenEntry::hosting("inbox"));
//! let settings = NavStack::with_root(ScreenEntry::hosting("settings"));
//! let tabs = TabContainer::new(vec![inbox.into(), settings.into()]);
//! let root = Root::new(vec![Container::Tab(tabs)]);
//! assert_eq!(root.children().len(), 1);
//! ```

pub mod container;
pub mod root;
pub mod screen;
pub mod sheet;
pub mod stack;
pub mod tabs;

pub use container::{Container, PlainContainer};
pub use root::Root;
pub use screen::{HostedScreen, Screen, ScreenEntry, ScreenId};
pub use sheet::{Detent, DetentAnimation, Sheet, SheetConfig, SheetSize, SheetState};
pub use stack::NavStack;
pub use tabs::TabContainer;
