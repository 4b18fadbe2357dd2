#![forbid(unsafe_code)]

//! Container tree nodes and their capability queries.
//!
//! The hierarchy is a labeled tree over three node variants: plain grouping
//! containers, tab containers, and navigation stacks. Callers never downcast;
//! they ask a node what it is capable of through the `as_*` accessors.

use crate::stack::NavStack;
use crate::tabs::TabContainer;

/// A node in the container tree.
pub enum Container {
    /// A plain grouping container with ordered children.
    Plain(PlainContainer),
    /// A tab container, one child visible per selected index.
    Tab(TabContainer),
    /// A navigation stack of screens.
    Navigation(NavStack),
}

impl Container {
    /// Create a plain container from children.
    pub fn plain(children: Vec<Container>) -> Self {
        Self::Plain(PlainContainer::new(children))
    }

    /// Check if this node is navigation-capable.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::Navigation(_))
    }

    /// Check if this node is a tab container.
    pub fn is_tab(&self) -> bool {
        matches!(self, Self::Tab(_))
    }

    /// View this node as a navigation stack, if it is one.
    pub fn as_navigation(&self) -> Option<&NavStack> {
        match self {
            Self::Navigation(stack) => Some(stack),
            _ => None,
        }
    }

    /// Mutable navigation-capability query.
    pub fn as_navigation_mut(&mut self) -> Option<&mut NavStack> {
        match self {
            Self::Navigation(stack) => Some(stack),
            _ => None,
        }
    }

    /// View this node as a tab container, if it is one.
    pub fn as_tab(&self) -> Option<&TabContainer> {
        match self {
            Self::Tab(tabs) => Some(tabs),
            _ => None,
        }
    }

    /// Mutable tab-capability query.
    pub fn as_tab_mut(&mut self) -> Option<&mut TabContainer> {
        match self {
            Self::Tab(tabs) => Some(tabs),
            _ => None,
        }
    }

    /// Scan one level into this node's children for a navigation stack.
    ///
    /// Only plain containers expose children to this scan; tab containers
    /// are traversed through their selected tab by the locator, and a
    /// navigation stack has screens rather than child containers.
    pub fn nested_navigation_mut(&mut self) -> Option<&mut NavStack> {
        match self {
            Self::Plain(plain) => plain
                .children_mut()
                .iter_mut()
                .find_map(Container::as_navigation_mut),
            Self::Tab(_) | Self::Navigation(_) => None,
        }
    }
}

impl From<NavStack> for Container {
    fn from(stack: NavStack) -> Self {
        Self::Navigation(stack)
    }
}

impl From<TabContainer> for Container {
    fn from(tabs: TabContainer) -> Self {
        Self::Tab(tabs)
    }
}

impl From<PlainContainer> for Container {
    fn from(plain: PlainContainer) -> Self {
        Self::Plain(plain)
    }
}

/// A plain grouping container with no behavior of its own.
pub struct PlainContainer {
    children: Vec<Container>,
}

impl PlainContainer {
    /// Create a plain container from children.
    pub fn new(children: Vec<Container>) -> Self {
        Self { children }
    }

    /// The children in order.
    pub fn children(&self) -> &[Container] {
        &self.children
    }

    /// Mutable access to the children.
    pub fn children_mut(&mut self) -> &mut [Container] {
        &mut self.children
    }
}
