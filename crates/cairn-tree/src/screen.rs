#![forbid(unsafe_code)]

//! Screen contract and the host adapter for arbitrary content.
//!
//! A screen is the unit a [`NavStack`](crate::NavStack) stacks and a
//! [`Sheet`](crate::Sheet) presents: whatever the embedding application wants
//! to show as one full surface. Content that does not implement [`Screen`]
//! itself is embedded through [`HostedScreen`].

use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for unique screen IDs.
static SCREEN_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a screen hosted in a stack or sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(u64);

impl ScreenId {
    /// Create a new unique screen ID.
    fn next() -> Self {
        Self(SCREEN_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Contract for content that can live in a navigation stack or a sheet.
///
/// The tree never inspects content beyond this trait. Both hooks have empty
/// defaults so simple content can ignore visibility entirely.
pub trait Screen: Send {
    /// Title used by back affordances and diagnostics.
    fn title(&self) -> &str {
        ""
    }

    /// Called when this screen becomes the visible top of its stack, or when
    /// a sheet hosting it is presented.
    fn on_appear(&mut self) {}

    /// Called when this screen stops being the visible top, or when a sheet
    /// hosting it is dismissed.
    fn on_disappear(&mut self) {}
}

/// Host adapter embedding an arbitrary value as a [`Screen`].
///
/// The wrapped value does not need to know anything about navigation; the
/// host carries the title and forwards the `Screen` contract.
pub struct HostedScreen<C> {
    content: C,
    title: String,
}

impl<C> HostedScreen<C> {
    /// Wrap `content` with an empty title.
    pub fn new(content: C) -> Self {
        Self {
            content,
            title: String::new(),
        }
    }

    /// Set the title shown by back affordances.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Borrow the wrapped content.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Mutably borrow the wrapped content.
    pub fn content_mut(&mut self) -> &mut C {
        &mut self.content
    }

    /// Unwrap the adapter, returning the content.
    pub fn into_content(self) -> C {
        self.content
    }
}

impl<C: Send> Screen for HostedScreen<C> {
    fn title(&self) -> &str {
        &self.title
    }
}

/// A screen plus its identity, as stored in a [`NavStack`](crate::NavStack).
pub struct ScreenEntry {
    id: ScreenId,
    screen: Box<dyn Screen>,
}

impl ScreenEntry {
    /// Create an entry from boxed screen content.
    pub fn new(screen: Box<dyn Screen>) -> Self {
        Self {
            id: ScreenId::next(),
            screen,
        }
    }

    /// Create an entry by hosting arbitrary content in a [`HostedScreen`].
    pub fn hosting<C: Send + 'static>(content: C) -> Self {
        Self::new(Box::new(HostedScreen::new(content)))
    }

    /// The entry's unique ID.
    pub fn id(&self) -> ScreenId {
        self.id
    }

    /// The hosted screen's title.
    pub fn title(&self) -> &str {
        self.screen.title()
    }

    /// Borrow the hosted screen.
    pub fn screen(&self) -> &dyn Screen {
        &*self.screen
    }

    /// Mutably borrow the hosted screen.
    pub fn screen_mut(&mut self) -> &mut dyn Screen {
        &mut *self.screen
    }
}
