#![forbid(unsafe_code)]

//! Bottom-sheet presentation adapter: sizes, detents, configuration, and the
//! presentation state machine.
//!
//! A sheet hosts a [`Screen`] and rests at one of the detents its
//! [`SheetSize`] offers. The size-to-detent mapping is a pure lookup; the
//! first detent of a size is where the sheet rests when first presented.
//!
//! # Invariants
//!
//! - `SheetSize::detents()` never returns an empty list, and its order is
//!   fixed per variant.
//! - A sheet is constructed `NotPresented` and only
//!   [`Root::present`](crate::Root::present) moves it to `Presented`.
//! - `select_detent` accepts only detents the sheet's size offers, or `None`
//!   to release the explicit selection.
//!
//! # Failure Modes
//!
//! - Selecting an unoffered detent is a guarded no-op (logged).
//! - Selecting a detent on a sheet that is not presented is a no-op.

mod animation;

pub use animation::DetentAnimation;

use tracing::{debug, warn};

use crate::screen::{HostedScreen, Screen};

/// A discrete height a presented sheet can rest at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Detent {
    /// Roughly half the presenting surface.
    Medium,
    /// The full presenting surface.
    Large,
}

/// The size policy of a bottom sheet, as an ordered detent list.
///
/// The first detent is the initial rest height; any further detents are
/// reachable by dragging or by [`Sheet::select_detent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetSize {
    /// Half height only; the sheet cannot expand.
    Half,
    /// Full height only; the sheet cannot shrink.
    Full,
    /// Opens full, may shrink to half.
    FullAllowHalf,
    /// Opens half, may expand to full.
    HalfAllowFull,
}

impl SheetSize {
    /// The ordered detents this size offers.
    pub const fn detents(self) -> &'static [Detent] {
        match self {
            Self::Half => &[Detent::Medium],
            Self::Full => &[Detent::Large],
            Self::FullAllowHalf => &[Detent::Large, Detent::Medium],
            Self::HalfAllowFull => &[Detent::Medium, Detent::Large],
        }
    }

    /// The detent a sheet of this size rests at when first presented.
    pub const fn initial_detent(self) -> Detent {
        match self {
            Self::Half | Self::HalfAllowFull => Detent::Medium,
            Self::Full | Self::FullAllowHalf => Detent::Large,
        }
    }

    /// Check whether this size offers the given detent.
    pub fn allows(self, detent: Detent) -> bool {
        self.detents().contains(&detent)
    }
}

/// Sheet presentation preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetConfig {
    /// Show the drag grabber above the content.
    pub grabber: bool,
    /// Attach the sheet to the screen edge in compact heights.
    pub edge_attached: bool,
    /// Let scrolling past the content's edge expand the sheet.
    pub scroll_expands: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            grabber: true,
            edge_attached: true,
            scroll_expands: false,
        }
    }
}

impl SheetConfig {
    /// Create the default preferences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grabber visibility.
    pub fn grabber(mut self, show: bool) -> Self {
        self.grabber = show;
        self
    }

    /// Set edge attachment in compact heights.
    pub fn edge_attached(mut self, attached: bool) -> Self {
        self.edge_attached = attached;
        self
    }

    /// Set whether scrolling past the edge expands the sheet.
    pub fn scroll_expands(mut self, expands: bool) -> Self {
        self.scroll_expands = expands;
        self
    }
}

/// Presentation state of a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetState {
    /// Constructed but not yet presented.
    NotPresented,
    /// Presented, resting at the selected detent. `None` means no explicit
    /// selection; the platform resolves the rest height.
    Presented {
        /// The explicitly selected detent, if any.
        detent: Option<Detent>,
    },
}

/// The bottom-sheet presentation adapter.
///
/// Constructed only through [`Sheet::new`] or [`Sheet::hosting`]; there is no
/// default or deserialized construction path.
pub struct Sheet {
    content: Box<dyn Screen>,
    size: SheetSize,
    config: SheetConfig,
    state: SheetState,
    animation: Option<DetentAnimation>,
}

impl Sheet {
    /// Create a sheet from boxed screen content and a size policy.
    pub fn new(content: Box<dyn Screen>, size: SheetSize) -> Self {
        Self {
            content,
            size,
            config: SheetConfig::default(),
            state: SheetState::NotPresented,
            animation: None,
        }
    }

    /// Create a sheet by hosting arbitrary content in a
    /// [`HostedScreen`].
    pub fn hosting<C: Send + 'static>(content: C, size: SheetSize) -> Self {
        Self::new(Box::new(HostedScreen::new(content)), size)
    }

    /// Replace the presentation preferences.
    pub fn with_config(mut self, config: SheetConfig) -> Self {
        self.config = config;
        self
    }

    /// The sheet's size policy.
    pub fn size(&self) -> SheetSize {
        self.size
    }

    /// The ordered detents the sheet offers.
    pub fn detents(&self) -> &'static [Detent] {
        self.size.detents()
    }

    /// The presentation preferences.
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// The current presentation state.
    pub fn state(&self) -> SheetState {
        self.state
    }

    /// Check if the sheet is presented.
    pub fn is_presented(&self) -> bool {
        matches!(self.state, SheetState::Presented { .. })
    }

    /// The explicitly selected detent, if the sheet is presented.
    pub fn selected_detent(&self) -> Option<Detent> {
        match self.state {
            SheetState::Presented { detent } => detent,
            SheetState::NotPresented => None,
        }
    }

    /// The in-flight detent transition, if one is running.
    pub fn animation(&self) -> Option<&DetentAnimation> {
        self.animation.as_ref()
    }

    /// Borrow the hosted content.
    pub fn content(&self) -> &dyn Screen {
        &*self.content
    }

    /// Mutably borrow the hosted content.
    pub fn content_mut(&mut self) -> &mut dyn Screen {
        &mut *self.content
    }

    /// Animate a transition to a specific detent, or to `None` to release
    /// the explicit selection.
    ///
    /// No-op unless the sheet is presented and the detent (when given) is
    /// one the sheet's size offers.
    pub fn select_detent(&mut self, detent: Option<Detent>) {
        let SheetState::Presented { detent: current } = self.state else {
            debug!("detent selection on a sheet that is not presented");
            return;
        };
        if let Some(requested) = detent
            && !self.size.allows(requested)
        {
            warn!(?requested, size = ?self.size, "detent not offered by sheet size");
            return;
        }
        if current == detent {
            return;
        }
        self.animation = Some(DetentAnimation::start(current, detent));
        self.state = SheetState::Presented { detent };
        debug!(from = ?current, to = ?detent, "detent transition");
    }

    /// Entry transition: rest at the size's first detent.
    pub(crate) fn mark_presented(&mut self) {
        self.state = SheetState::Presented {
            detent: Some(self.size.initial_detent()),
        };
        self.content.on_appear();
    }

    /// Terminal transition, driven by the embedding application.
    pub(crate) fn mark_dismissed(&mut self) {
        self.state = SheetState::NotPresented;
        self.animation = None;
        self.content.on_disappear();
    }
}
