#![forbid(unsafe_code)]

//! The application's root container and its modal-presentation slot.
//!
//! The accessor that produces the active `Root` for a window belongs to the
//! embedding application; this crate only models the tree below it. A root
//! carries ordered child containers plus at most one presented sheet.

use tracing::warn;

use crate::container::Container;
use crate::sheet::Sheet;

/// The root of the visible container tree.
pub struct Root {
    children: Vec<Container>,
    sheet: Option<Sheet>,
}

impl Root {
    /// Create a root over the given children, with nothing presented.
    pub fn new(children: Vec<Container>) -> Self {
        Self {
            children,
            sheet: None,
        }
    }

    /// The root's children in order.
    pub fn children(&self) -> &[Container] {
        &self.children
    }

    /// Mutable access to the root's children.
    pub fn children_mut(&mut self) -> &mut [Container] {
        &mut self.children
    }

    /// Present a sheet modally over this root.
    ///
    /// Only one sheet can be presented at a time; presenting while one is
    /// already up is refused and the sheet is handed back unpresented.
    pub fn present(&mut self, mut sheet: Sheet) -> Result<(), Sheet> {
        if self.sheet.is_some() {
            warn!("sheet already presented; refusing a second presentation");
            return Err(sheet);
        }
        sheet.mark_presented();
        self.sheet = Some(sheet);
        Ok(())
    }

    /// The presented sheet, if any.
    pub fn presented_sheet(&self) -> Option<&Sheet> {
        self.sheet.as_ref()
    }

    /// Mutable access to the presented sheet.
    pub fn presented_sheet_mut(&mut self) -> Option<&mut Sheet> {
        self.sheet.as_mut()
    }

    /// Dismiss the presented sheet, returning it after its terminal
    /// transition. No-op when nothing is presented.
    pub fn dismiss_sheet(&mut self) -> Option<Sheet> {
        let mut sheet = self.sheet.take()?;
        sheet.mark_dismissed();
        Some(sheet)
    }
}
