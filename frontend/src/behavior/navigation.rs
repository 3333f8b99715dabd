use std::rc::Rc;

use super::{Document, ElementRef};
use crate::error::SiteError;

const MENU_OPEN: &str = "show";

/// `#services` → `services`. Bare `#` and non-fragment links yield nothing.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// In-page anchor navigation with room left for the fixed navbar.
pub struct SmoothScroll {
    document: Rc<dyn Document>,
    offset_px: f64,
}

impl SmoothScroll {
    pub fn new(document: Rc<dyn Document>, offset_px: f64) -> Self {
        Self {
            document,
            offset_px,
        }
    }

    /// Returns whether a section was found and scrolled to.
    pub fn follow(&self, href: &str) -> bool {
        let Some(section) = fragment_target(href).and_then(|id| self.document.by_id(id)) else {
            return false;
        };
        let top = (section.offset_top() - self.offset_px).max(0.0);
        self.document.smooth_scroll_to(top);
        true
    }
}

/// Collapsed navbar on small viewports.
pub struct MobileMenu {
    toggler: ElementRef,
    collapse: ElementRef,
}

impl MobileMenu {
    pub fn from_document(document: &dyn Document) -> Result<Self, SiteError> {
        let toggler = document
            .query(".navbar-toggler")
            .ok_or_else(|| SiteError::MissingElement(".navbar-toggler".to_string()))?;
        let collapse = document
            .query(".navbar-collapse")
            .ok_or_else(|| SiteError::MissingElement(".navbar-collapse".to_string()))?;
        Ok(Self { toggler, collapse })
    }

    pub fn is_open(&self) -> bool {
        self.collapse.has_class(MENU_OPEN)
    }

    /// Toggler click: flips the collapse and mirrors it in `aria-expanded`.
    pub fn toggle(&self) {
        let open = !self.is_open();
        if open {
            self.collapse.add_class(MENU_OPEN);
        } else {
            self.collapse.remove_class(MENU_OPEN);
        }
        self.toggler
            .set_attribute("aria-expanded", if open { "true" } else { "false" });
    }

    /// A nav link was followed; close the menu through the toggler if it is open.
    pub fn on_link_click(&self) {
        if self.is_open() {
            self.toggler.click();
        }
    }
}
