use std::cell::RefCell;

use super::{Document, ElementRef};
use crate::error::SiteError;

pub const ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, category: Option<&str>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted.as_str()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterItem {
    pub category: Option<String>,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    selected: CategoryFilter,
    items: Vec<FilterItem>,
}

impl FilterState {
    pub fn new(categories: impl IntoIterator<Item = Option<String>>) -> Self {
        Self {
            selected: CategoryFilter::All,
            items: categories
                .into_iter()
                .map(|category| FilterItem {
                    category,
                    visible: true,
                })
                .collect(),
        }
    }

    /// Re-derives every item's visibility from `selected`.
    pub fn apply(&mut self, selected: CategoryFilter) {
        for item in &mut self.items {
            item.visible = selected.matches(item.category.as_deref());
        }
        self.selected = selected;
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    pub fn items(&self) -> &[FilterItem] {
        &self.items
    }
}

/// The `.filter-btn` row and the `.portfolio-item` grid it controls.
pub struct PortfolioFilter {
    buttons: Vec<ElementRef>,
    items: Vec<ElementRef>,
    state: RefCell<FilterState>,
}

impl PortfolioFilter {
    pub fn from_document(document: &dyn Document) -> Result<Self, SiteError> {
        let buttons = document.query_all(".filter-btn");
        if buttons.is_empty() {
            return Err(SiteError::MissingElement(".filter-btn".to_string()));
        }
        let items = document.query_all(".portfolio-item");
        if items.is_empty() {
            return Err(SiteError::MissingElement(".portfolio-item".to_string()));
        }
        let state = FilterState::new(items.iter().map(|item| item.attribute("data-category")));
        Ok(Self {
            buttons,
            items,
            state: RefCell::new(state),
        })
    }

    /// Handles a click on button `index`. Buttons without `data-filter` are inert.
    pub fn select(&self, index: usize) {
        let Some(button) = self.buttons.get(index) else {
            return;
        };
        let Some(value) = button.attribute("data-filter") else {
            log::debug!("filter button {} has no data-filter", index);
            return;
        };
        button.add_class("active");
        for (i, other) in self.buttons.iter().enumerate() {
            if i != index {
                other.remove_class("active");
            }
        }

        let mut state = self.state.borrow_mut();
        state.apply(CategoryFilter::parse(&value));
        for (element, item) in self.items.iter().zip(state.items()) {
            if item.visible {
                element.remove_class("hide");
                element.add_class("show");
            } else {
                element.remove_class("show");
                element.add_class("hide");
            }
        }
    }

    pub fn state(&self) -> FilterState {
        self.state.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behavior::fake::{FakeDocument, FakeElement};
    use crate::behavior::Element;
    use std::rc::Rc;

    fn categories(values: &[&str]) -> Vec<Option<String>> {
        values.iter().map(|v| Some(v.to_string())).collect()
    }

    fn page(filters: &[&str], items: &[&str]) -> (Rc<FakeDocument>, Vec<Rc<FakeElement>>, Vec<Rc<FakeElement>>) {
        let document = FakeDocument::new();
        let buttons: Vec<_> = filters
            .iter()
            .map(|f| FakeElement::with_attr("data-filter", f))
            .collect();
        for button in &buttons {
            document.insert(".filter-btn", button);
        }
        let cards: Vec<_> = items
            .iter()
            .map(|c| FakeElement::with_attr("data-category", c))
            .collect();
        for card in &cards {
            document.insert(".portfolio-item", card);
        }
        (document, buttons, cards)
    }

    #[test]
    fn web_filter_over_mixed_items() {
        let mut state = FilterState::new(categories(&["web", "app", "web"]));
        state.apply(CategoryFilter::parse("web"));
        let visible: Vec<bool> = state.items().iter().map(|i| i.visible).collect();
        assert_eq!(visible, vec![true, false, true]);
    }

    #[test]
    fn all_shows_everything_including_untagged() {
        let mut state = FilterState::new(vec![Some("web".to_string()), None]);
        state.apply(CategoryFilter::parse("design"));
        assert!(state.items().iter().all(|i| !i.visible));
        state.apply(CategoryFilter::parse(ALL));
        assert!(state.items().iter().all(|i| i.visible));
    }

    #[test]
    fn filtering_depends_only_on_last_selection() {
        let mut direct = FilterState::new(categories(&["web", "app", "design", "app"]));
        direct.apply(CategoryFilter::parse("app"));

        let mut wandering = FilterState::new(categories(&["web", "app", "design", "app"]));
        for value in ["web", "all", "design", "web", "app", "app"] {
            wandering.apply(CategoryFilter::parse(value));
        }
        assert_eq!(direct, wandering);
    }

    #[test]
    fn select_marks_exactly_one_button_active() {
        let (document, buttons, _) = page(&["all", "web", "app"], &["web", "app", "web"]);
        buttons[0].add_class("active");
        let filter = PortfolioFilter::from_document(document.as_ref()).unwrap();

        filter.select(2);
        let active: Vec<bool> = buttons.iter().map(|b| b.has_class("active")).collect();
        assert_eq!(active, vec![false, false, true]);

        filter.select(2);
        let active: Vec<bool> = buttons.iter().map(|b| b.has_class("active")).collect();
        assert_eq!(active, vec![false, false, true]);
    }

    #[test]
    fn select_applies_show_and_hide_classes() {
        let (document, _, cards) = page(&["all", "web"], &["web", "app", "web"]);
        let filter = PortfolioFilter::from_document(document.as_ref()).unwrap();

        for _ in 0..3 {
            filter.select(1);
            let shown: Vec<bool> = cards.iter().map(|c| c.has_class("show")).collect();
            let hidden: Vec<bool> = cards.iter().map(|c| c.has_class("hide")).collect();
            assert_eq!(shown, vec![true, false, true]);
            assert_eq!(hidden, vec![false, true, false]);
        }

        filter.select(0);
        assert!(cards.iter().all(|c| c.has_class("show") && !c.has_class("hide")));
        assert_eq!(filter.state().selected(), &CategoryFilter::All);
    }

    #[test]
    fn button_without_filter_value_is_inert() {
        let (document, buttons, cards) = page(&["web"], &["web", "app"]);
        let stray = FakeElement::new();
        document.insert(".filter-btn", &stray);
        let filter = PortfolioFilter::from_document(document.as_ref()).unwrap();
        filter.select(0);
        filter.select(1);
        assert!(buttons[0].has_class("active"));
        assert!(!stray.has_class("active"));
        assert!(cards[1].has_class("hide"));
        filter.select(99);
    }

    #[test]
    fn missing_markup_is_reported() {
        let document = FakeDocument::new();
        assert_eq!(
            PortfolioFilter::from_document(document.as_ref()).err(),
            Some(SiteError::MissingElement(".filter-btn".to_string()))
        );
        document.insert(".filter-btn", &FakeElement::with_attr("data-filter", "all"));
        assert_eq!(
            PortfolioFilter::from_document(document.as_ref()).err(),
            Some(SiteError::MissingElement(".portfolio-item".to_string()))
        );
    }
}
