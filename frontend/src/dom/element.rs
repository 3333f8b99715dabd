use std::any::Any;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::behavior::{Document, Element, ElementRef};

pub struct WebElement {
    element: HtmlElement,
}

impl WebElement {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn wrap(element: web_sys::Element) -> Option<ElementRef> {
        let element = element.dyn_into::<HtmlElement>().ok()?;
        Some(Rc::new(Self::new(element)))
    }

    pub fn raw(&self) -> &HtmlElement {
        &self.element
    }
}

impl Element for WebElement {
    fn add_class(&self, class: &str) {
        if let Err(e) = self.element.class_list().add_1(class) {
            log::warn!("Failed to add class {}: {:?}", class, e);
        }
    }

    fn remove_class(&self, class: &str) {
        if let Err(e) = self.element.class_list().remove_1(class) {
            log::warn!("Failed to remove class {}: {:?}", class, e);
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.element.class_list().contains(class)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(e) = self.element.set_attribute(name, value) {
            log::warn!("Failed to set attribute {}: {:?}", name, e);
        }
    }

    fn text(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.element.set_text_content(Some(text));
    }

    fn set_style(&self, property: &str, value: &str) {
        let style = self.element.style();
        let result = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };
        if let Err(e) = result {
            log::warn!("Failed to set style {}: {:?}", property, e);
        }
    }

    fn style(&self, property: &str) -> String {
        self.element
            .style()
            .get_property_value(property)
            .unwrap_or_default()
    }

    fn offset_top(&self) -> f64 {
        f64::from(self.element.offset_top())
    }

    fn click(&self) {
        self.element.click();
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct WebDocument {
    window: Window,
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(window: Window, document: web_sys::Document) -> Self {
        Self { window, document }
    }
}

impl Document for WebDocument {
    fn query(&self, selector: &str) -> Option<ElementRef> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(WebElement::wrap)
    }

    fn query_all(&self, selector: &str) -> Vec<ElementRef> {
        query_all(&self.document, selector)
            .into_iter()
            .filter_map(WebElement::wrap)
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<ElementRef> {
        self.document
            .get_element_by_id(id)
            .and_then(WebElement::wrap)
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn smooth_scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }
}

/// All elements matching `selector`, in document order. Invalid selectors match nothing.
pub fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        log::warn!("Invalid selector {}", selector);
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}
