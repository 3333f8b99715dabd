//! Page-level wiring of the behavior components.
//!
//! [`Orchestrator::wire`] looks up the markup once, builds each component it
//! finds markup for, and registers viewport targets. Components whose markup
//! is missing are skipped with a debug log so the page degrades quietly.
//! After wiring, the platform layer forwards events to the `on_*` methods.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::class_sync::ScrollClass;
use super::contact::{ContactForm, FormFields, SubmitOutcome, Submitter};
use super::counter::{parse_target, CounterAnimator, CounterSpec};
use super::debounce::Debouncer;
use super::filter::PortfolioFilter;
use super::navigation::{MobileMenu, SmoothScroll};
use super::portfolio::{ModalController, PressFeedback};
use super::reveal;
use super::viewport::{ObserveOptions, TargetId, ViewportObserver, ViewportSignalSource, VisibilitySink};
use super::{Document, ElementRef, Notifier, Scheduler};
use crate::config::SiteConfig;
use crate::error::SiteError;

const STATISTICS_CONTAINER: &str = "#services .border-top";

/// Capabilities the page behavior needs from its host.
pub struct Platform {
    pub document: Rc<dyn Document>,
    pub scheduler: Rc<dyn Scheduler>,
    pub observer: Rc<dyn ViewportObserver>,
    pub notifier: Rc<dyn Notifier>,
    pub submitter: Rc<dyn Submitter>,
    pub form: Option<Rc<dyn FormFields>>,
}

enum Role {
    Statistics(Vec<ElementRef>),
    Card,
}

pub struct Orchestrator {
    config: SiteConfig,
    document: Rc<dyn Document>,
    viewport: ViewportSignalSource,
    roles: RefCell<BTreeMap<TargetId, Role>>,
    counters: CounterAnimator,
    navbar: Option<Debouncer<f64>>,
    smooth_scroll: SmoothScroll,
    mobile_menu: Option<MobileMenu>,
    filter: Option<PortfolioFilter>,
    items: Vec<ElementRef>,
    modals: ModalController,
    press: PressFeedback,
    contact: Option<ContactForm>,
}

impl Orchestrator {
    pub fn wire(config: SiteConfig, platform: Platform) -> Self {
        let Platform {
            document,
            scheduler,
            observer,
            notifier,
            submitter,
            form,
        } = platform;

        let navbar = document.query(".navbar").map(|navbar| {
            let binding = Rc::new(ScrollClass::new(
                navbar,
                "navbar-scrolled",
                config.navbar_threshold_px,
            ));
            // establish the right state before the first scroll event
            binding.evaluate(document.scroll_y());
            Debouncer::new(Rc::clone(&scheduler), config.scroll_debounce_ms, move |y| {
                binding.evaluate(y)
            })
        });
        if navbar.is_none() {
            log::debug!("No .navbar on the page, scroll effect skipped");
        }

        let mobile_menu = skip_missing("mobile menu", MobileMenu::from_document(document.as_ref()));
        let filter = skip_missing("portfolio filter", PortfolioFilter::from_document(document.as_ref()));
        let contact = match form {
            Some(fields) => Some(ContactForm::new(fields, submitter, Rc::clone(&notifier))),
            None => {
                log::debug!("No contact form on the page, validation skipped");
                None
            }
        };

        let orchestrator = Self {
            counters: CounterAnimator::new(
                Rc::clone(&scheduler),
                config.frame_interval_ms,
                config.counter_pulse_ms,
            ),
            smooth_scroll: SmoothScroll::new(Rc::clone(&document), config.scroll_offset_px),
            modals: ModalController::new(Rc::clone(&document), notifier),
            press: PressFeedback::new(scheduler, config.press_feedback_ms),
            items: document.query_all(".portfolio-item"),
            viewport: ViewportSignalSource::new(observer),
            roles: RefCell::new(BTreeMap::new()),
            navbar,
            mobile_menu,
            filter,
            contact,
            document,
            config,
        };

        report("statistics animation", orchestrator.observe_statistics());
        report("card animations", orchestrator.observe_cards());
        log::info!("All modules loaded");
        orchestrator
    }

    fn observe_statistics(&self) -> Result<(), SiteError> {
        let container = self
            .document
            .query(STATISTICS_CONTAINER)
            .ok_or_else(|| SiteError::MissingElement(STATISTICS_CONTAINER.to_string()))?;
        let numbers = self.document.query_all(".statistic-number");
        if numbers.is_empty() {
            return Err(SiteError::MissingElement(".statistic-number".to_string()));
        }
        let options = ObserveOptions::new(self.config.statistics_threshold)?;
        if let Some(id) = self.viewport.observe(Some(container), &options)? {
            self.roles.borrow_mut().insert(id, Role::Statistics(numbers));
        }
        log::debug!("Statistics counters wired");
        Ok(())
    }

    fn observe_cards(&self) -> Result<(), SiteError> {
        let options = ObserveOptions::new(self.config.card_threshold)?
            .with_root_margin(self.config.card_root_margin.clone());
        let cards = self.document.query_all(".card");
        let mut wired = 0;
        for card in &cards {
            // a card nobody watches must stay visible
            match self.viewport.observe(Some(Rc::clone(card)), &options) {
                Ok(Some(id)) => {
                    reveal::prepare(card.as_ref());
                    self.roles.borrow_mut().insert(id, Role::Card);
                    wired += 1;
                }
                Ok(None) => {}
                Err(e) => log::warn!("Card left visible, could not observe it: {}", e),
            }
        }
        log::debug!("{} of {} cards wired for reveal", wired, cards.len());
        Ok(())
    }

    fn start_counters(&self, numbers: &[ElementRef]) {
        for number in numbers {
            let spec = parse_target(number.attribute("data-target").as_deref())
                .and_then(|target| CounterSpec::new(target, self.config.counter_duration_ms));
            match spec {
                Ok(spec) => self.counters.animate(Rc::clone(number), spec),
                Err(e) => log::warn!("Skipping statistic counter: {}", e),
            }
        }
    }

    pub fn on_scroll(&self, offset: f64) {
        if let Some(navbar) = &self.navbar {
            navbar.notify(offset);
        }
    }

    /// In-page anchor click. Returns whether a section was scrolled to.
    pub fn on_anchor_click(&self, href: &str) -> bool {
        self.smooth_scroll.follow(href)
    }

    pub fn on_nav_link_click(&self) {
        if let Some(menu) = &self.mobile_menu {
            menu.on_link_click();
        }
    }

    pub fn on_toggler_click(&self) {
        if let Some(menu) = &self.mobile_menu {
            menu.toggle();
        }
    }

    pub fn on_filter_click(&self, index: usize) {
        if let Some(filter) = &self.filter {
            filter.select(index);
        }
    }

    /// Press feedback, then the item's `data-modal` dialog, if any.
    pub fn on_item_click(&self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        self.press.press(Rc::clone(item));
        if let Some(modal) = item.attribute("data-modal") {
            if let Err(e) = self.modals.open(&modal) {
                log::warn!("Could not open portfolio modal: {}", e);
            }
        }
    }

    pub fn on_modal_close(&self, modal_id: &str) {
        if let Err(e) = self.modals.close(modal_id) {
            log::warn!("Could not close modal: {}", e);
        }
    }

    pub fn on_live_site_click(&self, modal_id: &str) {
        if let Err(e) = self.modals.view_live_site(modal_id) {
            log::warn!("Live site button outside a titled modal: {}", e);
        }
    }

    pub fn on_submit(&self) -> Option<SubmitOutcome> {
        let outcome = self.contact.as_ref()?.handle_submit();
        Some(outcome)
    }

    pub fn modals(&self) -> &ModalController {
        &self.modals
    }

    pub fn filter(&self) -> Option<&PortfolioFilter> {
        self.filter.as_ref()
    }
}

impl VisibilitySink for Orchestrator {
    fn on_visibility(&self, id: TargetId, intersecting: bool) {
        let Some(event) = self.viewport.signal(id, intersecting) else {
            return;
        };
        let roles = self.roles.borrow();
        match roles.get(&event.id) {
            Some(Role::Statistics(numbers)) => self.start_counters(numbers),
            Some(Role::Card) => reveal::reveal(event.element.as_ref()),
            None => {}
        }
    }
}

/// Missing markup logs at debug; other wiring failures warn.
fn report(what: &str, wired: Result<(), SiteError>) {
    match wired {
        Ok(()) => {}
        Err(e @ SiteError::MissingElement(_)) => log::debug!("{} skipped: {}", what, e),
        Err(e) => log::warn!("{} not wired: {}", what, e),
    }
}

fn skip_missing<T>(what: &str, wired: Result<T, SiteError>) -> Option<T> {
    match wired {
        Ok(component) => Some(component),
        Err(e) => {
            log::debug!("{} skipped: {}", what, e);
            None
        }
    }
}
