use super::class_sync::sync_class;
use super::Element;

const REVEALED: &str = "revealed";

/// Hidden starting pose for a card waiting to scroll into view.
pub fn prepare(card: &dyn Element) {
    card.set_style("opacity", "0");
    card.set_style("transform", "translateY(20px)");
    card.set_style("transition", "opacity 0.6s ease, transform 0.6s ease");
    sync_class(card, REVEALED, || false);
}

pub fn reveal(card: &dyn Element) {
    card.set_style("opacity", "1");
    card.set_style("transform", "translateY(0)");
    sync_class(card, REVEALED, || true);
}
