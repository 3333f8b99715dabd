/// Tunables for the page behavior. The defaults match the shipped markup.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    /// Space kept above a section when smooth scrolling to it, so the fixed navbar does not cover it.
    pub scroll_offset_px: f64,
    pub navbar_threshold_px: f64,
    pub scroll_debounce_ms: u32,
    pub frame_interval_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_pulse_ms: u32,
    pub press_feedback_ms: u32,
    pub statistics_threshold: f64,
    pub card_threshold: f64,
    pub card_root_margin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_offset_px: 80.0,
            navbar_threshold_px: 50.0,
            scroll_debounce_ms: 10,
            frame_interval_ms: 16,
            counter_duration_ms: 2000,
            counter_pulse_ms: 300,
            press_feedback_ms: 150,
            statistics_threshold: 0.5,
            card_threshold: 0.1,
            card_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
