use std::rc::Rc;

use super::{Element, ElementRef, Scheduler};
use crate::error::SiteError;

const PULSE_CLASS: &str = "animate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSpec {
    target: u32,
    duration_ms: u32,
}

impl CounterSpec {
    pub fn new(target: u32, duration_ms: u32) -> Result<Self, SiteError> {
        if duration_ms == 0 {
            return Err(SiteError::InvalidDuration);
        }
        Ok(Self {
            target,
            duration_ms,
        })
    }

    pub fn target(&self) -> u32 {
        self.target
    }
}

/// Reads a counter goal from its `data-target` attribute.
pub fn parse_target(raw: Option<&str>) -> Result<u32, SiteError> {
    let raw = raw.ok_or(SiteError::MissingAttribute("data-target"))?;
    raw.trim()
        .parse::<u32>()
        .map_err(|_| SiteError::MalformedAttribute {
            name: "data-target",
            value: raw.to_string(),
        })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterFrame {
    Running(u32),
    Finished(u32),
}

/// Frame-by-frame state of one counter animation.
#[derive(Debug, Clone)]
pub struct CounterRun {
    target: u32,
    increment: f64,
    accumulated: f64,
}

impl CounterRun {
    pub fn new(spec: &CounterSpec, frame_interval_ms: u32) -> Self {
        let frames = f64::from(spec.duration_ms) / f64::from(frame_interval_ms.max(1));
        Self {
            target: spec.target,
            increment: f64::from(spec.target) / frames,
            accumulated: 0.0,
        }
    }

    pub fn step(&mut self) -> CounterFrame {
        self.accumulated += self.increment;
        // float increments rarely land on the integer target, so `>=` ends the run
        if self.accumulated < f64::from(self.target) {
            CounterFrame::Running(self.accumulated.floor() as u32)
        } else {
            CounterFrame::Finished(self.target)
        }
    }
}

pub struct CounterAnimator {
    scheduler: Rc<dyn Scheduler>,
    frame_interval_ms: u32,
    pulse_ms: u32,
}

impl CounterAnimator {
    pub fn new(scheduler: Rc<dyn Scheduler>, frame_interval_ms: u32, pulse_ms: u32) -> Self {
        Self {
            scheduler,
            frame_interval_ms,
            pulse_ms,
        }
    }

    /// Counts `element` up to `spec.target()`. The first frame runs
    /// immediately; there is no way to stop a run once started.
    pub fn animate(&self, element: ElementRef, spec: CounterSpec) {
        let run = CounterRun::new(&spec, self.frame_interval_ms);
        tick(element, run, Rc::clone(&self.scheduler), self.pulse_ms);
    }
}

fn tick(element: ElementRef, mut run: CounterRun, scheduler: Rc<dyn Scheduler>, pulse_ms: u32) {
    match run.step() {
        CounterFrame::Running(value) => {
            element.set_text(&value.to_string());
            let next = Rc::clone(&scheduler);
            scheduler.next_frame(Box::new(move || tick(element, run, next, pulse_ms)));
        }
        CounterFrame::Finished(value) => {
            element.set_text(&value.to_string());
            pulse(element, scheduler.as_ref(), pulse_ms);
        }
    }
}

fn pulse(element: ElementRef, scheduler: &dyn Scheduler, pulse_ms: u32) {
    element.add_class(PULSE_CLASS);
    scheduler.defer(pulse_ms, Box::new(move || element.remove_class(PULSE_CLASS)));
}
