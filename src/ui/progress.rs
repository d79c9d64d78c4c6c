// Tue Jan 13 2026 - Alex

use crate::registry::Phase;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Hands out one bar per phase. Disabled managers hand out hidden bars so
/// callers never branch on whether progress is shown.
#[derive(Clone)]
pub struct ProgressManager {
    multi: MultiProgress,
    enabled: bool,
    style_template: String,
}

impl ProgressManager {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            enabled: true,
            style_template: "{spinner:.cyan} [{elapsed_precise}] {prefix} [{bar:30.cyan/blue}] {pos}/{len} {msg}".to_string(),
        }
    }

    pub fn hidden() -> Self {
        Self::new().with_enabled(false)
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        if !enabled {
            self.multi.set_draw_target(ProgressDrawTarget::hidden());
        }
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn phase_bar(&self, phase: Phase, total: usize) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let pb = self.multi.add(ProgressBar::new(total as u64));
        if let Ok(style) = ProgressStyle::default_bar().template(&self.style_template) {
            pb.set_style(style.progress_chars("█▓▒░ "));
        }
        pb.set_prefix(format!("Phase {}", phase.number()));
        pb.enable_steady_tick(Duration::from_millis(100));

        pb
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}
