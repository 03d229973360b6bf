//! Scroll progress indicator
//!
//! Maps the window's vertical scroll offset to the width of the bar pinned
//! to the top of the page.

/// Window measurements sampled on a scroll event (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_y: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_y,
            document_height,
            viewport_height,
        }
    }

    /// Distance the viewport can travel
    pub fn scrollable(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    /// Percentage of the scrollable distance traversed, in [0, 100]
    ///
    /// A page that fits in the viewport has nothing to traverse and reports 0.
    pub fn progress(&self) -> f64 {
        let scrollable = self.scrollable();
        if scrollable <= 0.0 || !scrollable.is_finite() {
            return 0.0;
        }
        let progress = self.scroll_y / scrollable * 100.0;
        if progress.is_nan() {
            return 0.0;
        }
        progress.clamp(0.0, 100.0)
    }
}

/// Last painted progress value
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollProgress {
    percent: f64,
}

impl ScrollProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Recompute from fresh metrics. Returns true if the bar needs a repaint.
    pub fn update(&mut self, metrics: ScrollMetrics) -> bool {
        let next = metrics.progress();
        if next == self.percent {
            return false;
        }
        self.percent = next;
        true
    }

    /// Value for the bar's CSS `width` property
    pub fn width(&self) -> String {
        format!("{}%", self.percent)
    }
}
