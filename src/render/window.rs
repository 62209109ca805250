//! Camera clamp math
//!
//! A [`SlidingWindow`] keeps a fixed-width window inside a range while it
//! follows a focal coordinate. The viewport uses one per axis.

use thiserror::Error;

/// Invalid window construction
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
    #[error("limits are inverted: {0} > {1}")]
    InvertedLimits(i32, i32),
    #[error("window width must be positive, got {0}")]
    EmptyWidth(i32),
}

/// A span of cells around a middle point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    middle: i32,
    left_width: i32,
    right_width: i32,
}

impl Window {
    /// The right half gets the extra cell on odd widths
    pub fn new(middle: i32, width: i32) -> Result<Self, WindowError> {
        if width <= 0 {
            return Err(WindowError::EmptyWidth(width));
        }
        let left_width = width / 2;
        Ok(Self {
            middle,
            left_width,
            right_width: width - left_width,
        })
    }

    pub fn width(&self) -> i32 {
        self.left_width + self.right_width
    }

    pub fn left_width(&self) -> i32 {
        self.left_width
    }

    pub fn right_width(&self) -> i32 {
        self.right_width
    }

    pub fn middle(&self) -> i32 {
        self.middle
    }

    pub fn set_middle(&mut self, middle: i32) {
        self.middle = middle;
    }

    pub fn left(&self) -> i32 {
        self.middle - self.left_width
    }

    pub fn right(&self) -> i32 {
        self.middle + self.right_width
    }
}

/// A window that slides within `limits` without crossing them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlidingWindow {
    limits: (i32, i32),
    window: Window,
    available_limits: (i32, i32),
}

impl SlidingWindow {
    /// The width is cut down to the extent of `limits` when it does not fit
    pub fn new(limits: (i32, i32), width: i32) -> Result<Self, WindowError> {
        if limits.0 > limits.1 {
            return Err(WindowError::InvertedLimits(limits.0, limits.1));
        }
        let mut window = Window::new(0, width.min(limits.1 - limits.0))?;
        let available_limits = available_limits(limits, &window);
        window.set_middle(available_limits.0);

        Ok(Self {
            limits,
            window,
            available_limits,
        })
    }

    /// Center the window on `x`, clamped to the available range
    pub fn slide_to(&mut self, x: i32) {
        let (lo, hi) = self.available_limits;
        self.window.set_middle(x.max(lo).min(hi));
    }

    pub fn left(&self) -> i32 {
        self.window.left()
    }

    pub fn right(&self) -> i32 {
        self.window.right()
    }

    pub fn limits(&self) -> (i32, i32) {
        self.limits
    }

    pub fn available_limits(&self) -> (i32, i32) {
        self.available_limits
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

/// Range the middle may take so the window stays inside `limits`
///
/// When the window does not fit, both ends collapse to half the overlap.
/// That point is not the center of `limits`; callers relying on centering
/// must handle it themselves.
fn available_limits(limits: (i32, i32), window: &Window) -> (i32, i32) {
    let lo = limits.0 + window.left_width();
    let hi = limits.1 - window.right_width();
    if lo > hi {
        let point = (lo - hi) / 2;
        (point, point)
    } else {
        (lo, hi)
    }
}
