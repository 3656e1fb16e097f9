//! Floating label element
//!
//! Holds what the host needs to draw the tooltip: text, position and a
//! visibility that fades in and out over [`FADE_DURATION`].

use std::time::{Duration, Instant};

use unicode_width::UnicodeWidthStr;

/// Length of a fade-in or fade-out transition
pub const FADE_DURATION: Duration = Duration::from_millis(150);

/// Top-left corner of the label in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LabelPosition {
    pub left: f64,
    pub top: f64,
}

impl LabelPosition {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    FadingIn { started: Instant },
    Shown,
    FadingOut { started: Instant },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatingLabel {
    id: String,
    text: String,
    position: LabelPosition,
    visibility: Visibility,
    /// Columns added on each side of the text (border and padding)
    horizontal_padding: f64,
}

impl FloatingLabel {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: String::new(),
            position: LabelPosition::default(),
            visibility: Visibility::Hidden,
            horizontal_padding: 2.0,
        }
    }

    pub fn with_horizontal_padding(mut self, padding: f64) -> Self {
        self.horizontal_padding = padding.max(0.0);
        self
    }

    pub fn horizontal_padding(&self) -> f64 {
        self.horizontal_padding
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: &str) {
        if self.text != text {
            self.text.clear();
            self.text.push_str(text);
        }
    }

    pub fn position(&self) -> LabelPosition {
        self.position
    }

    pub fn set_position(&mut self, position: LabelPosition) {
        self.position = position;
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Rendered width: the widest line plus padding on both sides
    pub fn outer_width(&self) -> f64 {
        let widest = self.text.lines().map(|line| line.width()).max().unwrap_or(0);
        widest as f64 + self.horizontal_padding * 2.0
    }

    pub fn line_count(&self) -> usize {
        self.text.lines().count().max(1)
    }

    /// True when the label is shown or on its way to being shown
    pub fn is_shown(&self) -> bool {
        matches!(self.visibility, Visibility::Shown | Visibility::FadingIn { .. })
    }

    /// True while anything of the label is on screen, including a fade-out in progress
    pub fn is_displayed(&self, now: Instant) -> bool {
        match self.visibility {
            Visibility::Hidden => false,
            Visibility::FadingOut { started } => now.saturating_duration_since(started) < FADE_DURATION,
            _ => true,
        }
    }

    /// Current opacity in `0.0..=1.0`
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.visibility {
            Visibility::Hidden => 0.0,
            Visibility::Shown => 1.0,
            Visibility::FadingIn { started } => fade_progress(started, now),
            Visibility::FadingOut { started } => 1.0 - fade_progress(started, now),
        }
    }

    /// Start fading in. A label already shown or fading in is left alone;
    /// one fading out turns around from its current opacity.
    pub fn fade_in(&mut self, now: Instant) {
        match self.visibility {
            Visibility::Shown | Visibility::FadingIn { .. } => {}
            Visibility::Hidden => {
                self.visibility = Visibility::FadingIn { started: now };
            }
            Visibility::FadingOut { started } => {
                self.visibility = Visibility::FadingIn {
                    started: reversed_start(started, now),
                };
            }
        }
    }

    /// Start fading out. A label already hidden or fading out is left alone.
    pub fn fade_out(&mut self, now: Instant) {
        match self.visibility {
            Visibility::Hidden | Visibility::FadingOut { .. } => {}
            Visibility::Shown => {
                self.visibility = Visibility::FadingOut { started: now };
            }
            Visibility::FadingIn { started } => {
                self.visibility = Visibility::FadingOut {
                    started: reversed_start(started, now),
                };
            }
        }
    }

    /// Hide at once, skipping the fade
    pub fn hide_now(&mut self) {
        self.visibility = Visibility::Hidden;
    }

    /// Complete any fade whose duration has elapsed
    pub fn settle(&mut self, now: Instant) {
        self.visibility = match self.visibility {
            Visibility::FadingIn { started } if now.saturating_duration_since(started) >= FADE_DURATION => {
                Visibility::Shown
            }
            Visibility::FadingOut { started } if now.saturating_duration_since(started) >= FADE_DURATION => {
                Visibility::Hidden
            }
            other => other,
        };
    }

    /// When the running fade finishes, if one is running
    pub fn fade_deadline(&self) -> Option<Instant> {
        match self.visibility {
            Visibility::FadingIn { started } | Visibility::FadingOut { started } => {
                Some(started + FADE_DURATION)
            }
            _ => None,
        }
    }
}

/// Start of a reversed fade, backdated so opacity carries over unchanged
fn reversed_start(started: Instant, now: Instant) -> Instant {
    let remaining = FADE_DURATION.saturating_sub(now.saturating_duration_since(started));
    now.checked_sub(remaining).unwrap_or(now)
}

fn fade_progress(started: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(started).as_secs_f32();
    (elapsed / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "label_tests.rs"]
mod label_tests;
