//! Scroll-linked triggers: fire-once reveals and the pinned gallery scrub.

use crate::constants::REVEAL_START_FRACTION;

/// One-shot trigger that fires the first time an element's top edge reaches
/// a fixed fraction of the viewport height, and never again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealTrigger {
    start_fraction: f32,
    fired: bool,
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new(REVEAL_START_FRACTION)
    }
}

impl RevealTrigger {
    pub fn new(start_fraction: f32) -> Self {
        Self {
            start_fraction,
            fired: false,
        }
    }

    /// Feed the element's current top (viewport px). Returns true exactly once.
    pub fn update(&mut self, element_top: f32, viewport_height: f32) -> bool {
        if self.fired {
            return false;
        }
        if element_top <= viewport_height * self.start_fraction {
            self.fired = true;
            return true;
        }
        false
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Elements waiting for their reveal, in document order.
///
/// Each carries its own [`RevealTrigger`]; fired elements leave the queue, so
/// an empty queue means nothing on the page needs scroll checks any more.
#[derive(Clone, Debug)]
pub struct RevealQueue<T> {
    pending: Vec<(T, RevealTrigger)>,
}

impl<T> RevealQueue<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            pending: items
                .into_iter()
                .map(|item| (item, RevealTrigger::default()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Remove and return every element whose top has reached the start line.
    pub fn poll(&mut self, viewport_height: f32, mut top_of: impl FnMut(&T) -> f32) -> Vec<T> {
        let mut fired = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            let (item, trigger) = &mut self.pending[i];
            if trigger.update(top_of(item), viewport_height) {
                fired.push(self.pending.remove(i).0);
            } else {
                i += 1;
            }
        }
        fired
    }
}

/// Reveal delay from an inline `transition-delay` value, in seconds.
///
/// A leading number is read the way a browser's `parseFloat` would, so
/// `"0.2s"` gives 0.2 and `"1e-1s"` gives 0.1. An `ms` unit is converted.
/// Missing, unparsable, negative or non-finite values give 0.
pub fn parse_delay(raw: &str) -> f32 {
    let s = raw.trim();
    let end = numeric_prefix_len(s);
    let Ok(value) = s[..end].parse::<f32>() else {
        return 0.0;
    };
    let value = if s[end..].trim_start().starts_with("ms") {
        value / 1000.0
    } else {
        value
    };
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let mut seen_dot = false;
    let mut seen_digit = false;
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        i += 1;
    }
    if !seen_digit {
        return 0;
    }
    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let digits = bytes[j..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            i = j + digits;
        }
    }
    i
}

/// Measurement of the horizontal gallery, taken at refresh time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GalleryScrub {
    distance: f32,
}

impl GalleryScrub {
    /// Overflow of the track past its section. Never negative.
    pub fn measure(track_scroll_width: f32, section_width: f32) -> Self {
        Self {
            distance: (track_scroll_width - section_width).max(0.0),
        }
    }

    /// Length of the pinned scroll region in px.
    pub fn region_length(&self) -> f32 {
        self.distance
    }

    /// Translation once fully scrolled through the region.
    pub fn max_translation(&self) -> f32 {
        -self.distance
    }

    /// Height the pin spacer must have so the region can be scrolled through.
    pub fn spacer_height(&self, section_height: f32) -> f32 {
        section_height.max(0.0) + self.distance
    }

    /// Scroll progress from the spacer's viewport top (0 while the section's
    /// top is below the viewport top, 1 once the region has been scrolled).
    pub fn progress(&self, spacer_top: f32) -> f32 {
        if self.distance <= 0.0 {
            return 0.0;
        }
        (-spacer_top / self.distance).clamp(0.0, 1.0)
    }

    /// Horizontal translation of the track for the spacer's viewport top.
    pub fn translation(&self, spacer_top: f32) -> f32 {
        self.max_translation() * self.progress(spacer_top)
    }
}
