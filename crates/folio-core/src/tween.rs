//! Property tweens for page elements.
//!
//! The [`Tweener`] owns the animated value of every `(element, property)` pair
//! and at most one running tween for each. Starting a new tween on a pair that
//! is already animating replaces the old one, continuing from wherever the
//! value currently is, so rapid input (pointer moves) always converges on the
//! most recent target. The web driver calls [`Tweener::advance`] once per
//! animation frame and writes the changed elements back to the DOM.

use crate::ease::Ease;
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// Opaque handle the web layer assigns to each animated element.
pub type ElementKey = u32;

/// Hands out one [`ElementKey`] per element.
///
/// An element matched by several selectors (a magnetic button that also
/// reveals on scroll) must share a single key, otherwise two sets of tracks
/// would fight over the same inline `transform`. Identity is decided by the
/// caller, since only the web layer can compare DOM nodes.
#[derive(Debug)]
pub struct ElementRegistry<T> {
    entries: FnvHashMap<ElementKey, T>,
    next_key: ElementKey,
}

impl<T> Default for ElementRegistry<T> {
    fn default() -> Self {
        Self {
            entries: FnvHashMap::default(),
            next_key: 0,
        }
    }
}

impl<T> ElementRegistry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key of the entry for which `is_same` holds, if one is registered.
    pub fn find(&self, mut is_same: impl FnMut(&T) -> bool) -> Option<ElementKey> {
        self.entries
            .iter()
            .find_map(|(key, entry)| is_same(entry).then_some(*key))
    }

    /// Return the existing key for a matching entry, or store `make()` under a fresh one.
    /// The flag is true when a new entry was created.
    pub fn get_or_insert_with(
        &mut self,
        is_same: impl FnMut(&T) -> bool,
        make: impl FnOnce() -> T,
    ) -> (ElementKey, bool) {
        if let Some(key) = self.find(is_same) {
            return (key, false);
        }
        let key = self.next_key;
        self.next_key += 1;
        self.entries.insert(key, make());
        (key, true)
    }

    pub fn get(&self, key: ElementKey) -> Option<&T> {
        self.entries.get(&key)
    }

    pub fn get_mut(&mut self, key: ElementKey) -> Option<&mut T> {
        self.entries.get_mut(&key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Start delay of item `index` in a staggered group: `delay + index * each`.
#[inline]
pub fn stagger(delay: f32, each: f32, index: usize) -> f32 {
    delay.max(0.0) + index as f32 * each.max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Prop {
    X,
    Y,
    Opacity,
}

impl Prop {
    /// Value assumed when nothing was seeded for an element.
    pub fn rest_value(self) -> f32 {
        match self {
            Prop::X | Prop::Y => 0.0,
            Prop::Opacity => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenVars {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub opacity: Option<f32>,
    pub duration: f32,
    pub delay: f32,
    pub ease: Ease,
}

impl TweenVars {
    pub fn new(duration: f32) -> Self {
        Self {
            x: None,
            y: None,
            opacity: None,
            duration,
            delay: 0.0,
            ease: Ease::default(),
        }
    }

    pub fn translate(mut self, x: f32, y: f32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    pub fn y(mut self, y: f32) -> Self {
        self.y = Some(y);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    fn targets(&self) -> impl Iterator<Item = (Prop, f32)> {
        [
            self.x.map(|v| (Prop::X, v)),
            self.y.map(|v| (Prop::Y, v)),
            self.opacity.map(|v| (Prop::Opacity, v)),
        ]
        .into_iter()
        .flatten()
    }
}

#[derive(Clone, Copy, Debug)]
struct Track {
    // Captured on the first sample after the delay elapses.
    from: Option<f32>,
    to: f32,
    start: f64,
    duration: f32,
    ease: Ease,
}

impl Track {
    fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.start) / self.duration as f64) as f32).clamp(0.0, 1.0)
    }
}

#[derive(Default, Debug)]
pub struct Tweener {
    values: FnvHashMap<(ElementKey, Prop), f32>,
    tracks: FnvHashMap<(ElementKey, Prop), Track>,
}

impl Tweener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the value an element starts with (usually read from its computed style).
    pub fn seed(&mut self, key: ElementKey, prop: Prop, value: f32) {
        self.values.insert((key, prop), value);
    }

    pub fn value(&self, key: ElementKey, prop: Prop) -> f32 {
        self.values
            .get(&(key, prop))
            .copied()
            .unwrap_or_else(|| prop.rest_value())
    }

    /// Start tweening every property named in `vars`, replacing running tweens on them.
    pub fn to(&mut self, key: ElementKey, vars: TweenVars, now: f64) {
        for (prop, target) in vars.targets() {
            self.tracks.insert(
                (key, prop),
                Track {
                    from: None,
                    to: target,
                    start: now + vars.delay as f64,
                    duration: vars.duration.max(0.0),
                    ease: vars.ease,
                },
            );
        }
    }

    /// Sample all running tweens at `now`. Returns the elements whose values changed.
    pub fn advance(&mut self, now: f64) -> SmallVec<[ElementKey; 8]> {
        let mut changed: SmallVec<[ElementKey; 8]> = SmallVec::new();
        let values = &mut self.values;
        self.tracks.retain(|&(key, prop), track| {
            if now < track.start {
                return true;
            }
            let from = *track.from.get_or_insert_with(|| {
                values
                    .get(&(key, prop))
                    .copied()
                    .unwrap_or_else(|| prop.rest_value())
            });
            let p = track.progress(now);
            let done = p >= 1.0;
            let value = if done {
                track.to
            } else {
                from + (track.to - from) * track.ease.apply(p)
            };
            values.insert((key, prop), value);
            changed.push(key);
            !done
        });
        changed.sort_unstable();
        changed.dedup();
        changed
    }

    pub fn is_idle(&self) -> bool {
        self.tracks.is_empty()
    }
}
