use crate::frame::{Flow, FrameLoop};
use folio_core::style::{parse_opacity, parse_translate, transform_value};
use folio_core::{ElementKey, ElementRegistry, Prop, TweenVars, Tweener};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

struct Animated {
    el: web::HtmlElement,
    // Transform keeps the element's center on its position (cursor dot).
    centered: bool,
    writes_transform: bool,
    writes_opacity: bool,
}

struct AnimatorState {
    tweener: Tweener,
    elements: ElementRegistry<Animated>,
    epoch: Instant,
}

impl AnimatorState {
    fn now(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    fn step(&mut self) -> Flow {
        let now = self.now();
        for key in self.tweener.advance(now) {
            self.apply(key);
        }
        if self.tweener.is_idle() {
            Flow::Stop
        } else {
            Flow::Continue
        }
    }

    fn apply(&self, key: ElementKey) {
        let Some(a) = self.elements.get(key) else {
            return;
        };
        let style = a.el.style();
        if a.writes_transform {
            let x = self.tweener.value(key, Prop::X);
            let y = self.tweener.value(key, Prop::Y);
            _ = style.set_property("transform", &transform_value(x, y, a.centered));
        }
        if a.writes_opacity {
            let o = self.tweener.value(key, Prop::Opacity);
            _ = style.set_property("opacity", &format!("{o:.4}"));
        }
    }
}

/// Drives element tweens from a frame loop that only runs while something is animating.
#[derive(Clone)]
pub struct Animator {
    state: Rc<RefCell<AnimatorState>>,
    frames: Rc<FrameLoop>,
}

impl Animator {
    pub fn new() -> Self {
        let state = Rc::new(RefCell::new(AnimatorState {
            tweener: Tweener::new(),
            elements: ElementRegistry::new(),
            epoch: Instant::now(),
        }));
        let weak = Rc::downgrade(&state);
        let frames = FrameLoop::new(move |_| match weak.upgrade() {
            Some(state) => state.borrow_mut().step(),
            None => Flow::Stop,
        });
        Self {
            state,
            frames: Rc::new(frames),
        }
    }

    /// Start tracking `el`, seeding its translation and opacity from computed style.
    ///
    /// An element that is already tracked keeps its key and current values.
    pub fn register(&self, el: &web::HtmlElement, centered: bool) -> ElementKey {
        let mut st = self.state.borrow_mut();
        let node: &web::Node = el;
        let (key, created) = st.elements.get_or_insert_with(
            |a| a.el.is_same_node(Some(node)),
            || Animated {
                el: el.clone(),
                centered,
                writes_transform: false,
                writes_opacity: false,
            },
        );
        if !created {
            log::debug!("[animate] element {} registered again; sharing its tracks", key);
            return key;
        }

        let computed = web::window().and_then(|w| w.get_computed_style(el).ok().flatten());
        if let Some(cs) = computed {
            let opacity = cs.get_property_value("opacity").unwrap_or_default();
            st.tweener.seed(key, Prop::Opacity, parse_opacity(&opacity));
            if !centered {
                let transform = cs.get_property_value("transform").unwrap_or_default();
                let (x, y) = parse_translate(&transform);
                st.tweener.seed(key, Prop::X, x);
                st.tweener.seed(key, Prop::Y, y);
            }
        }
        key
    }

    pub fn to(&self, key: ElementKey, vars: TweenVars) {
        {
            let mut st = self.state.borrow_mut();
            let now = st.now();
            if let Some(a) = st.elements.get_mut(key) {
                a.writes_transform |= vars.x.is_some() || vars.y.is_some();
                a.writes_opacity |= vars.opacity.is_some();
            }
            st.tweener.to(key, vars, now);
        }
        self.frames.start();
    }
}
