use crate::animate::Animator;
use crate::dom::{self, Listener};
use folio_core::style::transform_value;
use folio_core::{
    parse_delay, Ease, ElementKey, GalleryScrub, RevealQueue, SiteConfig, TweenVars,
    GALLERY_REFRESH_EVENTS, REVEAL_CHECK_EVENTS, REVEAL_DURATION_SEC,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

struct PendingReveal {
    el: web::HtmlElement,
    key: ElementKey,
    delay: f32,
}

/// Fire-once reveal of `.reveal-up`-style elements as they scroll into view.
///
/// The window listeners are released once every element has been revealed.
pub fn wire_reveal(
    document: &web::Document,
    config: &SiteConfig,
    animator: &Animator,
) -> anyhow::Result<usize> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let queue = RevealQueue::new(dom::query_all(document, config.groups.reveal).into_iter().map(
        |el| {
            let raw = el
                .style()
                .get_property_value("transition-delay")
                .unwrap_or_default();
            PendingReveal {
                key: animator.register(&el, false),
                delay: parse_delay(&raw),
                el,
            }
        },
    ));
    let count = queue.len();
    if count == 0 {
        return Ok(0);
    }

    let queue = Rc::new(RefCell::new(queue));
    let listeners: Rc<RefCell<Vec<Listener>>> = Rc::default();
    let animator = animator.clone();
    let check: Rc<dyn Fn()> = {
        let (queue, listeners) = (queue.clone(), listeners.clone());
        Rc::new(move || {
            let viewport_h = dom::viewport_size().1 as f32;
            let fired = queue.borrow_mut().poll(viewport_h, |item| {
                item.el.get_bounding_client_rect().top() as f32
            });
            for item in fired {
                animator.to(
                    item.key,
                    TweenVars::new(REVEAL_DURATION_SEC)
                        .opacity(1.0)
                        .y(0.0)
                        .delay(item.delay)
                        .ease(Ease::Power3Out),
                );
            }
            if queue.borrow().is_empty() {
                // Detach after the running handler returns.
                let done = std::mem::take(&mut *listeners.borrow_mut());
                if !done.is_empty() {
                    spawn_local(async move {
                        drop(done);
                        log::debug!("[reveal] all elements revealed; listeners released");
                    });
                }
            }
        })
    };

    // Elements already past the start line reveal right away.
    check();
    if queue.borrow().is_empty() {
        return Ok(count);
    }
    listeners
        .borrow_mut()
        .extend(REVEAL_CHECK_EVENTS.iter().map(|&event| {
            let check = check.clone();
            Listener::new(window.as_ref(), event, move |_: web::Event| check())
        }));
    Ok(count)
}

/// Pinned section whose vertical scroll drives the gallery track sideways.
struct GalleryPin {
    track: web::HtmlElement,
    section: web::HtmlElement,
    spacer: web::HtmlElement,
    scrub: Cell<GalleryScrub>,
}

impl GalleryPin {
    /// Re-measure overflow and resize the spacer; layout may have changed.
    fn refresh(&self) {
        let scrub = GalleryScrub::measure(
            self.track.scroll_width() as f32,
            self.section.offset_width() as f32,
        );
        let height = scrub.spacer_height(self.section.offset_height() as f32);
        _ = self
            .spacer
            .style()
            .set_property("height", &format!("{height}px"));
        self.scrub.set(scrub);
        log::debug!(
            "[gallery] refreshed: scroll region {}px",
            scrub.region_length()
        );
    }

    fn update(&self) {
        let spacer_top = self.spacer.get_bounding_client_rect().top() as f32;
        let x = self.scrub.get().translation(spacer_top);
        _ = self
            .track
            .style()
            .set_property("transform", &transform_value(x, 0.0, false));
    }
}

fn wrap_in_spacer(
    document: &web::Document,
    section: &web::HtmlElement,
) -> anyhow::Result<web::HtmlElement> {
    let spacer = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    spacer.set_class_name("pin-spacer");
    let parent = section
        .parent_node()
        .ok_or_else(|| anyhow::anyhow!("gallery section is detached"))?;
    let section_node: &web::Node = section;
    parent
        .insert_before(&spacer, Some(section_node))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    spacer
        .append_child(section)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let style = section.style();
    _ = style.set_property("position", "sticky");
    _ = style.set_property("top", "0px");
    Ok(spacer)
}

/// Horizontal gallery. Returns `Ok(false)` when the page has no gallery.
pub fn wire_gallery(document: &web::Document, config: &SiteConfig) -> anyhow::Result<bool> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let track = dom::query_as::<web::HtmlElement>(document, &config.gallery_track, "HtmlElement")?;
    let section =
        dom::query_as::<web::HtmlElement>(document, &config.gallery_section, "HtmlElement")?;
    let (Some(track), Some(section)) = (track, section) else {
        log::debug!("[gallery] track or section absent; horizontal scroll disabled");
        return Ok(false);
    };

    let spacer = wrap_in_spacer(document, &section)?;
    let pin = Rc::new(GalleryPin {
        track,
        section,
        spacer,
        scrub: Cell::new(GalleryScrub::default()),
    });
    pin.refresh();
    pin.update();

    let on_scroll = pin.clone();
    Listener::new(window.as_ref(), "scroll", move |_: web::Event| on_scroll.update()).forget();
    // Late images and fonts widen the track after mount.
    for event in GALLERY_REFRESH_EVENTS {
        let pin = pin.clone();
        Listener::new(window.as_ref(), event, move |_: web::Event| {
            pin.refresh();
            pin.update();
        })
        .forget();
    }
    Ok(true)
}
