use crate::animate::Animator;
use crate::dom::{self, Listener};
use folio_core::{
    magnetic_offset, CursorState, Ease, SiteConfig, TweenVars, CURSOR_FOLLOW_SEC,
    MAGNETIC_ELASTIC_AMPLITUDE, MAGNETIC_ELASTIC_PERIOD, MAGNETIC_FOLLOW_SEC, MAGNETIC_RETURN_SEC,
};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn sync_grow_class(cursor: &web::HtmlElement, class: &str, grown: bool) {
    let cl = cursor.class_list();
    _ = if grown { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Custom cursor: eased follow of the pointer plus the grown state over interactive elements.
pub fn wire_cursor(
    document: &web::Document,
    config: &SiteConfig,
    animator: &Animator,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let cursor: web::HtmlElement = dom::require(document, &config.cursor, "HtmlElement")?;
    let key = animator.register(&cursor, true);
    let state = Rc::new(RefCell::new(CursorState::default()));
    let class = config.cursor_grow_class;

    {
        let state = state.clone();
        let animator = animator.clone();
        Listener::new(window.as_ref(), "pointermove", move |ev: web::PointerEvent| {
            let target = state
                .borrow_mut()
                .pointer_moved(ev.client_x() as f32, ev.client_y() as f32);
            animator.to(
                key,
                TweenVars::new(CURSOR_FOLLOW_SEC)
                    .translate(target.x, target.y)
                    .ease(Ease::Power3Out),
            );
        })
        .forget();
    }

    let interactive = dom::query_all(document, config.groups.interactive);
    for el in &interactive {
        let (state_in, cursor_in) = (state.clone(), cursor.clone());
        Listener::new(el.as_ref(), "pointerenter", move |_: web::Event| {
            let mut st = state_in.borrow_mut();
            st.enter_interactive();
            sync_grow_class(&cursor_in, class, st.grown);
        })
        .forget();

        let (state_out, cursor_out) = (state.clone(), cursor.clone());
        Listener::new(el.as_ref(), "pointerleave", move |_: web::Event| {
            let mut st = state_out.borrow_mut();
            st.leave_interactive();
            sync_grow_class(&cursor_out, class, st.grown);
        })
        .forget();
    }

    // Leaving the window may skip an element's leave event; always shrink then.
    Listener::new(window.as_ref(), "mouseout", move |ev: web::MouseEvent| {
        if ev.related_target().is_some() {
            return;
        }
        let mut st = state.borrow_mut();
        st.leave_window();
        sync_grow_class(&cursor, class, st.grown);
    })
    .forget();

    log::info!("[cursor] following pointer; {} interactive elements", interactive.len());
    Ok(())
}

/// Magnetic buttons: pulled toward the pointer while hovered, elastic return on leave.
pub fn wire_magnetic(document: &web::Document, config: &SiteConfig, animator: &Animator) -> usize {
    let buttons = dom::query_all(document, config.groups.magnetic);
    for btn in &buttons {
        let key = animator.register(btn, false);

        let (btn_move, animator_move) = (btn.clone(), animator.clone());
        Listener::new(btn.as_ref(), "pointermove", move |ev: web::PointerEvent| {
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let offset = magnetic_offset(pointer, dom::rect_of(&btn_move));
            animator_move.to(
                key,
                TweenVars::new(MAGNETIC_FOLLOW_SEC)
                    .translate(offset.x, offset.y)
                    .ease(Ease::Power3Out),
            );
        })
        .forget();

        let animator_leave = animator.clone();
        Listener::new(btn.as_ref(), "pointerleave", move |_: web::Event| {
            animator_leave.to(
                key,
                TweenVars::new(MAGNETIC_RETURN_SEC)
                    .translate(0.0, 0.0)
                    .ease(Ease::elastic_out(
                        MAGNETIC_ELASTIC_AMPLITUDE,
                        MAGNETIC_ELASTIC_PERIOD,
                    )),
            );
        })
        .forget();
    }
    buttons.len()
}
