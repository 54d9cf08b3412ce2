#![cfg(target_arch = "wasm32")]
use folio_core::SiteConfig;
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod animate;
mod background;
mod dom;
mod events;
mod frame;
mod hero;
mod render;

static TORN_DOWN: AtomicBool = AtomicBool::new(false);

thread_local! {
    static BACKGROUND: RefCell<Option<background::ParticleBackground>> = const { RefCell::new(None) };
}

fn report(feature: &str, result: anyhow::Result<()>) {
    match result {
        Ok(()) => log::info!("[{}] mounted", feature),
        Err(e) => log::error!("[{}] not mounted: {:?}", feature, e),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        let ready = document.clone();
        dom::Listener::new(document.as_ref(), "DOMContentLoaded", move |_: web::Event| {
            mount(&ready)
        })
        .forget();
    } else {
        mount(&document);
    }
    Ok(())
}

/// Stop the particle background and release its listeners, e.g. before a client-side navigation.
#[wasm_bindgen]
pub fn teardown() {
    TORN_DOWN.store(true, Ordering::SeqCst);
    BACKGROUND.with(|slot| {
        if let Some(mut bg) = slot.borrow_mut().take() {
            bg.stop();
        }
    });
}

// Every component mounts on its own; one failing leaves the others working.
fn mount(document: &web::Document) {
    static MOUNTED: AtomicBool = AtomicBool::new(false);
    if MOUNTED.swap(true, Ordering::SeqCst) {
        return;
    }
    let config = SiteConfig::default();
    for spec in config.targets() {
        if document.query_selector(spec.selector).ok().flatten().is_none() {
            log::debug!("{} ({}) not on page", spec.name, spec.selector);
        }
    }

    let animator = animate::Animator::new();
    report(
        "cursor",
        events::pointer::wire_cursor(document, &config, &animator),
    );
    log::info!(
        "[magnetic] {} buttons",
        events::pointer::wire_magnetic(document, &config, &animator)
    );
    log::info!(
        "[hero] {} fragments",
        hero::play(document, &config, &animator)
    );
    report(
        "reveal",
        events::scroll::wire_reveal(document, &config, &animator).map(|n| {
            log::info!("[reveal] {} elements", n);
        }),
    );
    report(
        "gallery",
        events::scroll::wire_gallery(document, &config).map(|active| {
            if !active {
                log::info!("[gallery] no gallery on page");
            }
        }),
    );
    report(
        "contact",
        events::form::wire_contact_form(document, &config),
    );

    let document = document.clone();
    spawn_local(async move {
        match background::ParticleBackground::mount(&document, &config).await {
            Ok(_) if TORN_DOWN.load(Ordering::SeqCst) => {
                log::info!("[background] torn down before it started");
            }
            Ok(mut bg) => {
                bg.start();
                BACKGROUND.with(|slot| *slot.borrow_mut() = Some(bg));
            }
            Err(e) => log::error!("[background] init error: {:?}", e),
        }
    });
}
