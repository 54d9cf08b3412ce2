use crate::animate::Animator;
use crate::dom;
use folio_core::{
    stagger, Ease, SiteConfig, TweenVars, HERO_DELAY_SEC, HERO_DURATION_SEC, HERO_STAGGER_SEC,
};
use web_sys as web;

/// One-shot staggered entrance of the hero title fragments. Returns how many were found.
pub fn play(document: &web::Document, config: &SiteConfig, animator: &Animator) -> usize {
    let fragments = dom::query_all(document, config.groups.hero_fragments);
    for (i, el) in fragments.iter().enumerate() {
        let key = animator.register(el, false);
        animator.to(
            key,
            TweenVars::new(HERO_DURATION_SEC)
                .opacity(1.0)
                .y(0.0)
                .delay(stagger(HERO_DELAY_SEC, HERO_STAGGER_SEC, i))
                .ease(Ease::Power3Out),
        );
    }
    fragments.len()
}
