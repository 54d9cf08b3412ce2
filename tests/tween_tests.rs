// Host-side tests for the tween engine.
// The web crate is wasm-only, so these exercise folio-core directly.

use folio_core::style::{parse_opacity, parse_translate, transform_value};
use folio_core::{
    stagger, Ease, ElementRegistry, Prop, TweenVars, Tweener, HERO_DELAY_SEC, HERO_DURATION_SEC,
    HERO_STAGGER_SEC,
};

const EPS: f32 = 1e-4;

#[test]
fn unseeded_values_rest_at_defaults() {
    let t = Tweener::new();
    assert_eq!(t.value(7, Prop::X), 0.0);
    assert_eq!(t.value(7, Prop::Y), 0.0);
    assert_eq!(t.value(7, Prop::Opacity), 1.0);
    assert!(t.is_idle());
}

#[test]
fn tween_reaches_target_exactly_and_retires() {
    let mut t = Tweener::new();
    t.seed(1, Prop::Opacity, 0.0);
    t.to(1, TweenVars::new(1.0).opacity(1.0).ease(Ease::Linear), 0.0);
    assert!(!t.is_idle());

    let changed = t.advance(0.5);
    assert_eq!(changed.as_slice(), &[1]);
    assert!((t.value(1, Prop::Opacity) - 0.5).abs() < EPS);

    t.advance(1.0);
    assert_eq!(t.value(1, Prop::Opacity), 1.0);
    assert!(t.is_idle());
    assert!(t.advance(2.0).is_empty());
}

#[test]
fn delay_holds_value_until_start() {
    let mut t = Tweener::new();
    t.seed(3, Prop::Y, 40.0);
    t.to(3, TweenVars::new(1.0).y(0.0).delay(0.5), 0.0);

    assert!(t.advance(0.25).is_empty());
    assert_eq!(t.value(3, Prop::Y), 40.0);

    t.advance(0.5);
    assert_eq!(t.value(3, Prop::Y), 40.0);
    t.advance(1.0);
    let mid = t.value(3, Prop::Y);
    assert!(mid < 40.0 && mid > 0.0);
    t.advance(1.5);
    assert_eq!(t.value(3, Prop::Y), 0.0);
}

#[test]
fn negative_delay_is_ignored() {
    let vars = TweenVars::new(1.0).delay(-3.0);
    assert_eq!(vars.delay, 0.0);
}

#[test]
fn latest_tween_overwrites_and_continues_from_current_value() {
    let mut t = Tweener::new();
    t.to(0, TweenVars::new(1.0).translate(100.0, 0.0).ease(Ease::Linear), 0.0);
    t.advance(0.5);
    assert!((t.value(0, Prop::X) - 50.0).abs() < EPS);

    // New target half way through: starts from 50, not from 0 or 100.
    t.to(0, TweenVars::new(1.0).translate(-50.0, 0.0).ease(Ease::Linear), 0.5);
    t.advance(1.0);
    assert!((t.value(0, Prop::X) - 0.0).abs() < EPS);
    t.advance(1.5);
    assert_eq!(t.value(0, Prop::X), -50.0);
}

#[test]
fn untouched_properties_keep_running() {
    let mut t = Tweener::new();
    t.seed(2, Prop::Opacity, 0.0);
    t.to(2, TweenVars::new(1.0).opacity(1.0), 0.0);
    t.to(2, TweenVars::new(0.5).translate(10.0, 10.0), 0.0);
    t.advance(0.5);
    assert_eq!(t.value(2, Prop::X), 10.0);
    let opacity = t.value(2, Prop::Opacity);
    assert!(opacity > 0.0 && opacity < 1.0);
    assert!(!t.is_idle());
    t.advance(1.0);
    assert_eq!(t.value(2, Prop::Opacity), 1.0);
    assert!(t.is_idle());
}

#[test]
fn zero_duration_completes_on_next_advance() {
    let mut t = Tweener::new();
    t.to(4, TweenVars::new(0.0).translate(3.0, 4.0), 10.0);
    t.advance(10.0);
    assert_eq!(t.value(4, Prop::X), 3.0);
    assert_eq!(t.value(4, Prop::Y), 4.0);
    assert!(t.is_idle());
}

#[test]
fn changed_keys_are_reported_once_each() {
    let mut t = Tweener::new();
    t.to(9, TweenVars::new(1.0).translate(1.0, 1.0).opacity(0.5), 0.0);
    t.to(5, TweenVars::new(1.0).y(1.0), 0.0);
    let changed = t.advance(0.1);
    assert_eq!(changed.as_slice(), &[5, 9]);
}

#[test]
fn parses_computed_translation() {
    assert_eq!(parse_translate("none"), (0.0, 0.0));
    assert_eq!(parse_translate("matrix(1, 0, 0, 1, 12.5, -40)"), (12.5, -40.0));
    assert_eq!(
        parse_translate("matrix3d(1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 7, 8, 0, 1)"),
        (7.0, 8.0)
    );
    assert_eq!(parse_translate("matrix(1, 0, 0, 1, 5)"), (0.0, 0.0));
    assert_eq!(parse_translate("rotate(45deg)"), (0.0, 0.0));
}

#[test]
fn parses_computed_opacity() {
    assert_eq!(parse_opacity("0"), 0.0);
    assert_eq!(parse_opacity(" 0.25 "), 0.25);
    assert_eq!(parse_opacity("3"), 1.0);
    assert_eq!(parse_opacity(""), 1.0);
}

#[test]
fn formats_transform() {
    assert_eq!(transform_value(1.0, -2.5, false), "translate3d(1.00px, -2.50px, 0)");
    assert_eq!(
        transform_value(10.0, 20.0, true),
        "translate3d(10.00px, 20.00px, 0) translate(-50%, -50%)"
    );
}

#[test]
fn stagger_offsets_each_item() {
    assert_eq!(stagger(0.5, 0.1, 0), 0.5);
    assert!((stagger(0.5, 0.1, 3) - 0.8).abs() < 1e-6);
    assert_eq!(stagger(-1.0, 0.25, 2), 0.5);
}

#[test]
fn hero_fragments_start_in_document_order() {
    for i in 0..6 {
        let expected = 0.5 + 0.1 * i as f32;
        let got = stagger(HERO_DELAY_SEC, HERO_STAGGER_SEC, i);
        assert!((got - expected).abs() < 1e-6, "fragment {}: {}", i, got);
    }
}

#[test]
fn hero_fragments_rest_until_their_turn() {
    let mut t = Tweener::new();
    let count = 4u32;
    for i in 0..count {
        t.seed(i, Prop::Opacity, 0.0);
        t.seed(i, Prop::Y, 50.0);
        t.to(
            i,
            TweenVars::new(HERO_DURATION_SEC)
                .opacity(1.0)
                .y(0.0)
                .delay(stagger(HERO_DELAY_SEC, HERO_STAGGER_SEC, i as usize)),
            0.0,
        );
    }

    // Fragment 2 starts at 0.7 s; just before that only 0 and 1 have moved.
    let changed = t.advance(0.69);
    assert_eq!(changed.as_slice(), &[0, 1]);
    assert_eq!(t.value(2, Prop::Opacity), 0.0);
    assert_eq!(t.value(2, Prop::Y), 50.0);
    assert_eq!(t.value(3, Prop::Y), 50.0);
    assert!(t.value(0, Prop::Opacity) > t.value(1, Prop::Opacity));

    t.advance(0.75);
    assert!(t.value(2, Prop::Opacity) > 0.0);
    assert_eq!(t.value(3, Prop::Opacity), 0.0);

    // Last fragment finishes at 0.8 + 1.0 s.
    t.advance(1.81);
    for i in 0..count {
        assert_eq!(t.value(i, Prop::Opacity), 1.0);
        assert_eq!(t.value(i, Prop::Y), 0.0);
    }
    assert!(t.is_idle());
}

#[test]
fn registry_gives_one_key_per_element() {
    let mut registry = ElementRegistry::new();
    let (button, created) = registry.get_or_insert_with(|name| *name == "button", || "button");
    assert!(created);
    let (title, _) = registry.get_or_insert_with(|name| *name == "title", || "title");
    assert_ne!(button, title);

    // Same element matched by a second selector.
    let (again, created) = registry.get_or_insert_with(|name| *name == "button", || "button");
    assert_eq!(again, button);
    assert!(!created);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get(button), Some(&"button"));
    assert_eq!(registry.find(|name| *name == "missing"), None);
}

#[test]
fn shared_key_keeps_one_transform_state() {
    // A magnetic button that also reveals on scroll.
    let mut registry = ElementRegistry::new();
    let mut t = Tweener::new();
    let (key, _) = registry.get_or_insert_with(|id| *id == 7, || 7);
    t.seed(key, Prop::Y, 40.0);

    let (reveal_key, created) = registry.get_or_insert_with(|id| *id == 7, || 7);
    assert!(!created);
    t.to(reveal_key, TweenVars::new(1.0).y(0.0), 0.0);
    t.advance(1.0);

    // A later magnetic move starts from the revealed position, not from 40.
    t.to(key, TweenVars::new(0.5).translate(6.0, 3.0).ease(Ease::Linear), 1.0);
    t.advance(1.25);
    assert!((t.value(key, Prop::Y) - 1.5).abs() < 1e-4);
}
