// Host-side tests for constants and their relationships.
// The web crate is wasm-only, so these exercise folio-core directly.

use folio_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn durations_are_positive() {
    assert!(CURSOR_FOLLOW_SEC > 0.0);
    assert!(MAGNETIC_FOLLOW_SEC > 0.0);
    assert!(MAGNETIC_RETURN_SEC > 0.0);
    assert!(HERO_DURATION_SEC > 0.0);
    assert!(REVEAL_DURATION_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn fractions_are_within_unit_range() {
    assert!(MAGNETIC_STRENGTH > 0.0 && MAGNETIC_STRENGTH < 1.0);
    assert!(REVEAL_START_FRACTION > 0.0 && REVEAL_START_FRACTION <= 1.0);
    assert!(CAMERA_FOLLOW > 0.0 && CAMERA_FOLLOW < 1.0);
    for c in PARTICLE_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn camera_sees_the_whole_cloud() {
    assert!(CAMERA_NEAR > 0.0);
    assert!(CAMERA_FAR > CAMERA_NEAR);
    // Farthest particle corner from the eye must lie inside the far plane.
    let farthest = CAMERA_Z + PARTICLE_HALF_EXTENT;
    assert!(farthest < CAMERA_FAR);
    assert!(CAMERA_FOV_DEG > 0.0 && CAMERA_FOV_DEG < 180.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hero_stagger_is_shorter_than_a_fragment() {
    assert!(HERO_STAGGER_SEC < HERO_DURATION_SEC);
    assert!(HERO_DELAY_SEC >= 0.0);
}

#[test]
fn status_texts_are_distinct() {
    let texts = [
        STATUS_SENDING,
        STATUS_SENT,
        STATUS_FAILED,
        STATUS_NETWORK_ERROR,
    ];
    for (i, a) in texts.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &texts[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert!(CONTACT_ENDPOINT.starts_with("https://"));
}
