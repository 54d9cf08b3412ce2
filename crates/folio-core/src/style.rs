//! Reading and writing the inline CSS the tween driver touches.

/// Translation component of a computed `transform` value.
///
/// Understands `none`, `matrix(a, b, c, d, tx, ty)` and the 16-value
/// `matrix3d(...)`. Anything else reads as no translation.
pub fn parse_translate(transform: &str) -> (f32, f32) {
    let t = transform.trim();
    let (args, tx_at, ty_at, arity) = if let Some(rest) = t.strip_prefix("matrix3d(") {
        (rest, 12, 13, 16)
    } else if let Some(rest) = t.strip_prefix("matrix(") {
        (rest, 4, 5, 6)
    } else {
        return (0.0, 0.0);
    };
    let Some(args) = args.strip_suffix(')') else {
        return (0.0, 0.0);
    };
    let nums: Vec<f32> = args
        .split(',')
        .filter_map(|s| s.trim().parse::<f32>().ok())
        .collect();
    if nums.len() != arity {
        return (0.0, 0.0);
    }
    (nums[tx_at], nums[ty_at])
}

/// Computed `opacity`; unreadable values count as fully opaque.
pub fn parse_opacity(value: &str) -> f32 {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 1.0))
        .unwrap_or(1.0)
}

/// Inline `transform` for an element displaced by `(x, y)` pixels.
///
/// `centered` keeps the element's own center on the point, which is how the
/// cursor dot is positioned.
pub fn transform_value(x: f32, y: f32, centered: bool) -> String {
    if centered {
        format!("translate3d({x:.2}px, {y:.2}px, 0) translate(-50%, -50%)")
    } else {
        format!("translate3d({x:.2}px, {y:.2}px, 0)")
    }
}
