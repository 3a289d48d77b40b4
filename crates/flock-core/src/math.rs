//! Vector helpers shared by the agent and flock crates.
//!
//! `Vec3` is `glam::Vec3`.  The helpers here encode the numeric policies the
//! steering code relies on: normalising a zero vector yields zero (always via
//! `Vec3::normalize_or_zero`), and magnitude limits compare squared lengths
//! so the common "already within bounds" case never takes a square root.

pub use glam::Vec3;

/// Shrink `v` to unit length if it is longer than 1; shorter vectors pass
/// through untouched.
#[inline]
pub fn clamp_unit(v: Vec3) -> Vec3 {
    if v.length_squared() > 1.0 {
        v.normalize_or_zero()
    } else {
        v
    }
}

/// Limit the magnitude of `v` to `max`.
///
/// Returns `None` when `v` is already within bounds so callers can skip a
/// write.  A zero vector is always within bounds, as is any non-finite one.
#[inline]
pub fn limit_length(v: Vec3, max: f32) -> Option<Vec3> {
    let length_squared = v.length_squared();
    if length_squared.is_finite() {
        return (length_squared > max * max).then(|| v.normalize_or_zero() * max);
    }

    // Squared length overflowed: measure a copy scaled into [-1, 1].
    let scale = v.abs().max_element();
    if !scale.is_finite() {
        return None;
    }
    let scaled = v / scale;
    (scaled.length() * scale > max).then(|| scaled.normalize_or_zero() * max)
}

/// Linear blend from `from` to `to` with `t` clamped to `[0, 1]`, so a long
/// frame never overshoots the target.
#[inline]
pub fn lerp_clamped(from: Vec3, to: Vec3, t: f32) -> Vec3 {
    from.lerp(to, t.clamp(0.0, 1.0))
}
