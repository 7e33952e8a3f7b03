//! Direction helpers for integer grid offsets.
//! Small wrappers around [`glam::DVec2`] normalisation.

use glam::DVec2;

/// Returns the unit vector pointing from the origin toward `(dx, dy)`.
///
/// The origin offset has no direction and yields the zero vector.
///
/// # Examples
/// ```
/// use dir_lut_gen::vector_math::direction_at;
/// let v = direction_at(3, 4);
/// assert!((v.x - 0.6).abs() < 1e-12);
/// assert!((v.y - 0.8).abs() < 1e-12);
///
/// assert_eq!(direction_at(0, 0), glam::DVec2::ZERO);
/// ```
#[must_use]
pub fn direction_at(dx: i32, dy: i32) -> DVec2 {
    DVec2::new(f64::from(dx), f64::from(dy))
        .try_normalize()
        .unwrap_or(DVec2::ZERO)
}
