//! Fixed parameters of the direction lookup table.
//!
//! These were previously scattered through the generator script and are now
//! collected here so the emitter and its tests share one source of truth.

/// Half-width of the square offset domain; the grid spans `[-RANGE, RANGE]`
/// on each axis.
pub const RANGE: i32 = 156;

/// Number of fixed decimal digits used for each emitted vector component.
pub const FRACTION_DIGITS: usize = 6;

/// File name of the generated C# source.
pub const OUTPUT_FILE_NAME: &str = "DirLut.cs";

/// Grid dimension for a given range: `2 * range + 1` cells per axis.
///
/// # Examples
/// ```
/// use dir_lut_gen::constants::grid_dim;
/// assert_eq!(grid_dim(0), 1);
/// assert_eq!(grid_dim(156), 313);
/// ```
#[expect(
    clippy::cast_sign_loss,
    reason = "Callers pass a nonnegative range, keeping 2 * range + 1 positive."
)]
#[must_use]
pub const fn grid_dim(range: i32) -> usize {
    (2 * range + 1) as usize
}
