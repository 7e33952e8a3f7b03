//! Build-time generator for `DirLut.cs`, the pre-normalised direction
//! lookup table consumed by the game's C# codebase.
//!
//! The table maps every integer offset `(dx, dy)` within
//! `[-RANGE, RANGE]` on each axis to the unit vector pointing toward the
//! offset, with the zero vector at the origin. Generation is
//! deterministic: rendering the same range twice yields byte-identical
//! output, so the tool can be rerun freely.

pub mod constants;
pub mod emit;
pub mod logging;
pub mod output;
pub mod vector_math;

pub use constants::{grid_dim, FRACTION_DIGITS, OUTPUT_FILE_NAME, RANGE};
pub use emit::render_source;
pub use logging::init as init_logging;
pub use output::{write_artifact, GeneratedArtifact};
pub use vector_math::direction_at;

use std::path::Path;

use color_eyre::eyre::Result;

/// Renders the table for [`RANGE`] and writes it into `dir`.
///
/// # Examples
/// ```rust,no_run
/// use color_eyre::eyre::Result;
/// fn main() -> Result<()> {
///     let artifact = dir_lut_gen::generate_into(".")?;
///     println!("Wrote {}", artifact.path.display());
///     Ok(())
/// }
/// ```
///
/// # Errors
/// Propagates filesystem failures from [`write_artifact`]; rendering
/// itself cannot fail.
pub fn generate_into(dir: impl AsRef<Path>) -> Result<GeneratedArtifact> {
    log::debug!("rendering direction table for range {RANGE}");
    let source = render_source(RANGE);
    write_artifact(dir, &source)
}
