//! Renders the C# source text for the direction table.
//!
//! The emitted layout is an interface with the consuming C# build: the
//! namespace, class, constant and table names, and the literal syntax of
//! every cell must stay exactly as the game expects them.

use std::fmt::Write;

use crate::constants::{grid_dim, FRACTION_DIGITS};
use crate::vector_math::direction_at;

/// Warning comment placed on the first line of the generated file.
pub const GENERATED_FILE_HEADER: &str = "// *** AUTO-GENERATED – DO NOT EDIT BY HAND ***\n";

/// Renders the complete `DirLut.cs` source for the given range.
///
/// Rows are indexed by `dy` from `-range` to `range`, columns by `dx`
/// likewise, so the consumer can address the table as
/// `Table[dy + Range, dx + Range]`. The output is fully deterministic.
///
/// # Examples
/// ```
/// let source = dir_lut_gen::render_source(1);
/// assert!(source.contains("public const int Range = 1;"));
/// assert!(source.contains("new Vector2[3,3]"));
/// ```
#[must_use]
pub fn render_source(range: i32) -> String {
    let dim = grid_dim(range);
    // Each populated cell is about 30 bytes of literal text.
    let mut out = String::with_capacity(dim * dim * 32 + 256);
    out.push_str(GENERATED_FILE_HEADER);
    out.push_str("using System.Numerics;\n\n");
    out.push_str("namespace Game.MathTables\n{\n");
    out.push_str("    internal static partial class DirLut\n    {\n");
    let _ = writeln!(out, "        public const int Range = {range};");
    let _ = writeln!(
        out,
        "        public static readonly Vector2[,] Table = new Vector2[{dim},{dim}]"
    );
    out.push_str("        {\n");
    for dy in -range..=range {
        push_row(&mut out, dy, range);
    }
    out.push_str("        };\n    }\n}\n");
    out
}

fn push_row(out: &mut String, dy: i32, range: i32) {
    out.push_str("            { ");
    for dx in -range..=range {
        push_cell(out, dx, dy);
        if dx < range {
            out.push_str(", ");
        }
    }
    out.push_str(" },\n");
}

fn push_cell(out: &mut String, dx: i32, dy: i32) {
    if dx == 0 && dy == 0 {
        out.push_str("new(0f,0f)");
        return;
    }
    let v = direction_at(dx, dy);
    let _ = write!(
        out,
        "new({:.prec$}f,{:.prec$}f)",
        v.x,
        v.y,
        prec = FRACTION_DIGITS
    );
}
