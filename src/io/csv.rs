//! CSV dump of an evaluated potential field.

use std::io::{self, Write};

use crate::grid::{Grid, PotentialField};

/// Writes one `x,y,potential` line per grid cell in row-major order.
///
/// Non-finite potentials are written as `inf`, `-inf` or `NaN`.
pub fn write_field_csv<W: Write>(mut w: W, grid: &Grid, field: &PotentialField) -> io::Result<()> {
    writeln!(w, "x,y,potential")?;
    let (x, y, v) = (grid.x(), grid.y(), field.values());
    for i in 0..grid.rows().min(v.nrows()) {
        for j in 0..grid.cols().min(v.ncols()) {
            writeln!(w, "{:.16e},{:.16e},{:.16e}", x[(i, j)], y[(i, j)], v[(i, j)])?;
        }
    }
    Ok(())
}
