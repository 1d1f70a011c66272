use rayon::prelude::*;

use pixelgrade_raster::{Raster, Rgba};

/// Apply a function to each pixel, one raster row per parallel task.
///
/// Source and destination rows are disjoint slices, so tasks write their
/// output slots without coordination. The destination must have the same
/// dimensions as the source; callers check this before dispatching.
pub fn par_iter_rows(
    src: &Raster,
    dst: &mut Raster,
    f: impl Fn(&Rgba, &mut Rgba) + Send + Sync,
) {
    let cols = src.width();

    src.as_slice()
        .par_chunks_exact(cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(cols))
        .for_each(|(src_row, dst_row)| {
            src_row
                .iter()
                .zip(dst_row.iter_mut())
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}
