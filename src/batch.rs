use crate::{
    crop,
    encode::{self},
    error::PressResult,
    raster::Raster,
    target::{AssetTarget, GeneratedAsset},
};

/// Per-step progress callback: `(completed, total)`, invoked after each
/// target finishes, `completed` strictly increasing up to `total`.
pub type ProgressFn<'a> = &'a mut dyn FnMut(usize, usize);

/// Resize and encode `source_bytes` against every target, in order.
///
/// The source decodes exactly once per call; a decode failure fails the
/// whole batch with no partial results. Targets run strictly sequentially
/// so progress stays monotonic and only one working surface is alive at a
/// time. The first per-target failure aborts the remaining batch; callers
/// wanting per-target recovery should invoke with singleton target lists.
#[tracing::instrument(skip_all, fields(targets = targets.len()))]
pub fn generate_assets(
    source_bytes: &[u8],
    targets: &[AssetTarget],
    mut on_progress: Option<ProgressFn<'_>>,
) -> PressResult<Vec<GeneratedAsset>> {
    let source = Raster::decode(source_bytes)?;
    tracing::debug!(
        width = source.width(),
        height = source.height(),
        "decoded batch source"
    );

    let total = targets.len();
    let mut results = Vec::with_capacity(total);

    for (i, target) in targets.iter().enumerate() {
        let surface = crop::crop_cover(&source, target.width, target.height)?;
        let blob = encode::encode(&surface, target.format)?;
        tracing::debug!(name = %target.name, bytes = blob.len(), "generated asset");

        results.push(GeneratedAsset {
            target: target.clone(),
            blob,
        });
        if let Some(cb) = on_progress.as_mut() {
            cb(i + 1, total);
        }
    }

    Ok(results)
}
