//! Email-safe dimension validation.
//!
//! Two different guards operate on two different populations: blocks whose
//! raw geometry falls outside the email-safe envelope are *rejected* (they
//! would not render predictably anywhere), while the survivors have their
//! coordinates *clamped* into the same envelope to absorb float slack from
//! the editor (a resize handle can leave `width: 150.0001` behind).

use courrier_types::{Block, Diagnostics};

/// Width range, in pixels, empirically known to render predictably across
/// major email clients.
pub const MIN_BLOCK_WIDTH: f32 = 150.0;
pub const MAX_BLOCK_WIDTH: f32 = 500.0;
/// Height range of the same envelope.
pub const MIN_BLOCK_HEIGHT: f32 = 60.0;
pub const MAX_BLOCK_HEIGHT: f32 = 400.0;

/// Filters the raw block list down to renderable blocks, preserving input
/// order. Never fails; an empty result is a valid outcome and downstream
/// renders an empty-but-valid document.
pub fn validate_blocks(blocks: &[Block], diags: &mut Diagnostics) -> Vec<Block> {
    blocks
        .iter()
        .filter_map(|block| {
            let Some(pos) = block.position else {
                diags.warn("block has no position and was dropped", Some(&block.id));
                return None;
            };
            // NaN fails both comparisons, so non-finite geometry is rejected
            // along with out-of-envelope geometry.
            let width_ok = pos.width >= MIN_BLOCK_WIDTH && pos.width <= MAX_BLOCK_WIDTH;
            let height_ok = pos.height >= MIN_BLOCK_HEIGHT && pos.height <= MAX_BLOCK_HEIGHT;
            if !width_ok || !height_ok {
                diags.warn(
                    format!(
                        "block dimensions {}x{} outside the email-safe envelope \
                         [{MIN_BLOCK_WIDTH}-{MAX_BLOCK_WIDTH}]x[{MIN_BLOCK_HEIGHT}-{MAX_BLOCK_HEIGHT}], dropped",
                        pos.width, pos.height
                    ),
                    Some(&block.id),
                );
                return None;
            }
            let mut block = block.clone();
            let mut pos = pos;
            pos.x = pos.x.max(0.0);
            pos.y = pos.y.max(0.0);
            pos.width = pos.width.clamp(MIN_BLOCK_WIDTH, MAX_BLOCK_WIDTH);
            pos.height = pos.height.clamp(MIN_BLOCK_HEIGHT, MAX_BLOCK_HEIGHT);
            block.position = Some(pos);
            Some(block)
        })
        .collect()
}
