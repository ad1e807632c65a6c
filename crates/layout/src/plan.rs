//! Per-row layout planning: column ordering, proportional widths, spacers.

use courrier_types::Block;
use itertools::Itertools as _;

use crate::cluster::Row;
use crate::config::{HORIZONTAL_GAP_THRESHOLD, LayoutConfig};

/// One column of a planned row.
#[derive(Debug, Clone)]
pub enum ColumnPlan {
    /// A content column. `width_percent` is an integer share of the content
    /// width and may fall outside `[0, 100]` after normalization (see
    /// [`plan_rows`]).
    Block { block: Block, width_percent: i32 },
    /// An empty column preserving an absolute horizontal gap from the
    /// canvas. Spacer widths are fractional and sit outside the 100%
    /// normalization of content columns.
    Spacer { width_percent: f32 },
}

/// A render-ready plan for one row.
#[derive(Debug, Clone, Default)]
pub struct RowPlan {
    /// Columns ordered left to right.
    pub columns: Vec<ColumnPlan>,
    /// Height in pixels of the vertical spacer preceding this row, if the
    /// canvas gap to the previous row warrants one.
    pub spacer_before: Option<f32>,
}

impl RowPlan {
    /// Content columns in order, skipping spacers.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.columns.iter().filter_map(|col| match col {
            ColumnPlan::Block { block, .. } => Some(block),
            ColumnPlan::Spacer { .. } => None,
        })
    }
}

/// Turns clustered rows into render plans.
///
/// Per row, blocks are ordered by `x` (stable) and assigned
/// `round(width / content_width * 100)` percent columns. If the rounded
/// percentages do not sum to 100, the signed residual is added entirely to
/// the FIRST column, even when that pushes it outside `[0, 100]`. The
/// preview renderer normalizes identically, so this quirk is contractual;
/// do not redistribute the residual.
pub fn plan_rows(rows: Vec<Row>, content_width: f32, config: &LayoutConfig) -> Vec<RowPlan> {
    let bounds: Vec<(f32, f32)> = rows.iter().map(|row| (row.min_y(), row.max_y())).collect();
    let mut vertical_spacers: Vec<Option<f32>> = vec![None];
    for ((_, prev_bottom), (next_top, _)) in bounds.iter().tuple_windows() {
        let gap = next_top - prev_bottom;
        let spacer =
            (gap > config.row_gap_threshold).then(|| gap.min(config.row_gap_cap));
        vertical_spacers.push(spacer);
    }

    rows.into_iter()
        .zip(vertical_spacers)
        .map(|(row, spacer_before)| RowPlan {
            columns: plan_columns(row, content_width, config),
            spacer_before,
        })
        .collect()
}

fn plan_columns(row: Row, content_width: f32, config: &LayoutConfig) -> Vec<ColumnPlan> {
    let mut blocks = row.blocks;
    blocks.sort_by(|a, b| a.rect().x.total_cmp(&b.rect().x));

    let mut percents: Vec<i32> = blocks
        .iter()
        .map(|b| (b.rect().width / content_width * 100.0).round() as i32)
        .collect();
    let sum: i32 = percents.iter().sum();
    if let Some(first) = percents.first_mut() {
        *first += 100 - sum;
    }

    if !config.preserve_horizontal_gaps {
        return blocks
            .into_iter()
            .zip(percents)
            .map(|(block, width_percent)| ColumnPlan::Block { block, width_percent })
            .collect();
    }

    // Alignment-aware variant: absolute x-gaps become explicit spacer
    // columns instead of being proportionally distributed.
    let spacer = |gap: f32| {
        (gap > HORIZONTAL_GAP_THRESHOLD).then(|| ColumnPlan::Spacer {
            width_percent: gap / content_width * 100.0,
        })
    };

    let mut columns = Vec::with_capacity(blocks.len() * 2 + 1);
    let mut cursor = 0.0;
    for (block, width_percent) in blocks.into_iter().zip(percents) {
        let rect = block.rect();
        columns.extend(spacer(rect.x - cursor));
        cursor = rect.right();
        columns.push(ColumnPlan::Block { block, width_percent });
    }
    columns.extend(spacer(content_width - cursor));
    columns
}
