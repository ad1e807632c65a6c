//! Vertical-overlap row clustering.
//!
//! A single-pass, order-dependent greedy pass. The greedy first-fit
//! semantics are a public contract of the builder: the live preview and the
//! emailed output must group blocks identically, so this must not be
//! replaced by an optimal interval-partitioning algorithm even where that
//! would group "better".

use courrier_types::Block;

use crate::config::LayoutConfig;

/// An ordered cluster of blocks sharing a vertical band. Ephemeral: rows are
/// derived fresh on every invocation and carry no persisted identity.
#[derive(Debug, Clone, Default)]
pub struct Row {
    /// Members in insertion (creation) order, not yet ordered by `x`.
    pub blocks: Vec<Block>,
}

impl Row {
    /// Top of the row's vertical band: the smallest member `y`.
    pub fn min_y(&self) -> f32 {
        self.blocks
            .iter()
            .map(|b| b.rect().y)
            .fold(f32::INFINITY, f32::min)
    }

    /// Bottom of the row's vertical band: the largest member bottom edge.
    pub fn max_y(&self) -> f32 {
        self.blocks
            .iter()
            .map(|b| b.rect().bottom())
            .fold(f32::NEG_INFINITY, f32::max)
    }

    fn accepts(&self, block: &Block, config: &LayoutConfig) -> bool {
        let rect = block.rect();
        let v_tol = config.row_vertical_tolerance;
        let separated =
            rect.bottom() < self.min_y() - v_tol || rect.y > self.max_y() + v_tol;
        if separated {
            return false;
        }
        // Vertically compatible; the block must additionally clear every
        // member horizontally or it becomes a new row, not a column.
        let h_tol = config.column_horizontal_tolerance;
        self.blocks.iter().all(|member| {
            let m = member.rect();
            rect.right() < m.x - h_tol || rect.x > m.right() + h_tol
        })
    }
}

/// Partitions validated blocks into ordered rows.
///
/// Blocks are visited in `y` order (stable sort, ties keep original index)
/// and appended to the first existing row that accepts them; a block no row
/// accepts opens a new row. Never fails: a pathological layout where every
/// block conflicts simply yields one row per block.
pub fn cluster_rows(blocks: Vec<Block>, config: &LayoutConfig) -> Vec<Row> {
    let mut sorted = blocks;
    sorted.sort_by(|a, b| a.rect().y.total_cmp(&b.rect().y));

    let mut rows: Vec<Row> = Vec::new();
    for block in sorted {
        match rows.iter_mut().find(|row| row.accepts(&block, config)) {
            Some(row) => row.blocks.push(block),
            None => rows.push(Row { blocks: vec![block] }),
        }
    }
    rows
}
