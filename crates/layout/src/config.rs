use crate::LayoutError;

/// Tolerances and switches for the row clustering and planning passes.
///
/// Historically these constants drifted across re-implementations of the
/// same algorithm (vertical tolerance 50 vs 15, spacer cap 50 vs none).
/// They are named fields here so the live preview and the email renderer
/// share one parameterization, and so the drift cannot come back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Two blocks belong to the same row when their vertical bands are
    /// within this distance of each other, in pixels.
    ///
    /// Defaults to `50.0`.
    pub row_vertical_tolerance: f32,
    /// A block conflicts with a row member when their horizontal extents
    /// overlap within this tolerance, in pixels. Conflicting blocks open a
    /// new row instead of becoming a column.
    ///
    /// Defaults to `15.0`.
    pub column_horizontal_tolerance: f32,
    /// A vertical spacer is emitted between consecutive rows only when the
    /// gap between them exceeds this threshold, in pixels.
    ///
    /// Defaults to `20.0`.
    pub row_gap_threshold: f32,
    /// Emitted vertical spacers never exceed this height, in pixels.
    ///
    /// Defaults to `50.0`.
    pub row_gap_cap: f32,
    /// When set, horizontal gaps on the canvas are preserved as explicit
    /// spacer columns instead of being distributed proportionally
    /// (the alignment-aware lineage of the algorithm).
    ///
    /// Defaults to `false`.
    pub preserve_horizontal_gaps: bool,
}

pub const ROW_VERTICAL_TOLERANCE: f32 = 50.0;
pub const COLUMN_HORIZONTAL_TOLERANCE: f32 = 15.0;
pub const ROW_GAP_THRESHOLD: f32 = 20.0;
pub const ROW_GAP_CAP: f32 = 50.0;
/// Horizontal gaps smaller than this are absorbed rather than preserved as
/// spacer columns.
pub const HORIZONTAL_GAP_THRESHOLD: f32 = 10.0;

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            row_vertical_tolerance: ROW_VERTICAL_TOLERANCE,
            column_horizontal_tolerance: COLUMN_HORIZONTAL_TOLERANCE,
            row_gap_threshold: ROW_GAP_THRESHOLD,
            row_gap_cap: ROW_GAP_CAP,
            preserve_horizontal_gaps: false,
        }
    }
}

impl LayoutConfig {
    /// Rejects configurations that would make clustering nondeterministic
    /// or geometrically meaningless.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("row_vertical_tolerance", self.row_vertical_tolerance),
            ("column_horizontal_tolerance", self.column_horizontal_tolerance),
            ("row_gap_threshold", self.row_gap_threshold),
            ("row_gap_cap", self.row_gap_cap),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig(name, value));
            }
        }
        Ok(())
    }
}
