//! Board measurements consumed by the placement heuristic.

use evotris_engine::Field;
use evotris_stats::descriptive::DescriptiveStats;

/// One of the board measurements the placement heuristic weighs.
///
/// The enum fixes the layout of feature and weight vectors: [`feature_vector`]
/// returns values in [`FieldFeature::ALL`] order, and trained weight vectors
/// are stored and interpreted in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFeature {
    /// Number of empty cells lying below the topmost filled cell of their
    /// column.
    GapCount,
    /// Arithmetic mean of the column heights.
    MeanHeight,
    /// Population standard deviation of the column heights.
    HeightStdDev,
    /// Difference between the tallest and the shortest column.
    HeightRange,
    /// Largest absolute height difference between adjacent columns.
    MaxAdjacentDiff,
}

impl FieldFeature {
    /// All features, in feature-vector order.
    pub const ALL: [FieldFeature; 5] = [
        FieldFeature::GapCount,
        FieldFeature::MeanHeight,
        FieldFeature::HeightStdDev,
        FieldFeature::HeightRange,
        FieldFeature::MaxAdjacentDiff,
    ];

    /// Length of a feature or weight vector.
    pub const COUNT: usize = Self::ALL.len();

    /// Returns the position of this feature in [`Self::ALL`] and in every
    /// feature vector.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the stable identifier used in saved models and logs.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            FieldFeature::GapCount => "gap_count",
            FieldFeature::MeanHeight => "mean_height",
            FieldFeature::HeightStdDev => "height_std_dev",
            FieldFeature::HeightRange => "height_range",
            FieldFeature::MaxAdjacentDiff => "max_adjacent_diff",
        }
    }

    /// Returns the human-readable display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            FieldFeature::GapCount => "Gap Count",
            FieldFeature::MeanHeight => "Mean Column Height",
            FieldFeature::HeightStdDev => "Column Height Std Dev",
            FieldFeature::HeightRange => "Height Range",
            FieldFeature::MaxAdjacentDiff => "Max Adjacent Height Diff",
        }
    }
}

/// Measures all features of a board, in [`FieldFeature::ALL`] order.
///
/// # Examples
///
/// ```
/// use evotris_engine::{Field, Tetromino, TetrominoKind};
/// use evotris_evaluator::features::feature_vector;
///
/// let mut field = Field::new();
/// field.drop_piece(Tetromino::new(TetrominoKind::O), 0).unwrap();
///
/// let features = feature_vector(&field);
/// assert_eq!(features[0], 0.0); // no gaps
/// assert_eq!(features[1], 0.4); // two columns of height 2
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn feature_vector(field: &Field) -> [f32; FieldFeature::COUNT] {
    let heights = field.column_heights();
    let stats = DescriptiveStats::new(heights.iter().map(|&height| height as f32)).unwrap();
    let max_adjacent_diff = heights
        .windows(2)
        .map(|pair| pair[0].abs_diff(pair[1]))
        .max()
        .unwrap_or(0);
    [
        field.count_gaps() as f32,
        stats.mean,
        stats.std_dev,
        stats.max - stats.min,
        max_adjacent_diff as f32,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_from_bottom_rows(rows: &[&[u8]]) -> Field {
        let mut grid = vec![vec![0; Field::WIDTH]; Field::HEIGHT - rows.len()];
        grid.extend(rows.iter().map(|row| row.to_vec()));
        Field::from_grid(&grid).unwrap()
    }

    #[test]
    fn test_feature_order_matches_index() {
        for (i, feature) in FieldFeature::ALL.into_iter().enumerate() {
            assert_eq!(feature.index(), i);
        }
    }

    #[test]
    fn test_feature_ids_are_stable() {
        let ids: Vec<_> = FieldFeature::ALL.into_iter().map(FieldFeature::id).collect();
        assert_eq!(
            ids,
            [
                "gap_count",
                "mean_height",
                "height_std_dev",
                "height_range",
                "max_adjacent_diff"
            ]
        );
    }

    #[test]
    fn test_empty_board_features_are_zero() {
        assert_eq!(feature_vector(&Field::new()), [0.0; FieldFeature::COUNT]);
    }

    #[test]
    fn test_flat_board_has_height_but_no_spread() {
        let field = field_from_bottom_rows(&[&[1; Field::WIDTH], &[1; Field::WIDTH]]);
        assert_eq!(feature_vector(&field), [0.0, 2.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_staircase_features() {
        // Column heights: [4, 3, 3, 2, 0, 0, 0, 1, 4, 1].
        let field = field_from_bottom_rows(&[
            &[1, 0, 0, 0, 0, 0, 0, 0, 1, 0],
            &[1, 1, 1, 0, 0, 0, 0, 0, 1, 0],
            &[1, 1, 1, 1, 0, 0, 0, 0, 1, 0],
            &[1, 1, 1, 1, 0, 0, 0, 1, 1, 1],
        ]);
        let features = feature_vector(&field);
        assert_eq!(features[0], 0.0);
        assert_eq!(features[1], 1.8);
        assert!((features[2] - 2.36_f32.sqrt()).abs() < 1e-6);
        assert_eq!(features[3], 4.0);
        assert_eq!(features[4], 3.0);
    }

    #[test]
    fn test_gap_count_sees_covered_cells_only() {
        // Column 0 has two buried holes, column 2 has one.
        let field = field_from_bottom_rows(&[
            &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 1, 0, 0, 0, 0, 0, 0, 0],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
            &[1, 1, 1, 1, 0, 0, 0, 0, 0, 0],
        ]);
        assert_eq!(feature_vector(&field)[0], 3.0);
    }
}
