/// The first valid column index. Column indexes are 1-based.
pub const FIRST_COLUMN_INDEX: usize = 1;

/// The column read by a scalar handler when no selector is given.
pub const DEFAULT_SCALAR_COLUMN: usize = FIRST_COLUMN_INDEX;
