/// Records per split
pub const SPLIT_SIZE: usize = 250;

/// Records `[(split - 1) * 250, split * 250)`, clamped to the input.
///
/// `split` is not validated. Split 0 and splits past the end give an empty
/// slice, which callers report as "no data for this split".
pub fn split_window<T>(records: &[T], split: usize) -> &[T] {
    let Some(index) = split.checked_sub(1) else {
        return &[];
    };

    let start = index.saturating_mul(SPLIT_SIZE).min(records.len());
    let end = split.saturating_mul(SPLIT_SIZE).min(records.len());
    &records[start..end]
}
