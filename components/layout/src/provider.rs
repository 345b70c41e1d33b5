//! Capability interface through which a host describes its items.

use alloc::vec::Vec;

use crate::{
    Size,
    config::{DEFAULT_COLUMNS, DEFAULT_SPACING},
    error::{LayoutError, LayoutResult},
};

/// Supplies column configuration and per-item sizes to a waterfall pass.
///
/// Only the aspect ratio of an item size matters: the placer scales every item
/// to the shared column width.
pub trait WaterfallProvider {
    /// Number of columns to lay out. Defaults to [`DEFAULT_COLUMNS`].
    fn number_of_columns(&self) -> usize {
        DEFAULT_COLUMNS
    }

    /// Spacing between columns and between stacked items. Defaults to [`DEFAULT_SPACING`].
    fn column_spacing(&self) -> f32 {
        DEFAULT_SPACING
    }

    /// Number of items in the current data set.
    fn item_count(&self) -> usize;

    /// Intrinsic size of the item at `index`, or `None` if there is no such item.
    fn item_size(&self, index: usize) -> Option<Size>;
}

/// Looks up an item size, turning a miss into [`LayoutError::IndexOutOfRange`].
pub(crate) fn checked_item_size<P: WaterfallProvider + ?Sized>(
    provider: &P,
    index: usize,
) -> LayoutResult<Size> {
    let count = provider.item_count();
    if index >= count {
        return Err(LayoutError::IndexOutOfRange { index, count });
    }
    provider
        .item_size(index)
        .ok_or(LayoutError::IndexOutOfRange { index, count })
}

/// A provider backed by an in-memory list of item sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeList {
    sizes: Vec<Size>,
    columns: usize,
    spacing: f32,
}

impl SizeList {
    /// Creates a provider over `sizes` with default columns and spacing.
    pub fn new(sizes: impl IntoIterator<Item = Size>) -> Self {
        Self {
            sizes: sizes.into_iter().collect(),
            columns: DEFAULT_COLUMNS,
            spacing: DEFAULT_SPACING,
        }
    }

    /// Sets the number of columns.
    #[must_use]
    pub const fn columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the column spacing.
    #[must_use]
    pub const fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// The sizes this provider hands out.
    #[must_use]
    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }
}

impl WaterfallProvider for SizeList {
    fn number_of_columns(&self) -> usize {
        self.columns
    }

    fn column_spacing(&self) -> f32 {
        self.spacing
    }

    fn item_count(&self) -> usize {
        self.sizes.len()
    }

    fn item_size(&self, index: usize) -> Option<Size> {
        self.sizes.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    /// Claims more items than it can describe.
    struct Overcounting;

    impl WaterfallProvider for Overcounting {
        fn item_count(&self) -> usize {
            3
        }

        fn item_size(&self, index: usize) -> Option<Size> {
            (index == 0).then_some(Size::new(10.0, 10.0))
        }
    }

    #[test]
    fn test_size_list_lookup() {
        let list = SizeList::new(vec![Size::new(100.0, 40.0), Size::new(100.0, 80.0)])
            .columns(3)
            .spacing(10.0);

        assert_eq!(list.number_of_columns(), 3);
        assert_eq!(list.column_spacing(), 10.0);
        assert_eq!(checked_item_size(&list, 1), Ok(Size::new(100.0, 80.0)));
        assert_eq!(
            checked_item_size(&list, 2),
            Err(LayoutError::IndexOutOfRange { index: 2, count: 2 })
        );
    }

    #[test]
    fn test_provider_defaults() {
        assert_eq!(Overcounting.number_of_columns(), DEFAULT_COLUMNS);
        assert_eq!(Overcounting.column_spacing(), DEFAULT_SPACING);
    }

    #[test]
    fn test_missing_size_is_out_of_range() {
        assert!(checked_item_size(&Overcounting, 0).is_ok());
        assert_eq!(
            checked_item_size(&Overcounting, 1),
            Err(LayoutError::IndexOutOfRange { index: 1, count: 3 })
        );
    }
}
