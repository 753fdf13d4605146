//! Duplex merge order
//!
//! Computes the order in which single pages have to be concatenated so that
//! a manual duplex run ("print odd pages, flip the stack, print even pages")
//! yields sheets whose fronts are the first half of the document and whose
//! backs are the second half.

use crate::types::*;

/// Page count rounded up to the next even number
pub fn padded_count(n: usize) -> usize {
    n + n % 2
}

/// Number of physical sheets needed for `n` pages
pub fn sheet_count(n: usize) -> usize {
    padded_count(n) / 2
}

/// Calculate the 0-based merge order for `n` pages.
///
/// With `s = padded_count(n) / 2`:
///
/// **Ascending:** `[0, s, 1, s+1, ..., s-1, 2s-1]`
/// - Sheet k (1-based) carries page k on the front and page s+k on the back.
///
/// **Descending:** `[0, 2s-1, 1, 2s-2, ..., s-1, s]`
/// - Sheet k carries page k on the front and page 2s+1-k on the back, so the
///   back pages are consumed from the end of the deck.
///
/// An odd `n` is treated as `n + 1`. The returned order then references one
/// index past the caller's pages, and the caller has to append a padding page
/// before applying it.
///
/// ```
/// use pdf_reorder::{BackOrder, compute_merge_order};
///
/// assert_eq!(compute_merge_order(5, BackOrder::Ascending), vec![0, 3, 1, 4, 2, 5]);
/// assert_eq!(compute_merge_order(6, BackOrder::Descending), vec![0, 5, 1, 4, 2, 3]);
/// ```
pub fn compute_merge_order(n: usize, back_order: BackOrder) -> Vec<usize> {
    let padded = padded_count(n);
    let sheets = padded / 2;
    let mut order = Vec::with_capacity(padded);

    for i in 0..sheets {
        order.push(i);
        order.push(match back_order {
            BackOrder::Ascending => sheets + i,
            BackOrder::Descending => padded - 1 - i,
        });
    }

    order
}

/// Per-sheet mapping with 1-based page numbers
pub fn sheets(n: usize, back_order: BackOrder) -> Vec<Sheet> {
    compute_merge_order(n, back_order)
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| Sheet {
            number: i + 1,
            front: pair[0] + 1,
            back: pair[1] + 1,
            back_order,
        })
        .collect()
}

/// 1-based positions of the back sides in merged output: 2, 4, 6, ...
pub fn back_side_positions(len: usize) -> Vec<u32> {
    (2..=len as u32).step_by(2).collect()
}

/// Map an index sequence onto concrete items (file paths, page ids).
pub fn apply_order<T: Clone>(items: &[T], order: &[usize]) -> Result<Vec<T>> {
    order
        .iter()
        .map(|&idx| {
            items.get(idx).cloned().ok_or_else(|| {
                ReorderError::Config(format!(
                    "Merge order references page index {} but only {} pages are available",
                    idx,
                    items.len()
                ))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_count() {
        assert_eq!(padded_count(0), 0);
        assert_eq!(padded_count(1), 2);
        assert_eq!(padded_count(2), 2);
        assert_eq!(padded_count(7), 8);
    }

    #[test]
    fn test_sheet_count() {
        assert_eq!(sheet_count(0), 0);
        assert_eq!(sheet_count(1), 1);
        assert_eq!(sheet_count(40), 20);
    }

    #[test]
    fn test_sheets_ascending_six() {
        let sheets = sheets(6, BackOrder::Ascending);
        let pairs: Vec<_> = sheets.iter().map(|s| (s.front, s.back)).collect();
        assert_eq!(pairs, vec![(1, 4), (2, 5), (3, 6)]);
        assert_eq!(sheets[2].number, 3);
    }

    #[test]
    fn test_sheets_descending_six() {
        let pairs: Vec<_> = sheets(6, BackOrder::Descending)
            .iter()
            .map(|s| (s.front, s.back))
            .collect();
        assert_eq!(pairs, vec![(1, 6), (2, 5), (3, 4)]);
    }

    #[test]
    fn test_sheet_display() {
        let sheet = Sheet {
            number: 1,
            front: 1,
            back: 4,
            back_order: BackOrder::Ascending,
        };
        assert_eq!(sheet.to_string(), "Sheet  1: Front=Page 1, Back=Page 4 (ascending)");

        let sheet = Sheet {
            number: 12,
            front: 12,
            back: 13,
            back_order: BackOrder::Descending,
        };
        assert_eq!(
            sheet.to_string(),
            "Sheet 12: Front=Page 12, Back=Page 13 (descending)"
        );
    }

    #[test]
    fn test_back_side_positions() {
        assert_eq!(back_side_positions(6), vec![2, 4, 6]);
        assert_eq!(back_side_positions(1), Vec::<u32>::new());
        assert_eq!(back_side_positions(0), Vec::<u32>::new());
        assert_eq!(back_side_positions(5), vec![2, 4]);
    }

    #[test]
    fn test_apply_order() {
        let files = vec!["a", "b", "c", "d"];
        let ordered = apply_order(&files, &compute_merge_order(4, BackOrder::Ascending)).unwrap();
        assert_eq!(ordered, vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_apply_order_unpadded_odd_list() {
        // Order for 3 pages references index 3, which needs a padding page
        let files = vec!["a", "b", "c"];
        let result = apply_order(&files, &compute_merge_order(3, BackOrder::Ascending));
        assert!(matches!(result, Err(ReorderError::Config(_))));
    }
}
