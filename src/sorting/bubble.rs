use std::fmt;

/// Counters collected while sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortStats {
    pub passes: usize,
    pub comparisons: usize,
    pub swaps: usize,
}

impl fmt::Display for SortStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "passes: {}, comparisons: {}, swaps: {}",
            self.passes, self.comparisons, self.swaps
        )
    }
}

/// Sorts `arr` in place. Equal elements are never swapped, so the sort is stable.
pub fn bubble_sort<T>(arr: &mut [T])
where
    T: Ord,
{
    bubble_sort_with_stats(arr);
}

pub fn bubble_sort_with_stats<T>(arr: &mut [T]) -> SortStats
where
    T: Ord,
{
    let mut stats = SortStats::default();
    let n = arr.len();
    if n < 2 {
        return stats;
    }
    for i in 0..n - 1 {
        stats.passes += 1;
        let mut was_swap = false;
        // the last i elements are already in their final place
        for j in 0..(n - 1 - i) {
            stats.comparisons += 1;
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                stats.swaps += 1;
                was_swap = true;
            }
        }
        if !was_swap {
            break;
        }
    }
    stats
}

/// Returns a sorted copy of `input`, leaving the caller's slice untouched.
///
/// ```
/// use bubble_sort::sorting::bubble_sorted;
///
/// let arr = [64, 34, 25, 12, 22, 11, 90];
/// assert_eq!(bubble_sorted(&arr), vec![11, 12, 22, 25, 34, 64, 90]);
/// assert_eq!(arr, [64, 34, 25, 12, 22, 11, 90]);
/// ```
pub fn bubble_sorted<T>(input: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    let mut sorted = input.to_vec();
    bubble_sort(&mut sorted);
    sorted
}
