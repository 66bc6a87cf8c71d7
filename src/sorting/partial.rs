use std::cmp::Ordering;

use super::SortError;

/// Bubble sort for types with only a partial order, such as floats.
///
/// Stops at the first incomparable neighbours and reports their positions; `arr`
/// is then left partially sorted.
pub fn try_bubble_sort<T>(arr: &mut [T]) -> Result<(), SortError>
where
    T: PartialOrd,
{
    let n = arr.len();
    if n < 2 {
        return Ok(());
    }
    for i in 0..n - 1 {
        let mut was_swap = false;
        for j in 0..(n - 1 - i) {
            match arr[j].partial_cmp(&arr[j + 1]) {
                Some(Ordering::Greater) => {
                    arr.swap(j, j + 1);
                    was_swap = true;
                }
                Some(_) => {}
                None => return Err(SortError::Incomparable { left: j, right: j + 1 }),
            }
        }
        if !was_swap {
            break;
        }
    }
    Ok(())
}

pub fn try_bubble_sorted<T>(input: &[T]) -> Result<Vec<T>, SortError>
where
    T: PartialOrd + Clone,
{
    let mut sorted = input.to_vec();
    try_bubble_sort(&mut sorted)?;
    Ok(sorted)
}
