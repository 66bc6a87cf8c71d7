mod bubble;
mod error;
mod partial;

pub use bubble::{bubble_sort, bubble_sort_with_stats, bubble_sorted, SortStats};
pub use error::SortError;
pub use partial::{try_bubble_sort, try_bubble_sorted};
