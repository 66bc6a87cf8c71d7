use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SortError {
    /// `partial_cmp` returned `None` for two neighbouring elements (e.g. a NaN).
    #[error("elements at positions {left} and {right} are not comparable")]
    Incomparable { left: usize, right: usize },
}
