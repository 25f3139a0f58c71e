pub mod linked_list;

pub use linked_list::*;

/// Inline storage for the legal actions of a single state.
pub type ActionList<T> = smallvec::SmallVec<[T; 16]>;
