/// A comparator-driven binary min-heap with decrease-key support.
pub mod binary_heap;
