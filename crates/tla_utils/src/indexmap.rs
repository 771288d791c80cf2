use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;

/// Insertion-ordered collections keep graph edges and export lists in source order.
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;
