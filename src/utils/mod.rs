/*!
# Utilities

Helper structures shared by the algorithms. Currently this is the [`DisjointSet`]
(union-find) used transiently by Kruskal's algorithm.
*/

use crate::prelude::*;

pub mod union_find;

pub use union_find::DisjointSet;
