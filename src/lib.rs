#![crate_name = "perm_tree"]

#![doc = include_str!("../README.md")]

mod tree;
pub use tree::{BuildError, PermNode, PermTree, factorial};

mod enumeration;
pub use enumeration::{all_permutations, permutation_by_enumeration};

mod decoding;
pub use decoding::permutation_by_decoding;

mod lex_permutation_iter;
pub use lex_permutation_iter::LexPermutationIter;
