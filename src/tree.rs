
use num_traits::{PrimInt, Unsigned};
use thiserror::Error;
use tracing::debug;

/// The ways building a [PermTree](crate::PermTree) can fail.
///
/// Both conditions are detected before any node is allocated, so a tree that
/// exists always satisfies the one-path-per-permutation invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// The input alphabet contains the same symbol more than once.  The payload
    /// is the position of the second occurrence within the sorted alphabet.
    #[error("alphabet contains a duplicate symbol at sorted position {0}")]
    DuplicateSymbol(usize),

    /// The alphabet is too wide for its factorial to be represented; `n!` must
    /// fit in a `u128`, which caps the width at 34 symbols.
    #[error("{0}! does not fit in 128 bits; alphabets are limited to 34 symbols")]
    FactorialOverflow(usize),
}

/// One node of a [PermTree](crate::PermTree).
///
/// Holds a single symbol and exclusively owns its children, which are stored
/// in ascending symbol order.  A node with no children is a leaf, and the
/// symbols along the path from the top of the tree down to a leaf read out
/// one complete permutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermNode<T> {
    /// The symbol this node contributes to every permutation passing through it
    symbol: T,

    /// One child per symbol still unused on this path, in ascending order
    children: Vec<PermNode<T>>,
}

impl<T> PermNode<T> {
    pub fn symbol(&self) -> &T {
        &self.symbol
    }
    pub fn children(&self) -> &[PermNode<T>] {
        &self.children
    }
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// An explicit tree over a sorted alphabet in which every root-to-leaf path,
/// read top to bottom, is a distinct permutation of the alphabet, and every
/// permutation of the alphabet appears exactly once among such paths.
///
/// Sibling order is ascending symbol order at every level, which makes the
/// depth-first order of the leaves the lexicographic order of the
/// permutations.  That single property is what both retrieval strategies in
/// this crate rely on: [permutation_by_enumeration](crate::permutation_by_enumeration)
/// walks the leaves in that order, while [permutation_by_decoding](crate::permutation_by_decoding)
/// reconstructs the walk arithmetically from the sorted first level alone.
///
/// The tree is built once and immutable afterwards.  The abstract model's
/// synthetic root, which holds no symbol and exists only to own the top-level
/// children, is the `PermTree` struct itself.
///
/// ## Cost
///
/// A tree over `n` symbols has `n!` leaves, so construction is only practical
/// for small `n`.  Construction fails up front for alphabets whose factorial
/// cannot be represented at all (`n > 34`), long before memory would run out.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermTree<T> {
    /// The synthetic root's children, one per alphabet symbol, ascending
    branches: Vec<PermNode<T>>,

    /// Alphabet width, fixed for the tree's lifetime
    width: usize,

    /// width!, computed once at construction because the decoding strategy
    /// needs it on every lookup
    factorial: u128,
}

impl<T> PermTree<T>
    where
    T: Ord + Clone,
{
    /// Builds the permutation tree for `alphabet`.
    ///
    /// The input order doesn't matter; a working copy is sorted ascending
    /// before any levels are built.  Duplicate symbols and alphabets wider
    /// than 34 are rejected with the corresponding [BuildError].
    pub fn build(alphabet: impl IntoIterator<Item=T>) -> Result<Self, BuildError> {

        let mut alphabet: Vec<T> = alphabet.into_iter().collect();
        alphabet.sort();

        //Duplicates are adjacent after the sort
        for i in 1..alphabet.len() {
            if alphabet[i-1] == alphabet[i] {
                return Err(BuildError::DuplicateSymbol(i));
            }
        }

        let width = alphabet.len();
        let factorial = factorial::<u128>(width)
            .ok_or(BuildError::FactorialOverflow(width))?;

        let branches = build_level(&alphabet);

        debug!(width, factorial, "built permutation tree");

        Ok(Self {
            branches,
            width,
            factorial,
        })
    }
}

impl<T> PermTree<T> {
    /// The top-level nodes, one per alphabet symbol, in ascending order
    pub fn branches(&self) -> &[PermNode<T>] {
        &self.branches
    }

    /// The sorted alphabet, read off the first level of the tree
    pub fn alphabet(&self) -> impl Iterator<Item=&T> {
        self.branches.iter().map(|node| node.symbol())
    }

    /// The number of symbols in the alphabet
    pub fn width(&self) -> usize {
        self.width
    }

    /// `width()!`, with the `0! = 1` convention
    pub fn factorial(&self) -> u128 {
        self.factorial
    }
}

//Builds one level: one child per remaining symbol, each child recursing with
// that symbol removed, until the remaining set is empty
fn build_level<T>(rest: &[T]) -> Vec<PermNode<T>>
    where
    T: Ord + Clone,
{
    let mut children = Vec::with_capacity(rest.len());
    for (i, symbol) in rest.iter().enumerate() {
        let mut next = Vec::with_capacity(rest.len()-1);
        next.extend_from_slice(&rest[..i]);
        next.extend_from_slice(&rest[i+1..]);

        children.push(PermNode {
            symbol: symbol.clone(),
            children: build_level(&next),
        });
    }
    children
}

/// Computes `n!` in the requested unsigned integer type, with the `0! = 1`
/// convention.  Returns `None` if the product overflows `F`.
pub fn factorial<F>(n: usize) -> Option<F>
    where
    F: PrimInt + Unsigned,
{
    let mut product = F::one();
    for i in 2..=n {
        product = product.checked_mul(&F::from(i)?)?;
    }
    Some(product)
}
