
use crate::tree::{PermNode, PermTree};

/// A lazy iterator over the permutations encoded by a [PermTree](crate::PermTree),
/// yielded in lexicographic ascending order.
///
/// Produces exactly the sequence of [all_permutations](crate::all_permutations),
/// one permutation at a time, so callers can stop after any prefix without
/// paying for the full `n!`-element list.
///
/// The walk is pre-order with an explicit stack rather than recursion: each
/// stack frame is a sibling list plus a cursor into it, and the path buffer
/// mirrors the symbols between the top of the tree and the current frame.
///
pub struct LexPermutationIter<'a, T> {
    /// Walk stack: each frame is a sibling list plus the index of its next
    /// unvisited node
    stack: Vec<(&'a [PermNode<T>], usize)>,

    /// Symbols along the path from the top of the tree to the current frame
    path: Vec<T>,

    /// An empty alphabet is a degenerate case; its one empty permutation is
    /// emitted from this flag because there are no nodes to walk
    emit_empty: bool,
}

impl<'a, T> LexPermutationIter<'a, T>
    where
    T: Clone,
{
    pub fn new(tree: &'a PermTree<T>) -> Self {

        let width = tree.width();
        let mut stack = Vec::with_capacity(width);
        if width > 0 {
            stack.push((tree.branches(), 0));
        }

        Self {
            stack,
            path: Vec::with_capacity(width),
            emit_empty: width == 0,
        }
    }
}

impl<T> Iterator for LexPermutationIter<'_, T>
    where
    T: Clone,
{
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {

        if self.emit_empty {
            self.emit_empty = false;
            return Some(Vec::new());
        }

        loop {
            let frame = self.stack.last_mut()?;
            //Copy the slice borrow out of the frame so `node` doesn't tie up
            // the stack while we push onto it
            let siblings = frame.0;

            if frame.1 < siblings.len() {
                let node = &siblings[frame.1];
                frame.1 += 1;

                self.path.push(node.symbol().clone());
                if node.is_leaf() {
                    let perm = self.path.clone();
                    self.path.pop();
                    return Some(perm);
                }
                self.stack.push((node.children(), 0));
            } else {
                //This sibling list is exhausted; back out of the symbol that
                // led into it.  The bottom frame is the tree's first level and
                // contributed no symbol
                self.stack.pop();
                if !self.stack.is_empty() {
                    self.path.pop();
                }
            }
        }
    }
}

impl<T> PermTree<T>
    where
    T: Ord + Clone,
{
    /// Returns a lazy iterator over this tree's permutations in lexicographic
    /// ascending order
    pub fn lex_permutations(&self) -> LexPermutationIter<'_, T> {
        LexPermutationIter::new(self)
    }
}
