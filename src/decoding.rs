
use crate::tree::PermTree;

/// Returns the permutation at 1-based lexicographic `rank`, by decoding the
/// rank in the factorial number system instead of enumerating anything.
///
/// The rank, made 0-based, is read as a mixed-radix number with place values
/// `(n-1)!, (n-2)!, …, 1!, 0!`.  Each digit selects one symbol out of a
/// shrinking pool that starts as the tree's sorted alphabet: the quotient by
/// `i!` picks the pool index for the next position, and the remainder carries
/// into the next place.  That reproduces the tree's depth-first leaf order
/// arithmetically, so for every valid rank the result is identical to
/// [permutation_by_enumeration](crate::permutation_by_enumeration).
///
/// Cost is `O(n²)`, dominated by pool removal, and nothing below the tree's
/// first level is ever touched.  Ranks outside `[1, tree.factorial()]`
/// return `None`.
pub fn permutation_by_decoding<T>(tree: &PermTree<T>, rank: u128) -> Option<Vec<T>>
    where
    T: Clone,
{
    //Range check comes before any work; rank is 1-based
    if rank < 1 || rank > tree.factorial() {
        return None;
    }

    let n = tree.width();

    //fact[i] = i!.  The running product can't overflow here: construction
    // already proved n! fits in a u128
    let mut fact: Vec<u128> = Vec::with_capacity(n.max(1));
    fact.push(1);
    for i in 1..n {
        fact.push(fact[i-1] * i as u128);
    }

    let mut pool: Vec<T> = tree.alphabet().cloned().collect();
    let mut perm = Vec::with_capacity(n);

    let mut m = rank - 1;
    for i in (0..n).rev() {
        let idx = (m / fact[i]) as usize;
        m %= fact[i];
        perm.push(pool.remove(idx));
    }

    Some(perm)
}
