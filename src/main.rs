
use std::time::Instant;

use rand::prelude::*;
use rand_pcg::Pcg64;

use perm_tree::{PermTree, all_permutations, permutation_by_decoding, permutation_by_enumeration};

/// Demonstration driver for the library: prints the full permutation list of
/// a tiny alphabet, one rank lookup per strategy, and then a wall-clock
/// comparison of the three operations over growing alphabet widths.
///
/// Set `RUST_LOG=debug` to see the library's construction/enumeration events.
fn main() {

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    //Short demonstration on {'1','2','3'}
    let tree = PermTree::build(['1', '2', '3']).expect("distinct alphabet");
    for perm in all_permutations(&tree) {
        println!("{}", perm.into_iter().collect::<String>());
    }

    let by_enumeration = permutation_by_enumeration(&tree, 2).expect("rank 2 of 6 is in range");
    println!("enumeration(2) = {}", by_enumeration.into_iter().collect::<String>());

    let by_decoding = permutation_by_decoding(&tree, 5).expect("rank 5 of 6 is in range");
    println!("decoding(5)    = {}", by_decoding.into_iter().collect::<String>());
    println!();

    //Wall-clock comparison.  One random rank per width, asked of both
    // strategies, next to the cost of a full enumeration
    let mut rng = Pcg64::seed_from_u64(1); //non-cryptographic random used for repeatability

    for n in 4..=10usize {
        let alphabet: Vec<char> = (0..n).map(|i| char::from(b'a' + i as u8)).collect();
        let tree = PermTree::build(alphabet).expect("distinct alphabet");

        let rank = rng.gen_range(1..=tree.factorial());

        let t0 = Instant::now();
        let all = all_permutations(&tree);
        let t_all = t0.elapsed();

        let t0 = Instant::now();
        let slow = permutation_by_enumeration(&tree, rank);
        let t_enumeration = t0.elapsed();

        let t0 = Instant::now();
        let fast = permutation_by_decoding(&tree, rank);
        let t_decoding = t0.elapsed();

        let perm_string: String = fast.as_ref().expect("rank drawn from [1, n!]").iter().collect();
        println!("n={} perms={} rank={} -> {} | all={:.3}ms enumeration={:.3}ms decoding={:.3}ms agree={}",
            n,
            all.len(),
            rank,
            perm_string,
            t_all.as_secs_f64() * 1e3,
            t_enumeration.as_secs_f64() * 1e3,
            t_decoding.as_secs_f64() * 1e3,
            slow == fast);
    }
}
