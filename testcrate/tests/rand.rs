use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
use swint::Word;

#[test]
fn rand() {
    // the invariant must hold for every generated value
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    for _ in 0..1000 {
        let w = Word::rand_using(&mut rng);
        assert!(w <= Word::MAX);
    }

    // same seed, same sequence
    let mut rng0 = Xoshiro128StarStar::seed_from_u64(7);
    let mut rng1 = Xoshiro128StarStar::seed_from_u64(7);
    for _ in 0..100 {
        assert_eq!(Word::rand_using(&mut rng0), Word::rand_using(&mut rng1));
    }
}
