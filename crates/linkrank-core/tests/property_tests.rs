//! Property-based tests for the two rankers

use linkrank_core::{
    iterate_pagerank, sample_pagerank, transition_model, Corpus, IterationOptions,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn arb_corpus() -> impl Strategy<Value = Corpus> {
    (1usize..8).prop_flat_map(|n| {
        prop::collection::vec(prop::collection::vec(0..n, 0..n + 1), n).prop_map(|adjacency| {
            Corpus::from_links(adjacency.into_iter().enumerate().map(|(i, targets)| {
                (
                    format!("p{}", i),
                    targets.into_iter().map(|t| format!("p{}", t)).collect::<Vec<_>>(),
                )
            }))
            .unwrap()
        })
    })
}

fn arb_damping() -> impl Strategy<Value = f64> {
    0.05f64..0.95
}

proptest! {
    #[test]
    fn prop_iterative_is_distribution(corpus in arb_corpus(), damping in arb_damping()) {
        let outcome = iterate_pagerank(&corpus, damping, &IterationOptions::default()).unwrap();

        prop_assert_eq!(outcome.ranks.len(), corpus.len());
        prop_assert!((outcome.ranks.total() - 1.0).abs() < 1e-6);
        for (_, rank) in outcome.ranks.iter() {
            prop_assert!(rank >= 0.0);
        }
    }

    #[test]
    fn prop_sampling_is_distribution(
        corpus in arb_corpus(),
        damping in arb_damping(),
        seed in any::<u64>(),
        samples in 1usize..500,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let ranks = sample_pagerank(&corpus, damping, samples, &mut rng).unwrap();

        prop_assert_eq!(ranks.len(), corpus.len());
        prop_assert!((ranks.total() - 1.0).abs() < 1e-6);
        for (_, rank) in ranks.iter() {
            prop_assert!(rank >= 0.0);
        }
    }

    #[test]
    fn prop_transition_is_distribution(corpus in arb_corpus(), damping in arb_damping()) {
        for page in corpus.pages() {
            let dist = transition_model(&corpus, page, damping).unwrap();
            prop_assert_eq!(dist.len(), corpus.len());
            prop_assert!((dist.total() - 1.0).abs() < 1e-9);
            if corpus.is_dangling(page) {
                let uniform = 1.0 / corpus.len() as f64;
                for (_, p) in dist.iter() {
                    prop_assert!((p - uniform).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn prop_iterative_is_deterministic(corpus in arb_corpus(), damping in arb_damping()) {
        let a = iterate_pagerank(&corpus, damping, &IterationOptions::default()).unwrap();
        let b = iterate_pagerank(&corpus, damping, &IterationOptions::default()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_corpus_is_closed(corpus in arb_corpus()) {
        for (source, target) in corpus.edges() {
            prop_assert_ne!(source, target);
            prop_assert!(corpus.contains(target));
        }
    }
}

#[test]
fn test_sampling_approaches_iteration() {
    let corpus = Corpus::from_links([
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["1.html", "3.html"]),
        ("3.html", vec!["2.html", "4.html"]),
        ("4.html", vec!["2.html"]),
        ("5.html", vec![]),
    ])
    .unwrap();
    let exact = iterate_pagerank(&corpus, 0.85, &IterationOptions::default())
        .unwrap()
        .ranks;

    let deviation = |samples: usize| {
        let mut rng = StdRng::seed_from_u64(2024);
        sample_pagerank(&corpus, 0.85, samples, &mut rng)
            .unwrap()
            .max_deviation(&exact)
    };

    let coarse = deviation(100);
    let fine = deviation(100_000);
    assert!(fine < coarse, "n=100: {coarse}, n=100000: {fine}");
    assert!(fine < 0.02, "n=100000: {fine}");
}
