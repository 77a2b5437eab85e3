use proptest::prelude::*;

use docchat_text::{build_index, cosine_similarity, rank, tokenize, TermVector};

fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?'\\-\n]{0,80}"
}

fn arb_vector() -> impl Strategy<Value = TermVector> {
    prop::collection::btree_map("[a-f]{2}", 0.001f64..10.0, 0..8)
}

proptest! {
    /// Re-tokenizing joined terms gives the same terms.
    #[test]
    fn prop_tokenize_idempotent(text in arb_text()) {
        let once = tokenize(&text);
        let twice = tokenize(&once.join(" "));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_terms_are_normalized(text in arb_text()) {
        for term in tokenize(&text) {
            prop_assert!(term.len() >= 2);
            prop_assert!(term.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
        }
    }

    #[test]
    fn prop_idf_positive_and_vectors_aligned(pages in prop::collection::vec(arb_text(), 0..6)) {
        let (idf, vectors) = build_index(&pages);
        prop_assert_eq!(vectors.len(), pages.len());
        for weight in idf.values() {
            prop_assert!(*weight > 0.0);
        }
        for vector in &vectors {
            for (term, weight) in vector {
                prop_assert!(idf.contains_key(term));
                prop_assert!(*weight > 0.0);
            }
        }
    }

    #[test]
    fn prop_cosine_symmetric(a in arb_vector(), b in arb_vector()) {
        prop_assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn prop_cosine_self_is_one(a in arb_vector()) {
        prop_assume!(!a.is_empty());
        prop_assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_cosine_in_unit_range(a in arb_vector(), b in arb_vector()) {
        let score = cosine_similarity(&a, &b);
        prop_assert!((0.0..=1.0 + 1e-9).contains(&score));
    }

    #[test]
    fn prop_rank_sorted_thresholded_bounded(
        query in arb_vector(),
        pages in prop::collection::vec(arb_vector(), 0..10),
        k in 1usize..5,
        min_score in 0.0f64..0.5,
    ) {
        let ranked = rank(&query, &pages, k, min_score);
        prop_assert!(ranked.len() <= k);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].page_index < pair[1].page_index);
            }
        }
        for hit in &ranked {
            prop_assert!(hit.score > min_score);
        }
    }
}
