//! Property tests for the relation algebra

use proptest::prelude::*;
use registrar_relation::Relation;

/// Small relations over a five-element universe, dense enough that
/// composition and closure actually join pairs.
fn relation_strategy() -> impl Strategy<Value = Relation> {
    prop::collection::vec((0u8..5, 0u8..5), 0..20).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(a, b)| (format!("e{a}"), format!("e{b}")))
            .collect()
    })
}

proptest! {
    #[test]
    fn closure_is_transitive(relation in relation_strategy()) {
        let closure = relation.closure();
        prop_assert!(closure.complete);
        prop_assert!(closure.relation.is_transitive());
    }

    #[test]
    fn closure_is_idempotent(relation in relation_strategy()) {
        let once = relation.closure();
        let twice = once.relation.closure();
        prop_assert_eq!(once.relation, twice.relation);
    }

    #[test]
    fn closure_contains_the_input(relation in relation_strategy()) {
        let closure = relation.closure();
        for (from, to) in relation.iter() {
            prop_assert!(closure.relation.contains(from, to));
        }
    }

    #[test]
    fn compose_is_associative(
        r in relation_strategy(),
        s in relation_strategy(),
        t in relation_strategy(),
    ) {
        prop_assert_eq!(r.compose(&s).compose(&t), r.compose(&s.compose(&t)));
    }

    #[test]
    fn symmetry_survives_union_with_inverse(relation in relation_strategy()) {
        let mut symmetric = relation.clone();
        let pairs: Vec<(String, String)> =
            relation.iter().map(|(a, b)| (b.to_string(), a.to_string())).collect();
        for (a, b) in pairs {
            symmetric.insert(a, b);
        }
        prop_assert!(symmetric.is_symmetric());
    }
}
