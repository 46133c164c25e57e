//! Property tests for substitution, sampling and rendering.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashSet};

use weaponforge_core::{render, sample, sample_many, substitute, BaseWeapon, Catalog};

fn catalog_with_perks(count: usize) -> Catalog {
    Catalog {
        weapons: vec![BaseWeapon {
            name: "Stick".into(),
            hit: "50".into(),
            damage: "1d4".into(),
            range: "5ft".into(),
            description: "A stick.".into(),
        }],
        perks: (0..count).map(|i| format!("perk-{i}")).collect(),
        randoms: BTreeMap::new(),
    }
}

proptest! {
    /// Property: no key with options survives substitution
    #[test]
    fn prop_substitute_removes_every_key(
        seed in any::<u64>(),
        words in prop::collection::vec("[a-z ]{0,6}", 0..6),
        options in prop::collection::vec("[a-z]{0,4}", 1..4),
    ) {
        let mut randoms = BTreeMap::new();
        randoms.insert("{X}".to_string(), options);
        randoms.insert("{Y}".to_string(), vec!["y".to_string(), "{X}y".to_string()]);
        let text = words.join("{X}{Y}");

        let mut rng = StdRng::seed_from_u64(seed);
        let out = substitute(&text, &randoms, &mut rng).unwrap();
        prop_assert!(!out.contains("{X}"), "key left in {:?}", out);
        prop_assert!(!out.contains("{Y}"), "key left in {:?}", out);
    }

    /// Property: text without keys is returned unchanged
    #[test]
    fn prop_substitute_identity_without_keys(seed in any::<u64>(), text in "[^{}]*") {
        let mut randoms = BTreeMap::new();
        randoms.insert("{X}".to_string(), vec!["a".to_string()]);
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(substitute(&text, &randoms, &mut rng).unwrap(), text);
    }

    /// Property: perks are distinct catalog entries, clamped to the catalog size
    #[test]
    fn prop_sample_perks_are_distinct(
        seed in any::<u64>(),
        available in 0usize..30,
        requested in 0usize..40,
    ) {
        let catalog = catalog_with_perks(available);
        let mut rng = StdRng::seed_from_u64(seed);
        let generated = sample(&catalog, requested, &mut rng).unwrap();

        prop_assert_eq!(generated.perks.len(), requested.min(available));
        let unique: HashSet<_> = generated.perks.iter().collect();
        prop_assert_eq!(unique.len(), generated.perks.len());
        for perk in &generated.perks {
            prop_assert!(catalog.perks.contains(perk), "unknown perk {:?}", perk);
        }
    }

    /// Property: sample_many returns exactly the requested number of weapons
    #[test]
    fn prop_sample_many_count(seed in any::<u64>(), count in 0usize..20) {
        let catalog = catalog_with_perks(3);
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(sample_many(&catalog, 1, count, &mut rng).unwrap().len(), count);
    }

    /// Property: templates without markers render unchanged
    #[test]
    fn prop_render_identity_without_markers(template in "[^{}]*", seed in any::<u64>()) {
        let catalog = catalog_with_perks(4);
        let mut rng = StdRng::seed_from_u64(seed);
        let generated = sample(&catalog, 2, &mut rng).unwrap();
        prop_assert_eq!(render(&template, &generated), template);
    }
}
