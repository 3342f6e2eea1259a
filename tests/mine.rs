use eclat::{
    mine_with_progress, EclatError, FrequentItemsets, HorizontalDb, MiningConfig, NoProgress,
    ProgressEvent,
};
use maplit::{btreeset, hashmap, hashset};

fn mine(
    horizontal_db: &HorizontalDb<u32, &'static str>,
    config: &MiningConfig,
) -> FrequentItemsets<&'static str, u32> {
    mine_with_progress(horizontal_db, config, &mut NoProgress).unwrap()
}

fn abc() -> HorizontalDb<u32, &'static str> {
    hashmap! {
        1 => hashset!["a", "b"],
        2 => hashset!["a", "c"],
        3 => hashset!["a", "b", "c"],
        4 => hashset!["b", "c"],
    }
}

#[test]
fn pairs_but_no_triple_at_support_2() {
    let frequent = mine(&abc(), &MiningConfig::new(2));

    let expected = hashmap! {
        btreeset!["a"] => btreeset![1, 2, 3],
        btreeset!["b"] => btreeset![1, 3, 4],
        btreeset!["c"] => btreeset![2, 3, 4],
        btreeset!["a", "b"] => btreeset![1, 3],
        btreeset!["a", "c"] => btreeset![2, 3],
        btreeset!["b", "c"] => btreeset![3, 4],
    };
    assert_eq!(frequent, expected);
}

#[test]
fn nothing_reaches_support_4() {
    assert!(mine(&abc(), &MiningConfig::new(4)).is_empty());
}

#[test]
fn single_transaction_enumerates_whole_lattice() {
    let horizontal_db = hashmap! { 1 => hashset!["x", "y", "z"] };
    let frequent = mine(&horizontal_db, &MiningConfig::new(1));

    assert_eq!(frequent.len(), 7);
    for itemset in [
        btreeset!["x"],
        btreeset!["y"],
        btreeset!["z"],
        btreeset!["x", "y"],
        btreeset!["x", "z"],
        btreeset!["y", "z"],
        btreeset!["x", "y", "z"],
    ] {
        assert_eq!(frequent[&itemset], btreeset![1]);
    }
}

#[test]
fn universal_items_can_be_excluded() {
    let horizontal_db = hashmap! {
        1 => hashset!["bag", "a", "b"],
        2 => hashset!["bag", "a"],
        3 => hashset!["bag", "a", "b"],
    };

    let with_universal = mine(&horizontal_db, &MiningConfig::new(2));
    assert_eq!(with_universal[&btreeset!["bag"]], btreeset![1, 2, 3]);
    assert_eq!(with_universal[&btreeset!["bag", "a", "b"]], btreeset![1, 3]);

    let without_universal = mine(
        &horizontal_db,
        &MiningConfig::new(2).with_include_universal(false),
    );
    // "a" is universal too.
    assert_eq!(
        without_universal,
        hashmap! { btreeset!["b"] => btreeset![1, 3] }
    );
    assert!(without_universal
        .keys()
        .all(|itemset| !itemset.contains("bag")));
}

#[test]
fn empty_database_yields_empty_result() {
    let horizontal_db: HorizontalDb<u32, &str> = HorizontalDb::new();
    assert!(mine(&horizontal_db, &MiningConfig::new(1)).is_empty());
    assert!(mine(
        &horizontal_db,
        &MiningConfig::new(1).with_include_universal(false)
    )
    .is_empty());
}

#[test]
fn non_positive_threshold_is_rejected() {
    assert_eq!(
        mine_with_progress(&abc(), &MiningConfig::new(0), &mut NoProgress),
        Err(EclatError::InvalidThreshold {
            min_support_count: 0
        })
    );
    assert_eq!(
        MiningConfig::from_signed(-2),
        Err(EclatError::InvalidThreshold {
            min_support_count: -2
        })
    );
}

#[test]
fn mining_is_idempotent() {
    let config = MiningConfig::new(1);
    assert_eq!(mine(&abc(), &config), mine(&abc(), &config));
}

#[test]
fn progress_does_not_change_the_result() {
    let mut levels = 0;
    let mut hook = |event: ProgressEvent| {
        if let ProgressEvent::LevelFinished { .. } = event {
            levels += 1;
        }
    };
    let with_hook = mine_with_progress(&abc(), &MiningConfig::new(1), &mut hook).unwrap();
    assert_eq!(with_hook, mine(&abc(), &MiningConfig::new(1)));
    // levels 1, 2, 3 and the empty level 4
    assert_eq!(levels, 4);
}

#[test]
fn default_entry_point_logs_and_mines() {
    let frequent = eclat::mine(&abc(), &MiningConfig::new(3)).unwrap();
    assert_eq!(frequent.len(), 3);
}

#[test]
fn tids_and_items_are_opaque() {
    let horizontal_db = hashmap! {
        "t-1".to_string() => hashset![(1, 'x'), (2, 'y')],
        "t-2".to_string() => hashset![(1, 'x')],
    };
    let frequent = eclat::mine(&horizontal_db, &MiningConfig::new(1)).unwrap();

    assert_eq!(
        frequent[&btreeset![(1, 'x'), (2, 'y')]],
        btreeset!["t-1".to_string()]
    );
    assert_eq!(
        frequent[&btreeset![(1, 'x')]],
        btreeset!["t-1".to_string(), "t-2".to_string()]
    );
}
