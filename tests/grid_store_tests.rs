//! GridStore tests - double buffer, bounds and seeding

use tui_life::core::{Grid, GridStore, SimRng};

#[test]
fn test_store_new_empty() {
    let store = GridStore::new(32, 16);
    assert_eq!(store.width(), 32);
    assert_eq!(store.height(), 16);

    for y in 0..16 {
        for x in 0..32 {
            assert!(!store.get(x, y), "Cell ({}, {}) should be inactive", x, y);
        }
    }
    assert!(store.next().is_clear());
}

#[test]
fn test_reset_clears_every_cell() {
    let mut store = GridStore::new(64, 64);
    store.randomize(100, &mut SimRng::new(8));
    assert!(store.past().count_active() > 0);

    store.reset();
    for y in 0..64 {
        for x in 0..64 {
            assert!(!store.get(x, y));
        }
    }
    assert!(store.next().is_clear());
}

#[test]
fn test_get_out_of_bounds_is_inactive() {
    let store = GridStore::from_grid(Grid::from_rows(&["###", "###", "###"]));

    assert!(!store.get(-1, 0));
    assert!(!store.get(0, -1));
    assert!(!store.get(3, 0));
    assert!(!store.get(0, 3));
    assert!(!store.get(i32::MAX, i32::MIN));
}

#[test]
fn test_set_and_get() {
    let mut store = GridStore::new(10, 20);

    assert!(store.set(5, 10, true));
    assert!(store.get(5, 10));

    assert!(store.set(0, 0, true));
    assert!(store.get(0, 0));

    assert!(store.set(5, 10, false));
    assert!(!store.get(5, 10));
}

#[test]
fn test_set_out_of_bounds_is_ignored() {
    let mut store = GridStore::new(10, 20);

    assert!(!store.set(-1, 0, true));
    assert!(!store.set(0, -1, true));
    assert!(!store.set(10, 0, true));
    assert!(!store.set(0, 20, true));
    assert!(store.past().is_clear());
}

#[test]
fn test_randomize_zero_chance_is_sparse() {
    // Only a roll of exactly 0 passes: ~1% eligible, ~0.5% active.
    let mut store = GridStore::new(256, 256);
    for seed in 0..4 {
        let population = store.randomize(0, &mut SimRng::new(seed));
        let fraction = population as f64 / store.past().len() as f64;
        assert!((0.002..=0.01).contains(&fraction), "fraction {}", fraction);
    }
}

#[test]
fn test_randomize_full_chance_is_coin_flip() {
    let mut store = GridStore::new(256, 256);
    let population = store.randomize(100, &mut SimRng::new(2024));
    let fraction = population as f64 / store.past().len() as f64;
    assert!(
        (0.3..=0.7).contains(&fraction),
        "active fraction {} outside [0.3, 0.7]",
        fraction
    );
}

#[test]
fn test_randomize_low_chance_is_sparse() {
    // 6% eligible (rolls 0..=5), half of those active: ~3% of cells.
    let mut store = GridStore::new(256, 256);
    let population = store.randomize(5, &mut SimRng::new(11));
    let fraction = population as f64 / store.past().len() as f64;
    assert!((0.01..=0.05).contains(&fraction), "fraction {}", fraction);
}

#[test]
fn test_randomize_clamps_chance() {
    let mut a = GridStore::new(64, 64);
    let mut b = GridStore::new(64, 64);
    a.randomize(u8::MAX, &mut SimRng::new(5));
    b.randomize(100, &mut SimRng::new(5));
    assert_eq!(a.past(), b.past());
}

#[test]
fn test_randomize_discards_previous_state() {
    let mut store = GridStore::from_grid(Grid::from_rows(&["####", "####", "####", "####"]));
    store.compute_next();
    let population = store.randomize(0, &mut SimRng::new(1));
    assert!(population <= 2, "population {}", population);
    assert_eq!(population, store.past().count_active());
    assert!(store.next().is_clear());
}

#[test]
fn test_scratch_is_clear_after_every_step() {
    let mut store = GridStore::new(128, 128);
    store.randomize(50, &mut SimRng::new(42));

    for _ in 0..10 {
        let population = store.step();
        assert!(store.next().is_clear());
        assert_eq!(population, store.past().count_active());
    }
}

#[test]
fn test_commit_adopts_computed_generation() {
    let mut store = GridStore::from_grid(Grid::from_rows(&[".....", "..#..", "..#..", "..#..", "....."]));
    store.compute_next();
    let computed = store.next().clone();

    store.commit_step();
    assert_eq!(store.past(), &computed);
    assert!(store.next().is_clear());
}
