//! Integration tests for the command history.

use bloom_core::{Action, Bouquet, CommandManager};

fn run_all(manager: &mut CommandManager, bouquet: &mut Bouquet, flowers: &[&str]) {
    for flower in flowers {
        manager.run(bouquet, Action::add_flower(*flower));
    }
}

/// Undoing every run restores the bouquet, whatever it started with.
#[test]
fn test_undo_all_restores_original_collection() {
    let sequences: &[&[&str]] = &[
        &[],
        &["Rose"],
        &["Rose", "Tulip"],
        &["Rose", "Rose", "Rose"],
        &["Lily", "Orchid", "Peony", "Daisy", "Iris"],
    ];
    let starting_points: &[&[&str]] = &[&[], &["Fern"], &["Fern", "Rose"]];

    for start in starting_points {
        for flowers in sequences {
            let mut bouquet = Bouquet::new("Test");
            bouquet.flowers = start.iter().map(|s| s.to_string()).collect();
            let original = bouquet.clone();
            let mut manager = CommandManager::new();

            run_all(&mut manager, &mut bouquet, flowers);
            assert_eq!(bouquet.len(), start.len() + flowers.len());

            for _ in 0..flowers.len() {
                assert!(manager.undo(&mut bouquet).is_some());
            }

            assert_eq!(bouquet, original, "sequence {:?} from {:?}", flowers, start);
            assert!(manager.is_empty());
        }
    }
}

/// Each undo peels off exactly the last flower that was added.
#[test]
fn test_undo_steps_back_through_every_prefix() {
    let flowers = ["Rose", "Tulip", "Lily", "Orchid"];
    let mut bouquet = Bouquet::new("Spring Mix");
    let mut manager = CommandManager::new();

    run_all(&mut manager, &mut bouquet, &flowers);

    for remaining in (0..flowers.len()).rev() {
        let undone = manager.undo(&mut bouquet).unwrap();
        assert_eq!(undone, Action::add_flower(flowers[remaining]));
        assert_eq!(bouquet.flowers, flowers[..remaining].to_vec());
    }

    assert!(manager.undo(&mut bouquet).is_none());
    assert!(bouquet.is_empty());
}

/// Extra undo calls past the start of history change nothing.
#[test]
fn test_extra_undos_are_ignored() {
    let mut bouquet = Bouquet::new("Roses");
    let mut manager = CommandManager::new();

    run_all(&mut manager, &mut bouquet, &["Rose"]);
    manager.undo(&mut bouquet);

    for _ in 0..3 {
        assert!(manager.undo(&mut bouquet).is_none());
    }
    assert!(bouquet.is_empty());
    assert!(manager.history().is_empty());
}

/// Running after an undo continues from the reduced state.
#[test]
fn test_run_after_undo() {
    let mut bouquet = Bouquet::new("Roses");
    let mut manager = CommandManager::new();

    run_all(&mut manager, &mut bouquet, &["Rose", "Tulip"]);
    manager.undo(&mut bouquet);
    manager.run(&mut bouquet, Action::add_flower("Lily"));

    assert_eq!(bouquet.flowers, vec!["Rose", "Lily"]);
    assert_eq!(
        manager.history(),
        &[Action::add_flower("Rose"), Action::add_flower("Lily")]
    );
}
