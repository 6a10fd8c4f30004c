use prefpair::generator::{generate, PairConfig, SamplingMode};
use proptest::prelude::*;
use std::path::Path;
use tempfile::TempDir;

use crate::integration::support::make_groups;

const FOUR: &[&str] = &["1.mp4", "2.mp4", "3.mp4", "4.mp4"];

fn pair_config(temp: &TempDir, total: usize, seed: Option<u64>, mode: SamplingMode) -> PairConfig {
    let groups = make_groups(temp.path(), &[("A", FOUR), ("B", FOUR)]);
    PairConfig {
        total,
        groups,
        suffix: ".mp4".to_string(),
        seed,
        mode,
    }
}

/// Last path component as a string.
fn leaf(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}

#[test]
fn same_seed_same_tasks() {
    let temp = TempDir::new().unwrap();
    let config = pair_config(&temp, 3, Some(42), SamplingMode::Independent);

    let first = generate(&config).unwrap();
    let second = generate(&config).unwrap();
    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn seed_42_yields_known_tasks() {
    let temp = TempDir::new().unwrap();
    let config = pair_config(&temp, 3, Some(42), SamplingMode::Independent);

    let got: Vec<(String, String, String, String)> = generate(&config)
        .unwrap()
        .iter()
        .map(|t| {
            (
                leaf(&t.item_a),
                leaf(&t.item_b),
                leaf(Path::new(&t.metadata.a_group)),
                leaf(Path::new(&t.metadata.b_group)),
            )
        })
        .collect();

    let expected = [
        ("3.mp4", "4.mp4", "A", "B"),
        ("3.mp4", "2.mp4", "B", "A"),
        ("1.mp4", "4.mp4", "A", "B"),
    ];
    let expected: Vec<(String, String, String, String)> = expected
        .iter()
        .map(|(a, b, ga, gb)| (a.to_string(), b.to_string(), ga.to_string(), gb.to_string()))
        .collect();
    assert_eq!(got, expected);
}

#[test]
fn tasks_reference_existing_items_from_distinct_groups() {
    let temp = TempDir::new().unwrap();
    let config = pair_config(&temp, 3, Some(42), SamplingMode::Independent);

    for (position, task) in generate(&config).unwrap().iter().enumerate() {
        assert_eq!(task.id, position as u64);
        assert!(task.item_a.is_file());
        assert!(task.item_b.is_file());
        assert_ne!(task.metadata.a_group, task.metadata.b_group);
        assert!(task.item_a.starts_with(&task.metadata.a_group));
        assert!(task.item_b.starts_with(&task.metadata.b_group));
    }
}

#[test]
fn paired_mode_uses_the_same_name() {
    let temp = TempDir::new().unwrap();
    let config = pair_config(&temp, 6, Some(9), SamplingMode::PairedByName);

    for task in generate(&config).unwrap() {
        assert_eq!(task.item_a.file_name(), task.item_b.file_name());
        assert_ne!(task.item_a.parent(), task.item_b.parent());
    }
}

#[test]
fn files_with_other_suffixes_are_never_drawn() {
    let temp = TempDir::new().unwrap();
    let groups = make_groups(
        temp.path(),
        &[("A", &["1.mp4", "skip.txt"]), ("B", &["2.mp4", ".hidden.mp4"])],
    );
    let config = PairConfig {
        total: 20,
        groups,
        suffix: ".mp4".to_string(),
        seed: Some(1),
        mode: SamplingMode::Independent,
    };

    for task in generate(&config).unwrap() {
        for item in [&task.item_a, &task.item_b] {
            let name = item.file_name().unwrap().to_string_lossy().into_owned();
            assert!(name == "1.mp4" || name == "2.mp4", "unexpected item {}", name);
        }
    }
}

#[test]
fn empty_group_is_an_error() {
    let temp = TempDir::new().unwrap();
    let groups = make_groups(temp.path(), &[("A", &["1.mp4"]), ("B", &["readme.txt"])]);
    let config = PairConfig {
        total: 1,
        groups,
        suffix: ".mp4".to_string(),
        seed: Some(0),
        mode: SamplingMode::Independent,
    };

    let err = generate(&config).unwrap_err();
    assert!(err.to_string().contains("No items matching"));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn seeded_generation_is_reproducible(seed in any::<u64>(), total in 0usize..12) {
        let temp = TempDir::new().unwrap();
        let groups = make_groups(
            temp.path(),
            &[("A", FOUR), ("B", FOUR), ("C", &["1.mp4", "2.mp4"])],
        );
        let config = PairConfig {
            total,
            groups,
            suffix: ".mp4".to_string(),
            seed: Some(seed),
            mode: SamplingMode::Independent,
        };

        let first = generate(&config).unwrap();
        let second = generate(&config).unwrap();
        prop_assert_eq!(first.len(), total);
        prop_assert_eq!(&first, &second);
        for task in &first {
            prop_assert_ne!(&task.metadata.a_group, &task.metadata.b_group);
        }
    }
}
