// ABOUTME: Integration tests for label-to-icon matching
// ABOUTME: Validates substring matching, ordering, and overlapping keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

use fitadvisor::images::ImageCatalog;

#[test]
fn test_exercise_label_matches_in_table_order() {
    let catalog = ImageCatalog::new();
    let images =
        catalog.match_exercises("🏋️ Exercises: Yoga, squats, and swimming every morning");
    assert_eq!(images, vec!["squats.jpeg", "yoga.jpeg", "swimming.jpeg"]);
}

#[test]
fn test_overlapping_keys_both_match() {
    let catalog = ImageCatalog::new();
    // "brisk walking" contains "walking", so both entries fire
    let images = catalog.match_exercises("Brisk walking daily");
    assert_eq!(images, vec!["walking.jpeg", "brisk_walking.jpg"]);
}

#[test]
fn test_equipment_rower_synonyms_yield_duplicate_filenames() {
    let catalog = ImageCatalog::new();
    let images = catalog.match_equipment("🛠 Equipment: Indoor rowers and a rowing machine");
    assert_eq!(images, vec!["rower.jpeg", "rower.jpeg"]);
}

#[test]
fn test_unmatched_label_yields_empty_list() {
    let catalog = ImageCatalog::new();
    assert!(catalog.match_exercises("nothing in the table").is_empty());
    assert!(catalog.match_equipment("nothing in the table").is_empty());
}

#[test]
fn test_matching_is_case_insensitive() {
    let catalog = ImageCatalog::new();
    assert_eq!(
        catalog.match_equipment("DUMBBELLS AND BARBELLS"),
        vec!["dumbbells.jpeg", "barbells.jpeg"]
    );
}
