// ABOUTME: Label-to-image icon matching for rendered recommendations
// ABOUTME: Ordered substring tables mapping label fragments to image filenames
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! # Image Matcher
//!
//! Maps recommendation label strings to icon image filenames. Each table is
//! an immutable ordered slice, checked in fixed iteration order so
//! multi-match results are reproducible: every key appearing as a
//! case-insensitive substring of the label contributes its filename, in
//! table order, with no dedup.

/// Exercise label fragments and their icon files
pub static EXERCISE_IMAGES: &[(&str, &str)] = &[
    ("squats", "squats.jpeg"),
    ("deadlifts", "deadlifts.jpeg"),
    ("bench presses", "bench_press.jpeg"),
    ("overhead presses", "overhead_press.jpeg"),
    ("yoga", "yoga.jpeg"),
    ("walking", "walking.jpeg"),
    ("brisk walking", "brisk_walking.jpg"),
    ("cycling", "cycling.jpeg"),
    ("swimming", "swimming.jpeg"),
    ("dancing", "dancing.jpeg"),
];

/// Equipment label fragments and their icon files
///
/// "indoor rowers" and "rowing machine" intentionally share rower.jpeg:
/// two distinct label fragments, one icon.
pub static EQUIPMENT_IMAGES: &[(&str, &str)] = &[
    ("dumbbells", "dumbbells.jpeg"),
    ("barbells", "barbells.jpeg"),
    ("resistance bands", "resisitance_bands.jpeg"),
    ("light athletic shoes", "shoes.jpeg"),
    ("ellipticals", "elliptical.jpeg"),
    ("indoor rowers", "rower.jpeg"),
    ("treadmills", "treadmill.jpeg"),
    ("rowing machine", "rower.jpeg"),
];

/// Static icon lookup tables shared across requests
#[derive(Debug, Clone)]
pub struct ImageCatalog {
    exercises: &'static [(&'static str, &'static str)],
    equipment: &'static [(&'static str, &'static str)],
}

impl Default for ImageCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageCatalog {
    /// Catalog over the standard icon tables
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exercises: EXERCISE_IMAGES,
            equipment: EQUIPMENT_IMAGES,
        }
    }

    /// Icon files for an exercise recommendation label
    #[must_use]
    pub fn match_exercises(&self, label: &str) -> Vec<String> {
        Self::match_table(self.exercises, label)
    }

    /// Icon files for an equipment recommendation label
    #[must_use]
    pub fn match_equipment(&self, label: &str) -> Vec<String> {
        Self::match_table(self.equipment, label)
    }

    fn match_table(table: &[(&str, &str)], label: &str) -> Vec<String> {
        let label = label.to_lowercase();
        table
            .iter()
            .filter(|(key, _)| label.contains(key))
            .map(|(_, file)| (*file).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_preserve_table_order() {
        let catalog = ImageCatalog::new();
        let images = catalog.match_exercises("Exercises: Squats, Yoga");
        assert_eq!(images, vec!["squats.jpeg", "yoga.jpeg"]);
    }

    #[test]
    fn test_unmatched_label_yields_empty_list() {
        let catalog = ImageCatalog::new();
        assert!(catalog.match_exercises("Exercises: Pilates").is_empty());
        assert!(catalog.match_equipment("Equipment: Kettlebells").is_empty());
    }

    #[test]
    fn test_overlapping_keys_both_match() {
        // "brisk walking" contains "walking", so both keys fire
        let catalog = ImageCatalog::new();
        let images = catalog.match_exercises("brisk walking every morning");
        assert_eq!(images, vec!["walking.jpeg", "brisk_walking.jpg"]);
    }

    #[test]
    fn test_rower_icon_shared_by_two_keys() {
        let catalog = ImageCatalog::new();
        let images = catalog.match_equipment("Indoor rowers or a rowing machine");
        assert_eq!(images, vec!["rower.jpeg", "rower.jpeg"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let catalog = ImageCatalog::new();
        let images = catalog.match_equipment("DUMBBELLS and Barbells");
        assert_eq!(images, vec!["dumbbells.jpeg", "barbells.jpeg"]);
    }
}
