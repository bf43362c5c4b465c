// ABOUTME: Free-text profile field extraction via first-match-wins regex patterns
// ABOUTME: Every field falls back to a static default, so extraction never fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! # Field Extractor
//!
//! Turns a raw paragraph into an [`ExtractedProfile`]. Matching is
//! first-pattern-wins with no validation of numeric ranges: a zero or
//! negative height is accepted as-is, even though the derived BMI is
//! then meaningless. That mirrors the trained model's input contract,
//! which saw no such validation either.
//!
//! All patterns are compiled once into `LazyLock` statics.

use crate::constants::defaults;
use crate::models::{ExperienceLevel, ExtractedProfile, FitnessGoal, Sex};
use regex::Regex;
use std::sync::LazyLock;

/// Regex patterns for the individual profile fields
/// Stored as Option to handle compilation failures gracefully (should never fail for static patterns)
static AGE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "28-year-old", "28 year", "28year"
    Regex::new(r"(?i)(\d+)\s*-?\s*year").ok()
});

static MALE_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?i)\bmale\b").ok());

static FEMALE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\bfemale\b").ok());

static HEIGHT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "165cm", "1.65 m", "180 CM"
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*(?:cm|m)").ok()
});

static WEIGHT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "60kg", "72.5 kg"
    Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*kg").ok()
});

static BMI_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Matches: "BMI 22.5", "bmi: 22.5", "BMI=22.5"
    Regex::new(r"(?i)bmi\s*[:=]?\s*(\d+(?:\.\d+)?)").ok()
});

static BEGINNER_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\bbeginner\b").ok());

static INTERMEDIATE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\bintermediate\b").ok());

static ADVANCED_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\badvanced\b").ok());

static WEIGHT_LOSS_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)weight\s*loss").ok());

static WEIGHT_GAIN_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)weight\s*gain").ok());

static MAINTENANCE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)maintain|maintenance").ok());

/// Round to 2 decimal places, half away from zero
#[must_use]
pub fn round_2dp(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Extract a structured profile from a free-text paragraph
///
/// Never fails: every field has a static default substituted on non-match.
/// Extraction is deterministic and stateless.
#[must_use]
pub fn extract_profile(text: &str) -> ExtractedProfile {
    let age = extract_age(text);
    let sex = extract_sex(text);
    let height_m = extract_height(text);
    let weight_kg = extract_weight(text);
    let bmi = extract_bmi(text, height_m, weight_kg);
    let level = extract_level(text);
    let goal = extract_goal(text);

    ExtractedProfile {
        age,
        height_m,
        weight_kg,
        bmi,
        sex,
        level,
        goal,
    }
}

fn extract_age(text: &str) -> i64 {
    AGE_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.captures(text))
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(defaults::DEFAULT_AGE_YEARS)
}

/// Male is checked first, so text containing both words resolves to male
fn extract_sex(text: &str) -> Sex {
    if matches_word(&MALE_PATTERN, text) {
        Sex::Male
    } else if matches_word(&FEMALE_PATTERN, text) {
        Sex::Female
    } else {
        Sex::Male
    }
}

fn extract_height(text: &str) -> f64 {
    let Some(value) = HEIGHT_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.captures(text))
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
    else {
        return defaults::DEFAULT_HEIGHT_METERS;
    };

    // Unit check runs against the whole input, not the matched unit text
    if text.to_lowercase().contains("cm") {
        value / 100.0
    } else {
        value
    }
}

fn extract_weight(text: &str) -> f64 {
    WEIGHT_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.captures(text))
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(defaults::DEFAULT_WEIGHT_KG)
}

/// A BMI stated in the text overrides the computed value
fn extract_bmi(text: &str, height_m: f64, weight_kg: f64) -> f64 {
    BMI_PATTERN
        .as_ref()
        .and_then(|pattern| pattern.captures(text))
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or_else(|| round_2dp(weight_kg / (height_m * height_m)))
}

/// Fixed priority order: beginner, then intermediate, then advanced
fn extract_level(text: &str) -> ExperienceLevel {
    if matches_word(&BEGINNER_PATTERN, text) {
        ExperienceLevel::Beginner
    } else if matches_word(&INTERMEDIATE_PATTERN, text) {
        ExperienceLevel::Intermediate
    } else if matches_word(&ADVANCED_PATTERN, text) {
        ExperienceLevel::Advanced
    } else {
        ExperienceLevel::Beginner
    }
}

/// Fixed priority order: weight loss, then weight gain, then maintenance
fn extract_goal(text: &str) -> FitnessGoal {
    if matches_word(&WEIGHT_LOSS_PATTERN, text) {
        FitnessGoal::WeightLoss
    } else if matches_word(&WEIGHT_GAIN_PATTERN, text) {
        FitnessGoal::WeightGain
    } else if matches_word(&MAINTENANCE_PATTERN, text) {
        FitnessGoal::Maintenance
    } else {
        FitnessGoal::WeightLoss
    }
}

fn matches_word(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|p| p.is_match(text))
}
