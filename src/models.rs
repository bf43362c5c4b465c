// ABOUTME: Core data models for the FitAdvisor recommendation service
// ABOUTME: Defines ExtractedProfile, PredictionResult, and the profile enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! # Data Models
//!
//! Domain types shared across the extractor, predictor, and routes.
//! The enum string forms (`as_str`) are part of the fitted preprocessor's
//! contract: they must match the category values the transform was trained
//! with.

use crate::constants::defaults;
use serde::{Deserialize, Serialize};

/// Biological sex as recognized by the extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Category string the fitted preprocessor expects
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Training experience level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Category string the fitted preprocessor expects
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "beginner",
            ExperienceLevel::Intermediate => "intermediate",
            ExperienceLevel::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Stated fitness goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FitnessGoal {
    WeightLoss,
    WeightGain,
    Maintenance,
}

impl FitnessGoal {
    /// Category string the fitted preprocessor expects
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FitnessGoal::WeightLoss => "weight_loss",
            FitnessGoal::WeightGain => "weight_gain",
            FitnessGoal::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for FitnessGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured fields extracted from a free-text profile paragraph
///
/// Every field is always populated: the extractor substitutes static
/// defaults for anything the text does not mention. No numeric range
/// validation is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedProfile {
    /// Age in years
    pub age: i64,
    /// Height in meters
    pub height_m: f64,
    /// Weight in kilograms
    pub weight_kg: f64,
    /// Body Mass Index: parsed from text, or weight / height² rounded to 2 decimals
    pub bmi: f64,
    pub sex: Sex,
    pub level: ExperienceLevel,
    pub goal: FitnessGoal,
}

impl Default for ExtractedProfile {
    fn default() -> Self {
        let height_m = defaults::DEFAULT_HEIGHT_METERS;
        let weight_kg = defaults::DEFAULT_WEIGHT_KG;
        Self {
            age: defaults::DEFAULT_AGE_YEARS,
            height_m,
            weight_kg,
            bmi: crate::extractor::round_2dp(weight_kg / (height_m * height_m)),
            sex: Sex::Male,
            level: ExperienceLevel::Beginner,
            goal: FitnessGoal::WeightLoss,
        }
    }
}

/// Three independent recommendation strings, one per classifier head
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Formatted exercise recommendation (with category prefix and emoji)
    pub exercises: String,
    /// Formatted diet recommendation
    pub diet: String,
    /// Formatted equipment recommendation
    pub equipment: String,
}
