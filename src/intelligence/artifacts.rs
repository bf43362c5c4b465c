// ABOUTME: JSON schema and loader for the trained model artifacts
// ABOUTME: Preprocessor statistics, network weights, and label mapping tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! # Model Artifacts
//!
//! The trained model is an opaque external input: the training pipeline
//! (out of scope) exports the fitted state as JSON files, and this module
//! reads them back at startup. The files carry the standard-scaler
//! statistics and one-hot category lists of the preprocessing transform,
//! the dense-layer weights of the classifier with its three output heads,
//! and one index-to-label array per head.
//!
//! Loading failures are configuration errors that abort startup; the
//! request path never sees a half-loaded model.

use crate::config::environment::ModelConfig;
use crate::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One standard-scaled numeric column of the fitted transform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericColumn {
    /// Column name as the transform was fitted (e.g. "Fitness Goal")
    pub name: String,
    /// Training-set mean
    pub mean: f64,
    /// Training-set standard deviation
    pub std: f64,
}

/// One one-hot encoded categorical column of the fitted transform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalColumn {
    /// Column name as the transform was fitted
    pub name: String,
    /// Category values seen during fitting, in encoding order
    pub categories: Vec<String>,
}

/// The fitted preprocessing transform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessorSpec {
    /// Numeric columns, scaled in listed order
    pub numeric: Vec<NumericColumn>,
    /// Categorical columns, one-hot encoded in listed order
    pub categorical: Vec<CategoricalColumn>,
}

impl PreprocessorSpec {
    /// Width of the feature vector the transform produces
    #[must_use]
    pub fn output_dim(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|c| c.categories.len())
                .sum::<usize>()
    }
}

/// Activation functions the exported network uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    Relu,
    Linear,
}

/// One fully-connected layer; `weights[out][in]`, row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DenseLayer {
    pub weights: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
    pub activation: Activation,
}

impl DenseLayer {
    /// Number of inputs this layer consumes
    #[must_use]
    pub fn input_dim(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    /// Number of outputs this layer produces
    #[must_use]
    pub fn output_dim(&self) -> usize {
        self.weights.len()
    }
}

/// One classification head; softmax is applied to its output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadSpec {
    /// Head name: "exercises", "diet", or "equipment"
    pub name: String,
    pub weights: Vec<Vec<f64>>,
    pub bias: Vec<f64>,
}

impl HeadSpec {
    /// Number of inputs this head consumes
    #[must_use]
    pub fn input_dim(&self) -> usize {
        self.weights.first().map_or(0, Vec::len)
    }

    /// Number of classes this head predicts
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.weights.len()
    }
}

/// The exported multi-output classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSpec {
    /// Shared dense layers, applied in order
    pub hidden: Vec<DenseLayer>,
    /// Independent output heads
    pub heads: Vec<HeadSpec>,
}

/// Class index to human-readable label, indexed by position
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelMapping(Vec<String>);

impl LabelMapping {
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self(labels)
    }

    /// Label for a predicted class index
    ///
    /// # Errors
    ///
    /// Returns a model error when the index falls outside the mapping,
    /// which indicates a head/mapping width mismatch
    pub fn label(&self, index: usize) -> AppResult<&str> {
        self.0.get(index).map(String::as_str).ok_or_else(|| {
            AppError::model(format!(
                "class index {index} outside label mapping of {} entries",
                self.0.len()
            ))
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Everything loaded from the artifact files
#[derive(Debug, Clone)]
pub struct ModelBundle {
    pub preprocessor: PreprocessorSpec,
    pub network: NetworkSpec,
    pub exercises: LabelMapping,
    pub diet: LabelMapping,
    pub equipment: LabelMapping,
}

impl ModelBundle {
    /// Load all artifacts from the configured paths
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a file is missing or not valid
    /// JSON for its schema
    pub fn load(config: &ModelConfig) -> AppResult<Self> {
        Ok(Self {
            preprocessor: load_json(&config.preprocessor_path)?,
            network: load_json(&config.model_path)?,
            exercises: load_json(&config.exercises_mapping_path)?,
            diet: load_json(&config.diet_mapping_path)?,
            equipment: load_json(&config.equipment_mapping_path)?,
        })
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::config(format!("Failed to read artifact {}: {e}", path.display()))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        AppError::config_invalid(format!("Invalid artifact {}: {e}", path.display()))
            .with_source(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dim_counts_one_hot_width() {
        let spec = PreprocessorSpec {
            numeric: vec![
                NumericColumn {
                    name: "Age".into(),
                    mean: 30.0,
                    std: 10.0,
                },
                NumericColumn {
                    name: "BMI".into(),
                    mean: 25.0,
                    std: 4.0,
                },
            ],
            categorical: vec![CategoricalColumn {
                name: "Sex".into(),
                categories: vec!["male".into(), "female".into()],
            }],
        };
        assert_eq!(spec.output_dim(), 4);
    }

    #[test]
    fn test_label_mapping_bounds() {
        let mapping = LabelMapping::new(vec!["a".into(), "b".into()]);
        assert_eq!(mapping.label(1).unwrap(), "b");
        assert!(mapping.label(2).is_err());
    }

    #[test]
    fn test_label_mapping_deserializes_from_plain_array() {
        let mapping: LabelMapping = serde_json::from_str(r#"["x", "y", "z"]"#).unwrap();
        assert_eq!(mapping.len(), 3);
        assert_eq!(mapping.label(0).unwrap(), "x");
    }
}
