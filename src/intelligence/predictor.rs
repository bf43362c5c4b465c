// ABOUTME: Prediction engine for the multi-output recommendation classifier
// ABOUTME: Preprocessing transform, dense forward pass, softmax heads, label formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! # Predictor
//!
//! Runs one [`ExtractedProfile`] through the fitted preprocessing transform
//! and the trained classifier. A schema mismatch (unknown categorical value,
//! missing column) propagates to the caller uncaught: no retry, no fallback,
//! no partial result.

use crate::errors::{AppError, AppResult};
use crate::intelligence::artifacts::{
    Activation, DenseLayer, HeadSpec, LabelMapping, ModelBundle, PreprocessorSpec,
};
use crate::models::{ExtractedProfile, PredictionResult};

/// One structured input row with the column names the transform was fitted on
#[derive(Debug)]
pub struct ProfileRecord<'a> {
    numeric: [(&'static str, f64); 4],
    categorical: [(&'static str, &'a str); 3],
}

impl<'a> ProfileRecord<'a> {
    /// Assemble the record the preprocessor expects; names and casing are
    /// part of the training contract
    #[must_use]
    pub fn from_profile(profile: &'a ExtractedProfile) -> Self {
        #[allow(clippy::cast_precision_loss)] // Ages are far below f64 precision limits
        let age = profile.age as f64;
        Self {
            numeric: [
                ("Age", age),
                ("Height", profile.height_m),
                ("Weight", profile.weight_kg),
                ("BMI", profile.bmi),
            ],
            categorical: [
                ("Sex", profile.sex.as_str()),
                ("Level", profile.level.as_str()),
                ("Fitness Goal", profile.goal.as_str()),
            ],
        }
    }

    fn numeric(&self, name: &str) -> Option<f64> {
        self.numeric
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    fn categorical(&self, name: &str) -> Option<&str> {
        self.categorical
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }
}

/// The loaded classifier, validated and ready to serve
///
/// Constructed once at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct Predictor {
    preprocessor: PreprocessorSpec,
    hidden: Vec<DenseLayer>,
    exercises_head: HeadSpec,
    diet_head: HeadSpec,
    equipment_head: HeadSpec,
    exercises: LabelMapping,
    diet: LabelMapping,
    equipment: LabelMapping,
}

impl Predictor {
    /// Validate a loaded bundle and build the predictor
    ///
    /// # Errors
    ///
    /// Returns a configuration error when layer dimensions, head widths, or
    /// mapping lengths are inconsistent
    pub fn new(bundle: ModelBundle) -> AppResult<Self> {
        let ModelBundle {
            preprocessor,
            network,
            exercises,
            diet,
            equipment,
        } = bundle;

        let mut dim = preprocessor.output_dim();
        for (i, layer) in network.hidden.iter().enumerate() {
            validate_matrix(&layer.weights, &layer.bias, dim, &format!("hidden layer {i}"))?;
            dim = layer.output_dim();
        }

        let mut heads = network.heads;
        let exercises_head = take_head(&mut heads, "exercises")?;
        let diet_head = take_head(&mut heads, "diet")?;
        let equipment_head = take_head(&mut heads, "equipment")?;

        for (head, mapping) in [
            (&exercises_head, &exercises),
            (&diet_head, &diet),
            (&equipment_head, &equipment),
        ] {
            validate_matrix(&head.weights, &head.bias, dim, &format!("head '{}'", head.name))?;
            if head.class_count() != mapping.len() {
                return Err(AppError::config_invalid(format!(
                    "head '{}' predicts {} classes but its label mapping has {} entries",
                    head.name,
                    head.class_count(),
                    mapping.len()
                )));
            }
        }

        Ok(Self {
            preprocessor,
            hidden: network.hidden,
            exercises_head,
            diet_head,
            equipment_head,
            exercises,
            diet,
            equipment,
        })
    }

    /// Run one profile through the transform and the classifier
    ///
    /// # Errors
    ///
    /// Returns a schema mismatch when the record does not fit the fitted
    /// transform; the error propagates to the caller with no fallback
    pub fn predict(&self, profile: &ExtractedProfile) -> AppResult<PredictionResult> {
        let record = ProfileRecord::from_profile(profile);
        let features = self.transform(&record)?;

        let mut activations = features;
        for layer in &self.hidden {
            activations = forward_dense(layer, &activations);
        }

        let exercises_label = self.head_label(&self.exercises_head, &self.exercises, &activations)?;
        let diet_label = self.head_label(&self.diet_head, &self.diet, &activations)?;
        let equipment_label = self.head_label(&self.equipment_head, &self.equipment, &activations)?;

        Ok(PredictionResult {
            exercises: format!("🏋️ Exercises: {exercises_label}"),
            diet: format!("🥗 Diet: {diet_label}"),
            equipment: format!("🛠 Equipment: {equipment_label}"),
        })
    }

    /// Apply the fitted transform: numeric columns standard-scaled, then
    /// categorical columns one-hot encoded, all in the fitted column order
    fn transform(&self, record: &ProfileRecord<'_>) -> AppResult<Vec<f64>> {
        let mut features = Vec::with_capacity(self.preprocessor.output_dim());

        for column in &self.preprocessor.numeric {
            let value = record.numeric(&column.name).ok_or_else(|| {
                AppError::schema_mismatch(format!(
                    "numeric column '{}' missing from input record",
                    column.name
                ))
            })?;
            // std == 0 scales by 1, matching the fitted scaler's guard for
            // zero-variance columns
            let std = if column.std == 0.0 { 1.0 } else { column.std };
            features.push((value - column.mean) / std);
        }

        for column in &self.preprocessor.categorical {
            let value = record.categorical(&column.name).ok_or_else(|| {
                AppError::schema_mismatch(format!(
                    "categorical column '{}' missing from input record",
                    column.name
                ))
            })?;
            let position = column
                .categories
                .iter()
                .position(|c| c == value)
                .ok_or_else(|| {
                    AppError::schema_mismatch(format!(
                        "unrecognized value '{}' for column '{}' (fitted categories: {})",
                        value,
                        column.name,
                        column.categories.join(", ")
                    ))
                })?;
            for i in 0..column.categories.len() {
                features.push(if i == position { 1.0 } else { 0.0 });
            }
        }

        Ok(features)
    }

    fn head_label<'m>(
        &self,
        head: &HeadSpec,
        mapping: &'m LabelMapping,
        activations: &[f64],
    ) -> AppResult<&'m str> {
        let probabilities = softmax(&affine(&head.weights, &head.bias, activations));
        mapping.label(argmax(&probabilities))
    }
}

fn take_head(heads: &mut Vec<HeadSpec>, name: &str) -> AppResult<HeadSpec> {
    heads
        .iter()
        .position(|h| h.name == name)
        .map(|i| heads.swap_remove(i))
        .ok_or_else(|| AppError::config_invalid(format!("model is missing the '{name}' head")))
}

fn validate_matrix(
    weights: &[Vec<f64>],
    bias: &[f64],
    expected_inputs: usize,
    what: &str,
) -> AppResult<()> {
    if weights.is_empty() {
        return Err(AppError::config_invalid(format!("{what} has no weights")));
    }
    if weights.iter().any(|row| row.len() != expected_inputs) {
        return Err(AppError::config_invalid(format!(
            "{what} expects {expected_inputs} inputs but a weight row differs"
        )));
    }
    if bias.len() != weights.len() {
        return Err(AppError::config_invalid(format!(
            "{what} has {} weight rows but {} bias entries",
            weights.len(),
            bias.len()
        )));
    }
    Ok(())
}

fn affine(weights: &[Vec<f64>], bias: &[f64], input: &[f64]) -> Vec<f64> {
    weights
        .iter()
        .zip(bias)
        .map(|(row, b)| row.iter().zip(input).map(|(w, x)| w * x).sum::<f64>() + b)
        .collect()
}

fn forward_dense(layer: &DenseLayer, input: &[f64]) -> Vec<f64> {
    let mut output = affine(&layer.weights, &layer.bias, input);
    if layer.activation == Activation::Relu {
        for v in &mut output {
            *v = v.max(0.0);
        }
    }
    output
}

/// Numerically stable softmax
fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = logits.iter().map(|v| (v - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|v| v / sum).collect()
}

/// Index of the maximum value; ties break to the lowest index
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intelligence::artifacts::{CategoricalColumn, NetworkSpec, NumericColumn};
    use crate::models::{ExperienceLevel, FitnessGoal, Sex};

    fn test_preprocessor() -> PreprocessorSpec {
        PreprocessorSpec {
            numeric: vec![
                NumericColumn {
                    name: "Age".into(),
                    mean: 25.0,
                    std: 5.0,
                },
                NumericColumn {
                    name: "Height".into(),
                    mean: 1.7,
                    std: 0.1,
                },
                NumericColumn {
                    name: "Weight".into(),
                    mean: 70.0,
                    std: 10.0,
                },
                NumericColumn {
                    name: "BMI".into(),
                    mean: 24.0,
                    std: 4.0,
                },
            ],
            categorical: vec![
                CategoricalColumn {
                    name: "Sex".into(),
                    categories: vec!["male".into(), "female".into()],
                },
                CategoricalColumn {
                    name: "Level".into(),
                    categories: vec![
                        "beginner".into(),
                        "intermediate".into(),
                        "advanced".into(),
                    ],
                },
                CategoricalColumn {
                    name: "Fitness Goal".into(),
                    categories: vec![
                        "weight_loss".into(),
                        "weight_gain".into(),
                        "maintenance".into(),
                    ],
                },
            ],
        }
    }

    fn constant_head(name: &str, bias: Vec<f64>, inputs: usize) -> HeadSpec {
        HeadSpec {
            name: name.into(),
            weights: vec![vec![0.0; inputs]; bias.len()],
            bias,
        }
    }

    /// Bundle with zero-weight heads: the bias alone decides each argmax
    fn test_bundle() -> ModelBundle {
        let inputs = test_preprocessor().output_dim();
        ModelBundle {
            preprocessor: test_preprocessor(),
            network: NetworkSpec {
                hidden: vec![],
                heads: vec![
                    constant_head("exercises", vec![0.1, 0.9, 0.2], inputs),
                    constant_head("diet", vec![0.7, 0.1], inputs),
                    constant_head("equipment", vec![0.0, 0.0, 0.5], inputs),
                ],
            },
            exercises: LabelMapping::new(vec!["Squats".into(), "Yoga".into(), "Cycling".into()]),
            diet: LabelMapping::new(vec!["Vegetables".into(), "Protein".into()]),
            equipment: LabelMapping::new(vec![
                "Dumbbells".into(),
                "Barbells".into(),
                "Treadmills".into(),
            ]),
        }
    }

    #[test]
    fn test_transform_scales_and_one_hot_encodes() {
        let predictor = Predictor::new(test_bundle()).unwrap();
        let profile = ExtractedProfile {
            age: 30,
            height_m: 1.8,
            weight_kg: 80.0,
            bmi: 28.0,
            sex: Sex::Female,
            level: ExperienceLevel::Intermediate,
            goal: FitnessGoal::WeightGain,
        };
        let record = ProfileRecord::from_profile(&profile);
        let features = predictor.transform(&record).unwrap();

        assert_eq!(features.len(), 12);
        assert!((features[0] - 1.0).abs() < 1e-9); // (30 - 25) / 5
        assert!((features[1] - 1.0).abs() < 1e-9); // (1.8 - 1.7) / 0.1
        assert!((features[2] - 1.0).abs() < 1e-9); // (80 - 70) / 10
        assert!((features[3] - 1.0).abs() < 1e-9); // (28 - 24) / 4
        assert_eq!(&features[4..6], &[0.0, 1.0]); // female
        assert_eq!(&features[6..9], &[0.0, 1.0, 0.0]); // intermediate
        assert_eq!(&features[9..12], &[0.0, 1.0, 0.0]); // weight_gain
    }

    #[test]
    fn test_unknown_category_propagates_schema_mismatch() {
        let mut bundle = test_bundle();
        bundle.preprocessor.categorical[0].categories = vec!["male".into()];
        let predictor = Predictor::new(bundle).unwrap();

        let profile = ExtractedProfile {
            sex: Sex::Female,
            ..ExtractedProfile::default()
        };
        let err = predictor.predict(&profile).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::SchemaMismatch);
        assert!(err.message.contains("female"));
    }

    #[test]
    fn test_predict_formats_all_three_heads() {
        let predictor = Predictor::new(test_bundle()).unwrap();
        let result = predictor.predict(&ExtractedProfile::default()).unwrap();

        assert_eq!(result.exercises, "🏋️ Exercises: Yoga");
        assert_eq!(result.diet, "🥗 Diet: Vegetables");
        assert_eq!(result.equipment, "🛠 Equipment: Treadmills");
    }

    #[test]
    fn test_argmax_ties_break_to_lowest_index() {
        assert_eq!(argmax(&[0.5, 0.5, 0.1]), 0);
        assert_eq!(argmax(&[0.1, 0.3, 0.3]), 1);
        assert_eq!(argmax(&[1.0]), 0);
    }

    #[test]
    fn test_softmax_sums_to_one() {
        let probs = softmax(&[1.0, 2.0, 3.0]);
        let sum: f64 = probs.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!(probs[2] > probs[1] && probs[1] > probs[0]);
    }

    #[test]
    fn test_relu_hidden_layer_forward() {
        let layer = DenseLayer {
            weights: vec![vec![1.0, -1.0], vec![-1.0, 1.0]],
            bias: vec![0.0, 0.0],
            activation: Activation::Relu,
        };
        assert_eq!(forward_dense(&layer, &[2.0, 1.0]), vec![1.0, 0.0]);
    }

    #[test]
    fn test_bundle_validation_rejects_width_mismatch() {
        let mut bundle = test_bundle();
        bundle.exercises = LabelMapping::new(vec!["only one".into()]);
        let err = Predictor::new(bundle).unwrap_err();
        assert_eq!(err.code, crate::errors::ErrorCode::ConfigInvalid);
    }

    #[test]
    fn test_bundle_validation_rejects_missing_head() {
        let mut bundle = test_bundle();
        bundle.network.heads.retain(|h| h.name != "diet");
        let err = Predictor::new(bundle).unwrap_err();
        assert!(err.message.contains("diet"));
    }
}
