// ABOUTME: Intelligence module for the pre-trained recommendation classifier
// ABOUTME: Groups artifact loading and the prediction forward pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! # Intelligence
//!
//! Everything the trained model side of the service needs: the JSON artifact
//! schema with its loader, and the [`Predictor`] that runs one profile
//! through the fitted preprocessing transform and the multi-output
//! classifier.

/// Model artifact schema and loading
pub mod artifacts;

/// The prediction engine: transform, forward pass, label mapping
pub mod predictor;

pub use artifacts::{LabelMapping, ModelBundle, NetworkSpec, PreprocessorSpec};
pub use predictor::Predictor;
