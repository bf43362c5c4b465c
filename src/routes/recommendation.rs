// ABOUTME: Recommendation routes serving the free-text form and prediction results
// ABOUTME: Extracts profile fields, runs the classifier, and renders the result page
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! Recommendation routes
//!
//! One path serves both methods. GET renders the empty form; POST reads the
//! submitted paragraph, extracts a structured profile, runs the predictor,
//! matches result labels to icons, and renders the page with all three
//! recommendation lines. Prediction failures propagate as errors rather
//! than degrading to a partial page.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extractor::extract_profile;
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use crate::templates::render_page;

/// Form body for the recommendation page
#[derive(Debug, Deserialize)]
pub struct RecommendationForm {
    /// Free-text description of the user and their goal
    pub paragraph: Option<String>,
}

/// Recommendation routes implementation
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create the form and prediction routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/", get(Self::handle_form).post(Self::handle_predict))
            .with_state(resources)
    }

    /// Render the empty form
    async fn handle_form() -> Html<String> {
        Html(render_page(None, &[], &[], ""))
    }

    /// Run the extraction and prediction pipeline for a submitted paragraph
    async fn handle_predict(
        State(resources): State<Arc<ServerResources>>,
        Form(form): Form<RecommendationForm>,
    ) -> Result<Response, AppError> {
        let started = Instant::now();
        let paragraph = form.paragraph.unwrap_or_default();

        let profile = extract_profile(&paragraph);
        tracing::debug!(
            profile.age = profile.age,
            profile.sex = %profile.sex,
            profile.level = %profile.level,
            profile.goal = %profile.goal,
            profile.bmi = profile.bmi,
            "Extracted profile from paragraph"
        );

        let prediction = resources.predictor.predict(&profile)?;

        // Icons match against the full result line, lowercased
        let exercise_images = resources.images.match_exercises(&prediction.exercises);
        let equipment_images = resources.images.match_equipment(&prediction.equipment);

        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_prediction(
            profile.age,
            profile.sex.as_str(),
            profile.level.as_str(),
            profile.goal.as_str(),
            duration_ms,
        );

        let page = render_page(
            Some(&prediction),
            &exercise_images,
            &equipment_images,
            &paragraph,
        );
        Ok(Html(page).into_response())
    }
}
