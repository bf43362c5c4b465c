// ABOUTME: HTML page rendering for the recommendation form and results
// ABOUTME: Inline templates with escaped user content, no template engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitAdvisor

//! Page rendering
//!
//! One page serves both the empty form and the result view. All dynamic
//! text is HTML-escaped before interpolation; icon filenames come from the
//! static image catalog and are escaped anyway.

use html_escape::encode_text;

use crate::models::PredictionResult;

/// Render the landing page, optionally with a prediction and its icons
#[must_use]
pub fn render_page(
    result: Option<&PredictionResult>,
    exercise_images: &[String],
    equipment_images: &[String],
    paragraph: &str,
) -> String {
    let result_section = result.map_or_else(String::new, |prediction| {
        format!(
            r#"        <div class="results">
            <p class="result-line">{exercises}</p>
            <div class="icons">{exercise_icons}</div>
            <p class="result-line">{diet}</p>
            <p class="result-line">{equipment}</p>
            <div class="icons">{equipment_icons}</div>
        </div>
"#,
            exercises = encode_text(&prediction.exercises),
            diet = encode_text(&prediction.diet),
            equipment = encode_text(&prediction.equipment),
            exercise_icons = render_icons(exercise_images),
            equipment_icons = render_icons(equipment_images),
        )
    });

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>FitAdvisor</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; background-color: #f8f9fa; }}
        .container {{ max-width: 640px; margin: 0 auto; padding: 20px; background: white; border: 1px solid #ddd; border-radius: 8px; }}
        textarea {{ width: 100%; min-height: 120px; padding: 8px; border: 1px solid #ccc; border-radius: 4px; }}
        button {{ background-color: #007bff; color: white; padding: 10px 20px; border: none; border-radius: 4px; cursor: pointer; }}
        button:hover {{ background-color: #0056b3; }}
        .results {{ margin-top: 20px; padding: 15px; background-color: #f8f9fa; border-radius: 4px; }}
        .result-line {{ font-size: 1.1em; }}
        .icons img {{ height: 72px; margin: 4px; border-radius: 4px; }}
    </style>
</head>
<body>
    <div class="container">
        <h2>FitAdvisor</h2>
        <p>Describe yourself and your fitness goal in a few sentences.</p>
        <form method="post" action="/">
            <textarea name="paragraph" placeholder="I am a 28-year-old female, 165 cm tall, 60 kg, intermediate level, aiming for weight gain.">{paragraph}</textarea>
            <button type="submit">Get Recommendations</button>
        </form>
{result_section}    </div>
</body>
</html>
"#,
        paragraph = encode_text(paragraph),
        result_section = result_section,
    )
}

fn render_icons(filenames: &[String]) -> String {
    filenames
        .iter()
        .map(|file| {
            let file = encode_text(file);
            format!(r#"<img src="/static/{file}" alt="{file}">"#)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_page_has_form_and_no_results() {
        let page = render_page(None, &[], &[], "");
        assert!(page.contains(r#"<textarea name="paragraph""#));
        assert!(!page.contains("result-line"));
    }

    #[test]
    fn test_result_page_renders_lines_and_icons() {
        let prediction = PredictionResult {
            exercises: "🏋️ Exercises: Squats and yoga".into(),
            diet: "🥗 Diet: Vegetables".into(),
            equipment: "🛠 Equipment: Dumbbells".into(),
        };
        let page = render_page(
            Some(&prediction),
            &["squats.jpeg".into(), "yoga.jpeg".into()],
            &["dumbbells.jpeg".into()],
            "some text",
        );
        assert!(page.contains("🏋️ Exercises: Squats and yoga"));
        assert!(page.contains(r#"<img src="/static/squats.jpeg""#));
        assert!(page.contains(r#"<img src="/static/dumbbells.jpeg""#));
        assert!(page.contains("some text"));
    }

    #[test]
    fn test_user_input_is_escaped() {
        let page = render_page(None, &[], &[], "<script>alert(1)</script>");
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
