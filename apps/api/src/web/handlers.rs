//! Handlers for the interactive analysis flow.
//!
//! A single route carries the whole flow, mirroring the one-page form:
//! GET renders the role picker; POST with only a role renders the
//! proficiency inputs; POST with proficiencies renders the results.

use std::collections::HashMap;

use axum::{extract::State, response::Html, Form};

use crate::charts;
use crate::errors::AppError;
use crate::scoring::interactive::{parse_form_level, score_skills};
use crate::scoring::recommend::recommend_all;
use crate::state::AppState;
use crate::web::pages;

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Html<String> {
    Html(pages::home(&state.catalog.roles(), None))
}

/// POST /
///
/// The form is parsed as raw key/value pairs because `proficiencies`
/// repeats once per skill and order matters: values pair positionally
/// with the role's requirements.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<Html<String>, AppError> {
    let roles = state.catalog.roles();

    let role = fields
        .iter()
        .find(|(key, _)| key == "role")
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default();

    // Unknown role is a user error, not a server failure: redisplay the
    // form with the role list intact.
    if !state.catalog.contains_role(&role) {
        let message = format!("The role '{role}' does not exist in the dataset.");
        return Ok(Html(pages::home(&roles, Some(&message))));
    }

    let requirements = state.catalog.requirements_for(&role);

    let submitted: Vec<&str> = fields
        .iter()
        .filter(|(key, _)| key == "proficiencies")
        .map(|(_, value)| value.as_str())
        .collect();

    if submitted.is_empty() {
        return Ok(Html(pages::skill_form(&role, &requirements, &roles)));
    }

    // Pair each requirement with its submitted level; blank or garbage
    // input fails open to 0, an unsubmitted trailing field likewise.
    let user_levels: HashMap<String, i32> = requirements
        .iter()
        .enumerate()
        .map(|(i, req)| {
            let level = submitted.get(i).map(|raw| parse_form_level(raw)).unwrap_or(0);
            (req.skill.clone(), level)
        })
        .collect();

    let scored = score_skills(&requirements, &user_levels);
    let recommendations = recommend_all(&scored);
    let bar = charts::bar_chart_png(&scored)?;
    let radar = charts::radar_chart_png(&scored)?;

    Ok(Html(pages::results(
        &role,
        &scored,
        &recommendations,
        &bar,
        &radar,
        &roles,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Importance, Proficiency, RoleCatalog, SkillRequirement};
    use crate::config::Config;
    use crate::routes::build_router;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let catalog = RoleCatalog::new(vec![
            SkillRequirement {
                role: "Data Analyst".to_string(),
                skill: "SQL".to_string(),
                required: Proficiency::Expert,
                importance: Importance::High,
            },
            SkillRequirement {
                role: "Data Analyst".to_string(),
                skill: "Python".to_string(),
                required: Proficiency::Intermediate,
                importance: Importance::Medium,
            },
        ]);
        AppState {
            catalog: Arc::new(catalog),
            config: Config {
                roles_dataset_path: String::new(),
                user_profiles_path: String::new(),
                report_output_path: String::new(),
                batch_user_id_min: 1,
                batch_user_id_max: 10,
                port: 0,
                rust_log: "info".to_string(),
            },
        }
    }

    async fn page(form_body: Option<&str>) -> (StatusCode, String) {
        let app = build_router(test_state());
        let request = match form_body {
            Some(body) => Request::post("/")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => Request::get("/").body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_get_renders_role_dropdown() {
        let (status, html) = page(None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<select"));
        assert!(html.contains("Data Analyst"));
    }

    #[tokio::test]
    async fn test_role_only_post_renders_proficiency_form() {
        let (status, html) = page(Some("role=Data+Analyst")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("name=\"proficiencies\""));
        assert!(html.contains("SQL"));
        assert!(html.contains("Python"));
    }

    #[tokio::test]
    async fn test_unknown_role_redisplays_form_with_error() {
        let (status, html) = page(Some("role=Astronaut")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("does not exist in the dataset"));
        assert!(html.contains("<select"));
        assert!(html.contains("Data Analyst"));
    }

    #[tokio::test]
    async fn test_full_submission_renders_results_with_charts() {
        let (status, html) =
            page(Some("role=Data+Analyst&proficiencies=1&proficiencies=1")).await;
        assert_eq!(status, StatusCode::OK);
        // SQL: gap 2, score 6 → High; Python: gap 1, score 2 → Low.
        assert!(html.contains("High Priority"));
        assert!(html.contains("Low Priority"));
        assert!(html.contains("Moderate gap for SQL."));
        assert!(html.contains("Small gap for Python."));
        assert_eq!(html.matches("data:image/png;base64,").count(), 2);
    }

    #[tokio::test]
    async fn test_blank_proficiency_scores_as_zero() {
        let (_, html) = page(Some("role=Data+Analyst&proficiencies=&proficiencies=abc")).await;
        // SQL: 3-0=3 → Large gap; Python: 2-0=2 → Moderate gap.
        assert!(html.contains("Large gap for SQL."));
        assert!(html.contains("Moderate gap for Python."));
    }

    #[tokio::test]
    async fn test_health_route() {
        let app = build_router(test_state());
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
