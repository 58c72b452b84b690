use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
};
use tracing::warn;

use crate::database::ActivityStore;
use crate::services::activities_service;

#[derive(Template)]
#[template(path = "index.html")]
pub struct OverviewTemplate {
    pub activities: Vec<activities_service::ActivityCardView>,
    pub activity_names: Vec<String>,
}

pub async fn overview_handler(State(store): State<ActivityStore>) -> impl IntoResponse {
    let data = activities_service::build_overview_page(&store);
    let template = OverviewTemplate {
        activities: data.activities,
        activity_names: data.activity_names,
    };

    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            warn!("Overview render failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
