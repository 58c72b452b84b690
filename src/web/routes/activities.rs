use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query, State},
    http::request::Parts,
    Json,
};

use crate::database::ActivityStore;
use crate::error::{QueryError, SignupError};
use crate::models::ActivityDirectory;
use crate::services::activities_service::{self, EmailQuery, MessageResponse};

/// The `?email=` parameter of the signup commands.
pub struct EmailParam(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for EmailParam
where
    S: Send + Sync,
{
    type Rejection = QueryError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<EmailQuery>::from_request_parts(parts, state).await?;
        Ok(Self(query.email))
    }
}

pub async fn list_activities_handler(State(store): State<ActivityStore>) -> Json<ActivityDirectory> {
    Json(activities_service::list_activities(&store))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    State(store): State<ActivityStore>,
    EmailParam(email): EmailParam,
) -> Result<Json<MessageResponse>, SignupError> {
    activities_service::signup(&store, &activity_name, &email).map(Json)
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    State(store): State<ActivityStore>,
    EmailParam(email): EmailParam,
) -> Result<Json<MessageResponse>, SignupError> {
    activities_service::unregister(&store, &activity_name, &email).map(Json)
}
