use crate::core::{assemble, FallbackMatcher, Page};
use crate::models::{ErrorResponse, HealthResponse, RecommendParams, RecommendResponse};
use crate::services::{CatalogClient, FavoritesClient, PreferencesClient, PreferencesError};
use actix_web::{web, HttpResponse, Responder};
use std::collections::HashSet;
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub preferences: Arc<PreferencesClient>,
    pub favorites: Arc<FavoritesClient>,
    pub catalog: Arc<CatalogClient>,
    pub matcher: FallbackMatcher,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Configure all recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/recommend", web::get().to(recommend));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend endpoint
///
/// GET /api/recommend?userID={userID}&page={page}&limit={limit}
///
/// Fetches the user's preferences and favorites concurrently, gathers
/// candidates through the tiered fallback matcher, and returns the
/// assembled page. A missing preference profile fails the request; an
/// unreachable favorites service degrades to "no exclusions".
async fn recommend(
    state: web::Data<AppState>,
    params: web::Query<RecommendParams>,
) -> impl Responder {
    if let Err(errors) = params.validate() {
        tracing::info!("Validation failed for recommend request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "validation_failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let user_id = match params.user_id.as_deref() {
        Some(id) if !id.is_empty() => id,
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "missing_user_id".to_string(),
                message: "userID query parameter is required".to_string(),
                status_code: 400,
            });
        }
    };

    let request_id = uuid::Uuid::new_v4();
    tracing::info!("[{}] Finding recommendations for user: {}", request_id, user_id);

    // Preferences and favorites have no data dependency; fetch both at once
    let (preferences_result, favorites_result) = tokio::join!(
        state.preferences.get_preferences(user_id),
        state.favorites.get_favorites(user_id),
    );

    let profile = match preferences_result {
        Ok(profile) => profile,
        Err(PreferencesError::NotFound(msg)) => {
            tracing::info!("[{}] {}", request_id, msg);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "preferences_not_found".to_string(),
                message: msg,
                status_code: 404,
            });
        }
        Err(e) => {
            tracing::error!("[{}] Failed to fetch preferences for {}: {}", request_id, user_id, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "recommendation_failed".to_string(),
                message: "Could not produce recommendations".to_string(),
                status_code: 500,
            });
        }
    };

    let favorite_ids: HashSet<String> = match favorites_result {
        Ok(ids) => ids,
        Err(e) => {
            tracing::warn!(
                "[{}] Failed to fetch favorites for {}, proceeding without exclusions: {}",
                request_id,
                user_id,
                e
            );
            HashSet::new()
        }
    };

    let outcome = state.matcher.gather(state.catalog.as_ref(), &profile).await;

    tracing::debug!(
        "[{}] Gathered {} candidates over {} tier(s), excluding {} favorites",
        request_id,
        outcome.cats.len(),
        outcome.tiers_run,
        favorite_ids.len()
    );

    let limit = params.limit.unwrap_or(state.default_limit).min(state.max_limit);
    let page = Page::new(params.page, Some(limit));

    let result = assemble(outcome.cats, &favorite_ids, &profile, page);

    tracing::info!(
        "[{}] Returning {} of {} matched cats for user {}",
        request_id,
        result.cats.len(),
        result.total_matched,
        user_id
    );

    HttpResponse::Ok().json(RecommendResponse {
        cats: result.cats,
        total_matched: result.total_matched,
    })
}
