//! HTTP request handlers for the worklog engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::earnings::{
    achievement_tier, daily_earnings, monthly_breakdown, monthly_earnings, yearly_earnings,
};
use crate::error::EngineError;
use crate::locale::Locale;
use crate::models::{ShiftType, ShiftTypePatch};
use crate::report::ReportFormatter;

use super::request::{CreateShiftTypeRequest, SetDayRequest, UpdateSettingsRequest};
use super::response::{
    ApiError, ApiErrorResponse, MonthCalendarResponse, MonthEarningsResponse, SettingsResponse,
    YearEarningsResponse,
};
use super::state::{AppState, TrackerState};

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calendar/:year/:month", get(get_month_handler))
        .route("/calendar/:year/:month/:day", put(set_day_handler))
        .route("/earnings/:year", get(year_earnings_handler))
        .route("/earnings/:year/:month", get(month_earnings_handler))
        .route(
            "/catalog",
            get(list_catalog_handler).post(create_shift_type_handler),
        )
        .route("/catalog/reset", post(reset_catalog_handler))
        .route(
            "/catalog/:type",
            axum::routing::patch(update_shift_type_handler).delete(remove_shift_type_handler),
        )
        .route(
            "/settings",
            get(get_settings_handler).put(update_settings_handler),
        )
        .route("/export/:year", get(export_year_handler))
        .route("/export/:year/:month", get(export_month_handler))
        .with_state(state)
}

fn invalid_month(year: i32, month: u32) -> ApiErrorResponse {
    EngineError::InvalidDate {
        year,
        month,
        day: 1,
    }
    .into()
}

/// Unwraps a JSON body, mapping a failed extraction to the `MALFORMED_JSON`
/// error body so every endpoint rejects bad payloads the same way.
fn require_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiErrorResponse> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => Err(ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::malformed_json(rejection.body_text()),
        }),
    }
}

/// Persists the worked-day store, logging (not failing) on rejection.
/// In-memory state stays authoritative for the session either way.
fn persist_days(tracker: &mut TrackerState) {
    if let Err(e) = tracker.repo.save_days(&tracker.store) {
        warn!(error = %e, "Failed to persist worked days");
    }
}

/// Persists the shift catalog, logging (not failing) on rejection.
fn persist_catalog(tracker: &mut TrackerState) {
    if let Err(e) = tracker.repo.save_catalog(&tracker.catalog) {
        warn!(error = %e, "Failed to persist shift catalog");
    }
}

/// Handler for GET /calendar/{year}/{month}.
async fn get_month_handler(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MonthCalendarResponse>, ApiErrorResponse> {
    if !(1..=12).contains(&month) {
        return Err(invalid_month(year, month));
    }

    let tracker = state.read();
    let days = tracker
        .store
        .get_month(year, month)
        .into_iter()
        .map(|(day, type_key)| (day, type_key.to_string()))
        .collect();
    Ok(Json(MonthCalendarResponse { year, month, days }))
}

/// Handler for PUT /calendar/{year}/{month}/{day}.
///
/// Assigns, replaces or (with a null shift type) erases the day.
async fn set_day_handler(
    State(state): State<AppState>,
    Path((year, month, day)): Path<(i32, u32, u32)>,
    payload: Result<Json<SetDayRequest>, JsonRejection>,
) -> Result<StatusCode, ApiErrorResponse> {
    let request = require_json(payload)?;
    let correlation_id = Uuid::new_v4();
    let mut tracker = state.write();

    tracker
        .store
        .set_day(year, month, day, request.shift_type.as_deref())?;
    persist_days(&mut tracker);

    info!(
        correlation_id = %correlation_id,
        year,
        month,
        day,
        shift_type = request.shift_type.as_deref().unwrap_or(""),
        "Updated calendar day"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /earnings/{year}.
async fn year_earnings_handler(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Json<YearEarningsResponse> {
    let tracker = state.read();
    let months: Vec<_> = (1..=12)
        .map(|month| {
            monthly_earnings(
                &tracker.store,
                &tracker.catalog,
                tracker.base_rate,
                year,
                month,
            )
        })
        .collect();
    Json(YearEarningsResponse {
        year,
        total: yearly_earnings(&tracker.store, &tracker.catalog, tracker.base_rate, year),
        months,
    })
}

/// Handler for GET /earnings/{year}/{month}.
async fn month_earnings_handler(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<Json<MonthEarningsResponse>, ApiErrorResponse> {
    if !(1..=12).contains(&month) {
        return Err(invalid_month(year, month));
    }

    let tracker = state.read();
    let tiers = tracker
        .store
        .get_month(year, month)
        .keys()
        .filter_map(|&day| {
            let earned = daily_earnings(
                &tracker.store,
                &tracker.catalog,
                tracker.base_rate,
                year,
                month,
                day,
            );
            achievement_tier(earned, tracker.base_rate)
                .map(|tier| (day, tier.symbol().to_string()))
        })
        .collect();

    Ok(Json(MonthEarningsResponse {
        year,
        month,
        total: monthly_earnings(
            &tracker.store,
            &tracker.catalog,
            tracker.base_rate,
            year,
            month,
        ),
        breakdown: monthly_breakdown(
            &tracker.store,
            &tracker.catalog,
            tracker.base_rate,
            year,
            month,
        ),
        tiers,
    }))
}

/// Handler for GET /catalog.
async fn list_catalog_handler(State(state): State<AppState>) -> impl IntoResponse {
    let tracker = state.read();
    Json(tracker.catalog.entries().to_vec())
}

/// Handler for POST /catalog.
async fn create_shift_type_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateShiftTypeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let request = require_json(payload)?;
    let correlation_id = Uuid::new_v4();
    let shift: ShiftType = request.into();
    let mut tracker = state.write();

    tracker.catalog.add(shift.clone())?;
    persist_catalog(&mut tracker);

    info!(
        correlation_id = %correlation_id,
        type_key = %shift.type_key,
        "Added shift type"
    );
    Ok((StatusCode::CREATED, Json(shift)))
}

/// Handler for PATCH /catalog/{type}.
async fn update_shift_type_handler(
    State(state): State<AppState>,
    Path(type_key): Path<String>,
    payload: Result<Json<ShiftTypePatch>, JsonRejection>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let patch = require_json(payload)?;
    let mut tracker = state.write();
    tracker.catalog.update(&type_key, &patch)?;
    persist_catalog(&mut tracker);

    // The entry was just updated, so the lookup cannot miss.
    let updated = tracker.catalog.get(&type_key).cloned();
    Ok(Json(updated))
}

/// Handler for DELETE /catalog/{type}.
///
/// Worked days referencing the deleted type stay in the calendar and earn
/// zero until the type is recreated.
async fn remove_shift_type_handler(
    State(state): State<AppState>,
    Path(type_key): Path<String>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    let mut tracker = state.write();
    let removed = tracker.catalog.remove(&type_key)?;
    persist_catalog(&mut tracker);

    info!(type_key = %removed.type_key, "Removed shift type");
    Ok(Json(removed))
}

/// Handler for POST /catalog/reset.
async fn reset_catalog_handler(State(state): State<AppState>) -> impl IntoResponse {
    let mut tracker = state.write();
    let locale = tracker.locale;
    tracker.catalog.reset_to_defaults(locale);
    persist_catalog(&mut tracker);

    info!("Reset shift catalog to defaults");
    Json(tracker.catalog.entries().to_vec())
}

/// Handler for GET /settings.
async fn get_settings_handler(State(state): State<AppState>) -> Json<SettingsResponse> {
    let tracker = state.read();
    Json(SettingsResponse {
        base_rate: tracker.base_rate,
        currency: tracker.currency.clone(),
        locale: tracker.locale,
    })
}

/// Handler for PUT /settings.
///
/// A locale change also relabels the built-in catalog entries.
async fn update_settings_handler(
    State(state): State<AppState>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Json<SettingsResponse> {
    let mut tracker = state.write();

    if let Some(rate) = request.base_rate {
        tracker.base_rate = rate;
        if let Err(e) = tracker.repo.save_base_rate(rate) {
            warn!(error = %e, "Failed to persist base rate");
        }
    }
    if let Some(currency) = request.currency {
        tracker.currency = currency;
        let currency = tracker.currency.clone();
        if let Err(e) = tracker.repo.save_currency(&currency) {
            warn!(error = %e, "Failed to persist currency configuration");
        }
    }
    if let Some(code) = request.locale {
        let locale = Locale::from_code(&code);
        if locale != tracker.locale {
            tracker.locale = locale;
            tracker.catalog.apply_locale(locale);
            persist_catalog(&mut tracker);
            if let Err(e) = tracker.repo.save_locale(locale) {
                warn!(error = %e, "Failed to persist locale");
            }
        }
    }

    Json(SettingsResponse {
        base_rate: tracker.base_rate,
        currency: tracker.currency.clone(),
        locale: tracker.locale,
    })
}

/// Handler for GET /export/{year}.
async fn export_year_handler(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> impl IntoResponse {
    let tracker = state.read();
    let formatter = ReportFormatter::new(
        &tracker.store,
        &tracker.catalog,
        tracker.base_rate,
        tracker.locale,
        tracker.currency.clone(),
    );
    csv_response(
        formatter.year_csv(year),
        formatter.export_file_name(year, None),
    )
}

/// Handler for GET /export/{year}/{month}.
async fn export_month_handler(
    State(state): State<AppState>,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<impl IntoResponse, ApiErrorResponse> {
    if !(1..=12).contains(&month) {
        return Err(invalid_month(year, month));
    }

    let tracker = state.read();
    let formatter = ReportFormatter::new(
        &tracker.store,
        &tracker.catalog,
        tracker.base_rate,
        tracker.locale,
        tracker.currency.clone(),
    );
    Ok(csv_response(
        formatter.month_csv(year, month),
        formatter.export_file_name(year, Some(month)),
    ))
}

fn csv_response(csv: String, file_name: String) -> impl IntoResponse {
    (
        [
            (
                header::CONTENT_TYPE,
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        csv,
    )
}
