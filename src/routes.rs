use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::forecast::{
    get_forecasts,
    metno::MetNoClient,
    types::{Coordinates, DayTempForecast, BELGRADE},
    ForecastCache,
};

// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub met_client: Arc<MetNoClient>,
    pub cache: ForecastCache,
}

#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: String,
}

/// Wire form of a forecast point: calendar date plus the temperature rounded
/// to one decimal. Rounding happens here only, never in the domain value.
#[derive(Debug, Serialize)]
pub struct DailyTempBody {
    pub day: String,
    pub temp: String,
}

impl From<&DayTempForecast> for DailyTempBody {
    fn from(forecast: &DayTempForecast) -> Self {
        Self {
            day: forecast.timestamp.date_naive().to_string(),
            temp: format!("{:.1}", forecast.temp),
        }
    }
}

fn render_daily_forecast(forecasts: &[DayTempForecast]) -> Response {
    let body: Vec<DailyTempBody> = forecasts.iter().map(DailyTempBody::from).collect();
    match serde_json::to_vec_pretty(&body) {
        Ok(bytes) => ([(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize forecast response: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

// Route handlers
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

pub async fn get_forecast(
    State(state): State<AppState>,
    Query(params): Query<ForecastQuery>,
) -> Result<Response, StatusCode> {
    // Range checks also reject NaN, which fails every comparison.
    if !(-90.0..=90.0).contains(&params.lat) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    if !(-180.0..=180.0).contains(&params.lon) {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }

    let coordinates = Coordinates {
        lat: params.lat,
        lon: params.lon,
    };
    let forecasts = get_forecasts(&state.cache, &state.met_client, coordinates).await;

    Ok(render_daily_forecast(&forecasts))
}

pub async fn get_forecast_belgrade(State(state): State<AppState>) -> Response {
    let forecasts = get_forecasts(&state.cache, &state.met_client, BELGRADE).await;
    render_daily_forecast(&forecasts)
}

// Create the router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/get_forecast", get(get_forecast))
        .route("/get_forecast_belgrade", get(get_forecast_belgrade))
        .with_state(state)
}
