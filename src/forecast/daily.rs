use chrono::Timelike;
use chrono_tz::Europe::Belgrade;

use super::types::{DayTempForecast, ForecastResponse};

/// Local wall-clock hour that marks the daily report slice.
const DAILY_SLICE_HOUR: u32 = 14;

/// One forecast point per timeseries entry, in provider order.
pub fn to_forecast_points(
    response: &ForecastResponse,
) -> impl Iterator<Item = DayTempForecast> + '_ {
    response
        .properties
        .timeseries
        .iter()
        .map(|entry| DayTempForecast {
            timestamp: entry.time,
            temp: entry.data.instant.details.air_temperature,
        })
}

/// True iff the point falls at 14:00 wall-clock time in Belgrade. The zone's
/// DST rules apply, so the qualifying UTC hour shifts across the year.
pub fn is_daily_slice(forecast: &DayTempForecast) -> bool {
    forecast.timestamp.with_timezone(&Belgrade).hour() == DAILY_SLICE_HOUR
}

pub fn select_daily_points(response: &ForecastResponse) -> Vec<DayTempForecast> {
    to_forecast_points(response).filter(is_daily_slice).collect()
}
