pub mod daily;
pub mod metno;
pub mod types;

use moka::future::Cache;
use std::time::Duration;

use metno::MetNoClient;
use types::{Coordinates, DayTempForecast};

pub type ForecastCache = Cache<Coordinates, Vec<DayTempForecast>>;

const CACHE_CAPACITY: u64 = 1024;
const CACHE_TTL: Duration = Duration::from_secs(60);

pub fn init_cache() -> ForecastCache {
    cache_with_ttl(CACHE_TTL)
}

/// Cache with a custom expiry window. The service uses [`init_cache`]; tests
/// shorten the window to exercise expiry without waiting out the full TTL.
pub fn cache_with_ttl(ttl: Duration) -> ForecastCache {
    Cache::builder()
        .max_capacity(CACHE_CAPACITY)
        .time_to_live(ttl)
        .build()
}

/// Forecast points at 14:00 Belgrade time for each day the provider covers.
///
/// Never fails: any upstream problem is logged and resolves to an empty list,
/// which is cached like any other result for the duration of the TTL.
/// Concurrent misses for the same coordinate share a single upstream request.
pub async fn get_forecasts(
    cache: &ForecastCache,
    client: &MetNoClient,
    coordinates: Coordinates,
) -> Vec<DayTempForecast> {
    cache
        .get_with(coordinates, async {
            match client.fetch_compact(coordinates).await {
                Ok(response) => daily::select_daily_points(&response),
                Err(e) => {
                    tracing::error!("Failed to get forecast from external server: {}", e);
                    Vec::new()
                }
            }
        })
        .await
}
