use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use crate::AppState;
use crate::error::AppError;

/// Token count and the instant it was last brought up to date.
#[derive(Debug, Clone, Copy)]
struct Bucket {
    tokens: f32,
    refreshed: Instant,
}

/// Global token bucket.
///
/// Not keyed by client: every request draws from the same bucket, refilled
/// at `rate_per_sec` up to `burst_size`.
#[derive(Debug)]
pub struct RateLimiter {
    bucket: Mutex<Bucket>,
    rate_per_sec: f32,
    burst_size: f32,
}

impl RateLimiter {
    pub fn new(rate_per_sec: f32, burst_size: f32) -> Self {
        Self {
            bucket: Mutex::new(Bucket {
                tokens: burst_size,
                refreshed: Instant::now(),
            }),
            rate_per_sec,
            burst_size,
        }
    }

    /// Take one token now, or report how long until one is available.
    pub fn acquire(&self) -> Result<(), Duration> {
        self.acquire_at(Instant::now())
    }

    /// Take one token as of `now`.
    ///
    /// `now` earlier than the last refresh adds nothing. A bucket that never
    /// refills reports `Duration::MAX`.
    pub fn acquire_at(&self, now: Instant) -> Result<(), Duration> {
        let mut bucket = self.bucket.lock().unwrap_or_else(PoisonError::into_inner);
        let elapsed = now.saturating_duration_since(bucket.refreshed).as_secs_f32();
        let tokens = (bucket.tokens + elapsed * self.rate_per_sec).min(self.burst_size);
        bucket.refreshed = bucket.refreshed.max(now);

        if tokens >= 1.0 {
            bucket.tokens = tokens - 1.0;
            return Ok(());
        }

        bucket.tokens = tokens;
        let wait = (1.0 - tokens) / self.rate_per_sec;
        Err(Duration::try_from_secs_f32(wait).unwrap_or(Duration::MAX))
    }
}

/// Middleware to enforce the global request budget.
pub async fn rate_limit_middleware(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !state.config.resilience.rate_limit_enabled {
        return Ok(next.run(req).await);
    }

    match state.rate_limiter.acquire() {
        Ok(()) => Ok(next.run(req).await),
        Err(wait) => {
            // Whole seconds for Retry-After, never zero.
            let retry_after = wait
                .as_secs()
                .saturating_add(u64::from(wait.subsec_nanos() > 0))
                .max(1);
            tracing::warn!(path = %req.uri().path(), retry_after, "Rate limit exceeded");
            Err(AppError::RateLimited { retry_after })
        }
    }
}
