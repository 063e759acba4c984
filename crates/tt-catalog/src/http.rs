//! Shared HTTP response checks for catalog requests.

use crate::error::CatalogError;

/// Seconds to wait when a 429 carries no usable `Retry-After`.
const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Map 429 to [`CatalogError::RateLimited`] and any other non-success status
/// to [`CatalogError::Api`]. Successful responses pass through unchanged.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CatalogError> {
    if resp.status() == 429 {
        return Err(CatalogError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(CatalogError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
