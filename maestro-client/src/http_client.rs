//! Generic HTTP request plumbing
//!
//! Sending, logging, retrying and status classification shared by every
//! endpoint of [`HttpClient`](crate::HttpClient). Endpoints build their own
//! `RequestBuilder` and decide how to parse the body.

use reqwest::RequestBuilder;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ClientError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

/// Error body shape returned by the Maestro API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    reason: Option<String>,
}

impl HttpUtils {
    /// Performs an HTTP request and returns status code and response text.
    ///
    /// Transport failures become [`ClientError::Transport`]; 429 becomes
    /// [`ClientError::RateLimited`]; 502/503/504 become `Transport` so they
    /// can be retried. Every other status is returned to the caller.
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ClientError> {
        log::debug!("[maestro] {method_name} {url}");

        let response = request_builder
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                detail: if e.is_timeout() {
                    format!("request timed out: {e}")
                } else {
                    e.to_string()
                },
            })?;

        let status_code = response.status().as_u16();
        log::debug!("[maestro] Response Status: {status_code}");

        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<u64>().ok());

        if status_code == 429 {
            log::warn!("[maestro] Rate limited (HTTP 429), retry_after={retry_after:?}");
            return Err(ClientError::RateLimited { retry_after });
        }

        if matches!(status_code, 502..=504) {
            let body = response.text().await.unwrap_or_default();
            log::warn!("[maestro] Server error (HTTP {status_code})");
            return Err(ClientError::Transport {
                detail: format!("HTTP {status_code}: {}", truncate_for_log(&body)),
            });
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| ClientError::Transport {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("[maestro] Response Body: {}", truncate_for_log(&response_text));

        Ok((status_code, response_text))
    }

    /// Maps a non-success status to an error.
    ///
    /// `kind` and `name` describe the addressed record for the 404 case.
    pub fn check_status(
        status_code: u16,
        body: &str,
        kind: &str,
        name: &str,
    ) -> Result<(), ClientError> {
        match status_code {
            200..=299 => Ok(()),
            404 => Err(ClientError::not_found(kind, name)),
            _ => {
                let message = serde_json::from_str::<ApiErrorBody>(body)
                    .ok()
                    .and_then(|b| b.reason)
                    .unwrap_or_else(|| truncate_for_log(body));
                log::error!("[maestro] HTTP {status_code}: {message}");
                Err(ClientError::Api {
                    status: status_code,
                    message,
                })
            }
        }
    }

    /// Parse a JSON response.
    pub fn parse_json<T>(response_text: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[maestro] JSON parse failed: {e}");
            log::error!("[maestro] Raw response: {}", truncate_for_log(response_text));
            ClientError::Parse {
                detail: e.to_string(),
            }
        })
    }

    /// Performs an HTTP request with retries.
    ///
    /// # Retry strategy
    /// - Only transport errors and rate limiting are retried
    /// - Exponential backoff: 100ms, 200ms, 400ms, 800ms, ... (maximum 10 seconds)
    /// - `Retry-After` is honored for 429 (capped at 30 seconds)
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<(u16, String), ClientError> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, method_name, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single-use
            let Some(req) = request_builder.try_clone() else {
                log::warn!("[maestro] Cannot clone request, disabling retry");
                return Self::execute_request(request_builder, method_name, url).await;
            };

            match Self::execute_request(req, method_name, url).await {
                Ok(resp) => return Ok(resp),
                Err(e) if attempt < max_retries && is_retryable(&e) => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "[maestro] Request failed (attempt {}/{}), retrying in {:.1}s: {}",
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| ClientError::Transport {
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

/// Transport failures and throttling are transient; everything else is final.
fn is_retryable(error: &ClientError) -> bool {
    matches!(
        error,
        ClientError::Transport { .. } | ClientError::RateLimited { .. }
    )
}

fn retry_delay(error: &ClientError, attempt: u32) -> Duration {
    if let ClientError::RateLimited {
        retry_after: Some(secs),
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

/// 100ms, 200ms, 400ms, ... capped at 10 seconds.
fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // ---- is_retryable ----

    #[test]
    fn retryable_transport() {
        assert!(is_retryable(&ClientError::Transport {
            detail: "refused".into()
        }));
    }

    #[test]
    fn retryable_rate_limited() {
        assert!(is_retryable(&ClientError::RateLimited { retry_after: None }));
    }

    #[test]
    fn not_retryable_business_errors() {
        assert!(!is_retryable(&ClientError::not_found("work", "x")));
        assert!(!is_retryable(&ClientError::Api {
            status: 400,
            message: "bad".into()
        }));
        assert!(!is_retryable(&ClientError::Parse {
            detail: "eof".into()
        }));
    }

    // ---- backoff ----

    #[test]
    fn backoff_doubles() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
        assert_eq!(backoff_delay(40), Duration::from_millis(10_000));
    }

    #[test]
    fn retry_after_is_capped() {
        let e = ClientError::RateLimited {
            retry_after: Some(120),
        };
        assert_eq!(retry_delay(&e, 0), Duration::from_secs(30));
    }

    // ---- check_status ----

    #[test]
    fn check_status_success() {
        assert!(HttpUtils::check_status(204, "", "work", "x").is_ok());
    }

    #[test]
    fn check_status_not_found() {
        let err = HttpUtils::check_status(404, "{}", "consumer", "agent9").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "consumer 'agent9' not found");
    }

    #[test]
    fn check_status_uses_reason() {
        let body = r#"{"kind":"Error","code":"maestro-9","reason":"name already exists"}"#;
        let err = HttpUtils::check_status(409, body, "consumer", "c").unwrap_err();
        assert!(
            matches!(
                &err,
                ClientError::Api { status: 409, message } if message == "name already exists"
            ),
            "unexpected error: {err:?}"
        );
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_invalid() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Foo {
            x: i32,
        }
        let result: Result<Foo, ClientError> = HttpUtils::parse_json("not json");
        assert!(
            matches!(&result, Err(ClientError::Parse { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
