//! Generic HTTP fetching with caching, retry logic, and error classification

use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use super::retry::RetryPolicy;
use crate::data_fetcher::cache::ResponseCache;
use crate::error::AppError;

/// Fetches `url` and parses the JSON body into `T`.
///
/// This function:
/// - Answers from the response cache when a fresh entry exists
/// - Retries 429, 5xx and network failures with exponential backoff,
///   honouring a longer `Retry-After` on 429/5xx
/// - Fails fast on 401/403 (bad key) and 404 (no such resource)
/// - Writes successfully parsed bodies through to the cache
///
/// The API key travels in a default header of `client` and is never part of
/// `url`, so the URL is safe to log and to embed in errors.
#[instrument(skip(client, cache, policy))]
pub(super) async fn fetch<T: DeserializeOwned>(
    client: &Client,
    cache: &ResponseCache,
    policy: &RetryPolicy,
    url: &str,
) -> Result<T, AppError> {
    if let Some(cached_response) = cache.get(url).await {
        debug!("Using cached HTTP response for URL: {url}");
        match serde_json::from_str::<T>(&cached_response) {
            Ok(parsed) => return Ok(parsed),
            Err(e) => {
                warn!("Failed to parse cached response for URL {}: {}", url, e);
            }
        }
    }

    info!("Fetching data from URL: {url}");
    let response_text = fetch_with_retry(client, policy, url).await?;

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<T>(&response_text) {
        Ok(parsed) => {
            cache.put(url.to_string(), response_text).await;
            Ok(parsed)
        }
        Err(e) => {
            error!("Failed to parse API response: {} (URL: {})", e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );
            Err(AppError::api_unexpected_structure(e.to_string(), url))
        }
    }
}

/// Failure of a single attempt, with the wait the server asked for, if any.
struct AttemptFailure {
    error: AppError,
    retry_after: Option<Duration>,
}

impl From<AppError> for AttemptFailure {
    fn from(error: AppError) -> Self {
        Self {
            error,
            retry_after: None,
        }
    }
}

/// Runs [`send_once`] until it succeeds, fails permanently, or the attempt
/// budget is spent. Backoff waits yield to the runtime. A `Retry-After`
/// header lengthens the computed wait but never shortens it.
async fn fetch_with_retry(
    client: &Client,
    policy: &RetryPolicy,
    url: &str,
) -> Result<String, AppError> {
    let mut attempt = 1u32;
    loop {
        match send_once(client, url, attempt).await {
            Ok(body) => return Ok(body),
            Err(AttemptFailure { error, retry_after })
                if error.is_retryable() && policy.should_retry(attempt) =>
            {
                let wait = policy
                    .delay_for(attempt)
                    .max(retry_after.unwrap_or_default());
                warn!(
                    "Transient failure from {}: {}. Retrying in {:?} (attempt {}/{})",
                    url, error, wait, attempt, policy.max_attempts
                );
                tokio::time::sleep(wait).await;
                attempt += 1;
            }
            Err(AttemptFailure { error, .. }) => {
                error!(
                    "Request failed for URL {} after {} attempt(s): {}",
                    url, attempt, error
                );
                return Err(error);
            }
        }
    }
}

/// One GET with the response status classified into an [`AppError`].
async fn send_once(client: &Client, url: &str, attempt: u32) -> Result<String, AttemptFailure> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_transport_error(url, e))?;

    let status = response.status();
    debug!("Response status: {status} (attempt {attempt})");

    if status.is_success() {
        // The connection can still drop while the body streams in
        return response
            .text()
            .await
            .map_err(|e| classify_transport_error(url, e).into());
    }

    Err(AttemptFailure {
        error: classify_status(status, url, attempt),
        retry_after: parse_retry_after(response.headers()),
    })
}

fn classify_transport_error(url: &str, e: reqwest::Error) -> AppError {
    if e.is_timeout() {
        AppError::network_timeout(url)
    } else if e.is_builder() {
        AppError::ApiFetch(e)
    } else {
        AppError::network_connection(url, e.to_string())
    }
}

/// `Retry-After` in delay-seconds form. HTTP dates are ignored.
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
    headers
        .get(RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

fn classify_status(status: StatusCode, url: &str, attempt: u32) -> AppError {
    let status_code = status.as_u16();
    match status_code {
        401 | 403 => AppError::api_forbidden(status_code, url),
        404 => AppError::api_not_found(url),
        429 => AppError::api_rate_limit(attempt, url),
        500..=599 => AppError::api_server_error(status_code, attempt, url),
        _ => AppError::api_unexpected_status(status_code, url),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::time::{Duration, Instant};
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path},
    };

    fn test_client() -> Client {
        super::super::http_client::create_http_client("RGAPI-test-key", 5).unwrap()
    }

    fn fast_policy() -> RetryPolicy {
        RetryPolicy::new(3, Duration::from_millis(20))
    }

    fn test_cache() -> ResponseCache {
        ResponseCache::new(Duration::from_secs(120), 100)
    }

    #[test]
    fn test_classify_status() {
        let url = "https://euw1.api.riotgames.com";
        assert_eq!(classify_status(StatusCode::UNAUTHORIZED, url, 1).kind(), ErrorKind::Forbidden);
        assert_eq!(classify_status(StatusCode::FORBIDDEN, url, 1).kind(), ErrorKind::Forbidden);
        assert_eq!(classify_status(StatusCode::NOT_FOUND, url, 1).kind(), ErrorKind::NotFound);
        assert_eq!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, url, 3).kind(),
            ErrorKind::RateLimited
        );
        assert_eq!(
            classify_status(StatusCode::SERVICE_UNAVAILABLE, url, 1).kind(),
            ErrorKind::Transport
        );
        assert_eq!(classify_status(StatusCode::BAD_REQUEST, url, 1).kind(), ErrorKind::Transport);
        assert!(!classify_status(StatusCode::BAD_REQUEST, url, 1).is_retryable());
    }

    #[tokio::test]
    async fn test_success_sends_key_and_caches() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/lol/data"))
            .and(header("X-Riot-Token", "RGAPI-test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"v": 7})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let cache = test_cache();
        let url = format!("{}/lol/data", mock_server.uri());

        let first: serde_json::Value = fetch(&test_client(), &cache, &fast_policy(), &url)
            .await
            .unwrap();
        let second: serde_json::Value = fetch(&test_client(), &cache, &fast_policy(), &url)
            .await
            .unwrap();

        assert_eq!(first["v"], 7);
        assert_eq!(second, first);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_rate_limit_exhausts_budget_with_growing_waits() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .expect(3)
            .mount(&mock_server)
            .await;

        let policy = fast_policy();
        let url = format!("{}/lol/limited", mock_server.uri());
        let started = Instant::now();

        let result: Result<serde_json::Value, _> =
            fetch(&test_client(), &test_cache(), &policy, &url).await;

        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::RateLimited);
        assert!(matches!(error, AppError::ApiRateLimit { attempts: 3, .. }));
        // 40ms + 80ms of backoff
        let total_wait: Duration = policy.schedule().iter().sum();
        assert!(started.elapsed() >= total_wait);
    }

    #[tokio::test]
    async fn test_forbidden_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/lol/secret", mock_server.uri());
        let result: Result<serde_json::Value, _> =
            fetch(&test_client(), &test_cache(), &fast_policy(), &url).await;

        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Forbidden);
        assert!(!error.to_string().contains("RGAPI-test-key"));
    }

    #[tokio::test]
    async fn test_not_found_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/lol/missing", mock_server.uri());
        let result: Result<serde_json::Value, _> =
            fetch(&test_client(), &test_cache(), &fast_policy(), &url).await;

        assert_eq!(result.unwrap_err().kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn test_server_error_recovers_on_retry() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(1)
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/lol/flaky", mock_server.uri());
        let result: Vec<u32> = fetch(&test_client(), &test_cache(), &fast_policy(), &url)
            .await
            .unwrap();

        assert_eq!(result, vec![1, 2]);
    }

    #[tokio::test]
    async fn test_unexpected_structure_not_cached() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"unexpected\":true}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let cache = test_cache();
        let url = format!("{}/lol/odd", mock_server.uri());
        let result: Result<Vec<String>, _> =
            fetch(&test_client(), &cache, &fast_policy(), &url).await;

        assert!(matches!(
            result.unwrap_err(),
            AppError::ApiUnexpectedStructure { .. }
        ));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_bad_request_not_retried() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(400))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/lol/malformed", mock_server.uri());
        let result: Result<serde_json::Value, _> =
            fetch(&test_client(), &test_cache(), &fast_policy(), &url).await;

        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Transport);
        assert!(matches!(error, AppError::ApiUnexpectedStatus { status: 400, .. }));
    }

    #[tokio::test]
    async fn test_truncated_body_is_retried() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicUsize, Ordering};
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // Promises 500 bytes, sends a few, then hangs up
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let connections = Arc::new(AtomicUsize::new(0));
        let counter = connections.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                counter.fetch_add(1, Ordering::SeqCst);
                let mut buf = [0u8; 2048];
                let _ = socket.read(&mut buf).await;
                let _ = socket
                    .write_all(
                        b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 500\r\n\r\n{\"v\": 1,",
                    )
                    .await;
                let _ = socket.shutdown().await;
            }
        });

        let url = format!("http://{addr}/lol/cut");
        let result: Result<serde_json::Value, _> =
            fetch(&test_client(), &test_cache(), &fast_policy(), &url).await;

        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Transport);
        assert!(error.is_retryable());
        assert_eq!(connections.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_retry_after_lengthens_backoff() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "1"))
            .up_to_n_times(1)
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"v": 1})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/lol/throttled", mock_server.uri());
        let started = Instant::now();
        let result: serde_json::Value = fetch(&test_client(), &test_cache(), &fast_policy(), &url)
            .await
            .unwrap();

        assert_eq!(result["v"], 1);
        // Computed backoff is 40ms, the header asks for a full second
        assert!(started.elapsed() >= Duration::from_secs(1));
    }

    #[test]
    fn test_parse_retry_after() {
        use reqwest::header::HeaderValue;

        let mut headers = HeaderMap::new();
        assert_eq!(parse_retry_after(&headers), None);

        headers.insert(RETRY_AFTER, HeaderValue::from_static("7"));
        assert_eq!(parse_retry_after(&headers), Some(Duration::from_secs(7)));

        headers.insert(
            RETRY_AFTER,
            HeaderValue::from_static("Wed, 21 Oct 2015 07:28:00 GMT"),
        );
        assert_eq!(parse_retry_after(&headers), None);
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_after_retries() {
        // Port 1 is reserved and has no listener
        let url = "http://127.0.0.1:1/lol/gone";
        let result: Result<serde_json::Value, _> =
            fetch(&test_client(), &test_cache(), &fast_policy(), url).await;

        let error = result.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Transport);
        assert!(error.is_retryable());
    }
}
