// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Connection accept loop and the cross-cutting response plumbing:
//! request logging, permissive CORS, and the `X-Process-Time` header.

use std::{convert::Infallible, net::SocketAddr, sync::Arc, time::Instant};

use http::{header, HeaderMap, HeaderName, HeaderValue, Request, Response};
use http_body_util::Full;
use hyper::{
    body::{Bytes, Incoming},
    service::service_fn,
};
use hyper_util::{
    rt::{TokioExecutor, TokioIo},
    server::conn::auto::Builder,
};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::{self, AppState};

pub async fn run(
    listener: TcpListener,
    state: Arc<AppState>,
    shutdown_rx: tokio::sync::watch::Receiver<()>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut accept_shutdown = shutdown_rx.clone();

    loop {
        let (tcp_stream, remote_addr) = tokio::select! {
            accepted = listener.accept() => accepted?,
            _ = accept_shutdown.changed() => {
                info!("shutting down");
                return Ok(());
            },
        };

        let state = state.clone();
        let mut shutdown_signal = shutdown_rx.clone();

        tokio::spawn(async move {
            let service = service_fn(move |req: Request<Incoming>| {
                let state = state.clone();
                async move { Ok::<_, Infallible>(dispatch(&req, &state, remote_addr)) }
            });

            let http_server = Builder::new(TokioExecutor::new());
            let conn = http_server.serve_connection(TokioIo::new(tcp_stream), service);
            tokio::pin!(conn);

            loop {
                tokio::select! {
                    result = conn.as_mut() => {
                        if let Err(err) = result {
                            warn!("connection error from {}: {}", remote_addr, err);
                        }
                        break;
                    },
                    _ = shutdown_signal.changed() => conn.as_mut().graceful_shutdown(),
                }
            }
        });
    }
}

/// Run one request through the router, then apply the cross-cutting
/// headers and log the outcome.
pub(crate) fn dispatch<B>(
    req: &Request<B>,
    state: &Arc<AppState>,
    remote_addr: SocketAddr,
) -> Response<Full<Bytes>> {
    let started = Instant::now();

    info!("{} {} - client: {}", req.method(), req.uri().path(), remote_addr);

    let mut response = api::handle(req, state);

    let elapsed = started.elapsed().as_secs_f64();
    apply_cors(response.headers_mut());
    if let Ok(value) = HeaderValue::from_str(&format!("{:.3}", elapsed)) {
        response
            .headers_mut()
            .insert(HeaderName::from_static("x-process-time"), value);
    }

    info!(
        "{} {} - status: {} - time: {:.3}s",
        req.method(),
        req.uri().path(),
        response.status().as_u16(),
        elapsed
    );

    response
}

fn apply_cors(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        HeaderValue::from_static("true"),
    );
}

#[cfg(test)]
mod tests {
    use std::net::{Ipv4Addr, SocketAddr};
    use std::sync::Arc;

    use http::{Method, Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tawqit_time::TimeService;
    use tawqit_weather::WeatherService;

    use super::dispatch;
    use crate::api::AppState;

    fn test_state() -> Arc<AppState> {
        Arc::new(AppState {
            time: TimeService::new(),
            weather: WeatherService::new(),
        })
    }

    fn client_addr() -> SocketAddr {
        SocketAddr::from((Ipv4Addr::LOCALHOST, 40000))
    }

    async fn get(uri: &str) -> (StatusCode, http::HeaderMap, Value) {
        let req = Request::builder().method(Method::GET).uri(uri).body(()).unwrap();
        let response = dispatch(&req, &test_state(), client_addr());

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, headers, body)
    }

    #[tokio::test]
    async fn test_time_comparison_success() {
        let (status, headers, body) = get("/time/comparison?city1=Cairo&city2=London").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["city1"], "Cairo");
        assert_eq!(body["city2"], "London");
        assert_eq!(body["city1_timezone"], "Africa/Cairo");
        assert_eq!(body["city2_timezone"], "Europe/London");
        assert!(body["time_difference_hours"].is_number());
        assert!(headers.contains_key("x-process-time"));
    }

    #[tokio::test]
    async fn test_time_comparison_arabic_names() {
        let query: String = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("city1", "القاهرة")
            .append_pair("city2", "الرياض")
            .finish();
        let (status, _, body) = get(&format!("/time/comparison?{}", query)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["city1"], "القاهرة");
        assert_eq!(body["city1_timezone"], "Africa/Cairo");
        assert_eq!(body["city2_timezone"], "Asia/Riyadh");
    }

    #[tokio::test]
    async fn test_current_time_success() {
        let (status, _, body) = get("/time/current?city=London").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["city"], "London");
        assert_eq!(body["timezone"], "Europe/London");
        assert!(body["current_time"].is_string());
    }

    #[tokio::test]
    async fn test_current_time_unknown_city() {
        let (status, _, body) = get("/time/current?city=Atlantis").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "city_not_found");
    }

    #[tokio::test]
    async fn test_time_comparison_missing_parameter() {
        let (status, _, body) = get("/time/comparison?city1=Cairo").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing_parameter");
        assert_eq!(body["parameter"], "city2");
    }

    #[tokio::test]
    async fn test_time_comparison_blank_parameter() {
        let (status, _, body) = get("/time/comparison?city1=%20%20&city2=London").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "missing_parameter");
        assert_eq!(body["parameter"], "city1");
    }

    #[tokio::test]
    async fn test_time_comparison_unknown_city() {
        let (status, _, body) = get("/time/comparison?city1=Cairo&city2=Atlantis").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "city_not_found");
        assert!(body["message"].as_str().unwrap().contains("Atlantis"));
        assert!(body["examples"].is_array());
    }

    #[tokio::test]
    async fn test_weather_success() {
        let (status, _, body) = get("/weather?city=Cairo").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["city"], "Cairo");
        assert_eq!(body["temperature"], 28.5);
        assert_eq!(body["description"], "سماء صافية");
        assert_eq!(body["humidity"], 60);
        assert_eq!(body["feels_like"], 31.2);
    }

    #[tokio::test]
    async fn test_weather_trailing_slash_alias() {
        let (status, _, body) = get("/weather/?city=London").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["city"], "London");
    }

    #[tokio::test]
    async fn test_weather_unknown_city() {
        let (status, _, body) = get("/weather?city=Atlantis").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "city_not_found");
        assert_eq!(body["supported_cities_endpoint"], "/weather/cities");
    }

    #[tokio::test]
    async fn test_supported_cities() {
        let (status, _, body) = get("/weather/cities").await;

        assert_eq!(status, StatusCode::OK);
        let cities = body["supported_cities"].as_array().unwrap();
        assert_eq!(cities.len(), 3);
        assert!(cities
            .iter()
            .any(|city| city["english"] == "Cairo" && city["arabic"] == "القاهرة"));
    }

    #[tokio::test]
    async fn test_root_and_health() {
        let (status, _, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "running");
        assert_eq!(body["version"], crate::VERSION);

        let (status, _, body) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["services"]["time_service"], "operational");
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let (status, _, body) = get("/nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn test_cors_headers_on_every_response() {
        let (_, headers, _) = get("/health").await;

        assert_eq!(headers["access-control-allow-origin"], "*");
        assert_eq!(headers["access-control-allow-methods"], "*");
        assert_eq!(headers["access-control-allow-headers"], "*");
        assert_eq!(headers["access-control-allow-credentials"], "true");
    }

    #[tokio::test]
    async fn test_preflight() {
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri("/weather?city=Cairo")
            .body(())
            .unwrap();
        let response = dispatch(&req, &test_state(), client_addr());

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()["access-control-allow-origin"], "*");
    }
}
