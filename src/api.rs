// Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
// SPDX-License-Identifier: Apache-2.0

//! Route dispatch and JSON encoding for the HTTP endpoints.
//!
//! All status-code decisions live here: the core crates only produce typed
//! errors, and this layer maps them ("not found" → 404, backend faults →
//! 503, bad parameters → 400).

use std::sync::Arc;

use http::{header, HeaderValue, Method, Request, Response, StatusCode};
use http_body_util::Full;
use hyper::body::Bytes;
use serde::Serialize;
use serde_json::json;
use tawqit_time::{TimeError, TimeService};
use tawqit_weather::{MockWeatherProvider, WeatherError, WeatherService, SUPPORTED_CITIES};
use tracing::{error, info, warn};

use crate::VERSION;

/// Shared, read-only service state. Both services are stateless per call,
/// so one instance serves every connection task without locking.
pub struct AppState {
    pub time: TimeService,
    pub weather: WeatherService<MockWeatherProvider>,
}

/// Dispatch a request to its handler. Body content is never read; only
/// method, path and query string matter.
pub(crate) fn handle<B>(req: &Request<B>, state: &Arc<AppState>) -> Response<Full<Bytes>> {
    let query = req.uri().query();

    match (req.method(), req.uri().path()) {
        (&Method::OPTIONS, _) => preflight(),
        (&Method::GET, "/") => root(),
        (&Method::GET, "/health") => health(),
        (&Method::GET, "/time/current") => current_time(state, query),
        (&Method::GET, "/time/comparison") => compare_times(state, query),
        (&Method::GET, "/weather") | (&Method::GET, "/weather/") => get_weather(state, query),
        (&Method::GET, "/weather/cities") => supported_cities(),
        _ => unknown_route(req.uri().path()),
    }
}

fn current_time(state: &Arc<AppState>, query: Option<&str>) -> Response<Full<Bytes>> {
    let city = match required_param(query, "city", "يجب تحديد اسم المدينة") {
        Ok(value) => value,
        Err(response) => return response,
    };

    info!("current time lookup for {}", city);

    match state.time.current_time(city.trim()) {
        Ok(snapshot) => json_response(StatusCode::OK, &snapshot),
        Err(err) => time_error_response(state, err),
    }
}

fn compare_times(state: &Arc<AppState>, query: Option<&str>) -> Response<Full<Bytes>> {
    let city1 = match required_param(query, "city1", "اسم المدينة الأولى مطلوب") {
        Ok(value) => value,
        Err(response) => return response,
    };
    let city2 = match required_param(query, "city2", "اسم المدينة الثانية مطلوب") {
        Ok(value) => value,
        Err(response) => return response,
    };

    info!("comparing times between {} and {}", city1, city2);

    match state.time.compare(city1.trim(), city2.trim()) {
        Ok(comparison) => json_response(StatusCode::OK, &comparison),
        Err(err) => time_error_response(state, err),
    }
}

fn get_weather(state: &Arc<AppState>, query: Option<&str>) -> Response<Full<Bytes>> {
    let city = match required_param(query, "city", "يجب تحديد اسم المدينة") {
        Ok(value) => value,
        Err(response) => return response,
    };

    info!("weather lookup for {}", city);

    match state.weather.get_weather(city.trim()) {
        Ok(report) => json_response(StatusCode::OK, &report),
        Err(WeatherError::CityNotFound { city_name }) => {
            warn!("city not found: {}", city_name);
            json_response(
                StatusCode::NOT_FOUND,
                &json!({
                    "error": "city_not_found",
                    "message": format!("المدينة '{}' غير موجودة في قاعدة البيانات", city_name),
                    "supported_cities_endpoint": "/weather/cities",
                }),
            )
        },
        Err(WeatherError::Provider { message }) => {
            error!("weather provider error: {}", message);
            json_response(
                StatusCode::SERVICE_UNAVAILABLE,
                &json!({
                    "error": "weather_service_unavailable",
                    "message": format!("خطأ في خدمة الطقس: {}", message),
                    "retry_after": "يرجى المحاولة مرة أخرى لاحقاً",
                }),
            )
        },
    }
}

fn time_error_response(state: &Arc<AppState>, err: TimeError) -> Response<Full<Bytes>> {
    match err {
        TimeError::CityNotFound { city_name } => {
            warn!("city not found: {}", city_name);

            let mut examples: Vec<&str> = state.time.supported_cities().collect();
            examples.sort_unstable();

            json_response(
                StatusCode::NOT_FOUND,
                &json!({
                    "error": "city_not_found",
                    "message": format!(
                        "لم يتم العثور على المدينة '{}'. جرب اسم مدينة مختلف أو تأكد من الإملاء.",
                        city_name
                    ),
                    "examples": examples,
                }),
            )
        },
        TimeError::TimezoneUnavailable { city_name } => {
            error!("timezone unavailable for city: {}", city_name);
            json_response(
                StatusCode::SERVICE_UNAVAILABLE,
                &json!({
                    "error": "timezone_unavailable",
                    "message": format!("لا يمكن تحديد المنطقة الزمنية للمدينة '{}'", city_name),
                }),
            )
        },
    }
}

fn root() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &json!({
            "message": "مرحباً بك في API الوقت والطقس",
            "version": VERSION,
            "status": "running",
            "endpoints": {
                "current_time": "/time/current?city=Cairo",
                "time_comparison": "/time/comparison?city1=Cairo&city2=London",
                "weather": "/weather?city=Cairo",
                "supported_cities": "/weather/cities",
            },
            "features": [
                "مقارنة الأوقات بين المدن",
                "معلومات الطقس الحالية",
                "دعم المدن العربية والعالمية",
            ],
        }),
    )
}

fn health() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &json!({
            "status": "healthy",
            "timestamp": chrono::Utc::now().timestamp(),
            "version": VERSION,
            "services": {
                "time_service": "operational",
                "weather_service": "operational",
            },
        }),
    )
}

fn supported_cities() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        &json!({
            "supported_cities": SUPPORTED_CITIES,
            "message": "يمكنك استخدام الأسماء العربية أو الإنجليزية للمدن",
        }),
    )
}

fn preflight() -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::default());
    *response.status_mut() = StatusCode::NO_CONTENT;
    response
}

fn unknown_route(path: &str) -> Response<Full<Bytes>> {
    json_response(
        StatusCode::NOT_FOUND,
        &json!({
            "error": "not_found",
            "message": format!("No route for {}", path),
        }),
    )
}

fn required_param(
    query: Option<&str>,
    name: &str,
    message: &str,
) -> Result<String, Response<Full<Bytes>>> {
    let value = query.and_then(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    });

    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(json_response(
            StatusCode::BAD_REQUEST,
            &json!({
                "error": "missing_parameter",
                "parameter": name,
                "message": message,
            }),
        )),
    }
}

fn json_response<T: Serialize + ?Sized>(status: StatusCode, body: &T) -> Response<Full<Bytes>> {
    let bytes = match serde_json::to_vec(body) {
        Ok(bytes) => bytes,
        Err(err) => {
            error!("failed to encode response body: {}", err);
            let mut response = Response::new(Full::from(
                r#"{"error":"internal_server_error","message":"حدث خطأ داخلي في الخادم"}"#,
            ));
            *response.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
            response.headers_mut().insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
            return response;
        },
    };

    let mut response = Response::new(Full::from(bytes));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    response
}
