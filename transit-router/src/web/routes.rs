//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{debug, warn};

use crate::catalogue::BusStats;
use crate::requests::{StatHandler, StatRequest, StatResponse};
use crate::router::RouteError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/buses/:name", get(bus_stats))
        .route("/api/stops/:name", get(stop_buses))
        .route("/api/route", get(find_route))
        .route("/api/stat", post(answer_stats))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Statistics for one bus.
async fn bus_stats(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BusStats>, AppError> {
    state
        .catalogue
        .bus_stats(&name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown bus: {name}"),
        })
}

/// Buses serving one stop.
async fn stop_buses(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StopResponse>, AppError> {
    let buses = state
        .catalogue
        .buses_at_stop(&name)
        .ok_or_else(|| AppError::NotFound {
            message: format!("unknown stop: {name}"),
        })?
        .into_iter()
        .map(str::to_string)
        .collect();

    Ok(Json(StopResponse { name, buses }))
}

/// Fastest route between two stops.
async fn find_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteResponse>, AppError> {
    let itinerary = state.router.try_find_route(&query.from, &query.to)?;
    debug!(
        from = %query.from,
        to = %query.to,
        total_time = itinerary.total_time,
        "route found"
    );
    Ok(Json(RouteResponse::from_itinerary(&itinerary)))
}

/// Answer a batch of stat requests, in the same shape as the JSON document.
async fn answer_stats(
    State(state): State<AppState>,
    Json(requests): Json<Vec<StatRequest>>,
) -> Json<Vec<StatResponse>> {
    let handler = StatHandler::new(&state.catalogue, &state.router);
    Json(handler.answer_all(&requests))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    NotFound { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::TransportCatalogue;
    use crate::domain::Coordinates;
    use crate::requests::RouteItemResult;
    use crate::router::{RoutingSettings, TransportRouter};

    fn state() -> AppState {
        let mut cat = TransportCatalogue::new();
        cat.add_stop("A", Coordinates::new(55.60, 37.60));
        cat.add_stop("B", Coordinates::new(55.61, 37.60));
        cat.add_stop("C", Coordinates::new(55.62, 37.60));
        cat.set_distance("A", "B", 1500).unwrap();
        cat.add_bus("7", &["A", "B"], false).unwrap();
        let router = TransportRouter::new(&cat, &RoutingSettings::new(3, 45.0)).unwrap();
        AppState::new(cat, router)
    }

    #[tokio::test]
    async fn health_check() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn bus_found() {
        let Json(stats) = bus_stats(State(state()), Path("7".to_string()))
            .await
            .unwrap();
        assert_eq!(stats.stop_count, 3);
        assert_eq!(stats.unique_stop_count, 2);
        assert_eq!(stats.route_length, 3000);
    }

    #[tokio::test]
    async fn bus_missing() {
        let err = bus_stats(State(state()), Path("8".to_string()))
            .await
            .unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn stop_lists_buses() {
        let Json(stop) = stop_buses(State(state()), Path("B".to_string()))
            .await
            .unwrap();
        assert_eq!(stop.name, "B");
        assert_eq!(stop.buses, vec!["7".to_string()]);

        let Json(stop) = stop_buses(State(state()), Path("C".to_string()))
            .await
            .unwrap();
        assert!(stop.buses.is_empty());
    }

    #[tokio::test]
    async fn route_found() {
        let query = RouteQuery {
            from: "B".into(),
            to: "A".into(),
        };
        let Json(route) = find_route(State(state()), Query(query)).await.unwrap();

        // 3 minutes waiting, 1.5 km at 45 km/h.
        assert!((route.total_time - 5.0).abs() < 1e-9);
        assert_eq!(route.items.len(), 2);
        assert!(matches!(
            &route.items[1],
            RouteItemResult::Bus { bus, span_count: 1, .. } if bus == "7"
        ));
    }

    #[tokio::test]
    async fn route_unreachable_is_not_found() {
        let query = RouteQuery {
            from: "A".into(),
            to: "C".into(),
        };
        let err = find_route(State(state()), Query(query)).await.unwrap_err();
        match err {
            AppError::NotFound { message } => assert_eq!(message, "no route from A to C"),
        }
    }

    #[tokio::test]
    async fn route_unknown_stop_is_not_found() {
        let query = RouteQuery {
            from: "A".into(),
            to: "Z".into(),
        };
        let err = find_route(State(state()), Query(query)).await.unwrap_err();
        match err {
            AppError::NotFound { message } => assert_eq!(message, "unknown stop: Z"),
        }
    }

    #[tokio::test]
    async fn stat_batch() {
        let requests = vec![
            StatRequest::Bus {
                id: 1,
                name: "7".into(),
            },
            StatRequest::Stop {
                id: 2,
                name: "Z".into(),
            },
        ];
        let Json(responses) = answer_stats(State(state()), Json(requests)).await;
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].request_id(), 1);
        assert!(matches!(responses[0], StatResponse::Bus { .. }));
        assert_eq!(responses[1], StatResponse::not_found(2));
    }

    #[test]
    fn router_builds() {
        let _ = create_router(state());
    }
}
