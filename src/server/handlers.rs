use crate::core::MessageResponse;
use crate::domain::names::{MONTHS, WEEKDAYS};
use crate::server::AppState;
use crate::utils::error::{ApiError, Result};
use axum::extract::{Host, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{json, Value};

/// Decoded query string pairs, in request order.
type QueryPairs = Vec<(String, String)>;

/// Welcome payload with usage notes and one example link per endpoint.
pub async fn root(
    State(state): State<AppState>,
    host: Option<Host>,
    headers: HeaderMap,
) -> Json<Value> {
    let host = host.as_ref().map(|Host(host)| host.as_str());
    let base_url = base_url(state.public_url.as_deref(), host, &headers);
    let month = MONTHS.first();
    let day = WEEKDAYS.first();

    Json(json!({
        "Mensaje": "Bienvenido a la API de películas.",
        "Instrucciones Mes y Dia": [
            "Usa los endpoints:",
            "/peliculas/mes/?mes=nombre_del_mes",
            "/peliculas/dia/?dia=nombre_del_dia para obtener datos."
        ],
        "Links Ejemplo": [
            { "Para Mes": month, "url": format!("{}/peliculas/mes/?mes={}", base_url, month) },
            { "Para Dia": day, "url": format!("{}/peliculas/dia/?dia={}", base_url, day) }
        ]
    }))
}

pub async fn movies_by_month(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<MessageResponse>> {
    let mes = required_param(&pairs, "mes")?;

    let result = state.queries.count_by_month(mes)?;
    Ok(Json(MessageResponse::for_month(result.name, result.count)))
}

pub async fn movies_by_weekday(
    State(state): State<AppState>,
    Query(pairs): Query<QueryPairs>,
) -> Result<Json<MessageResponse>> {
    let dia = required_param(&pairs, "dia")?;

    let result = state.queries.count_by_weekday(dia)?;
    Ok(Json(MessageResponse::for_weekday(result.name, result.count)))
}

/// Value of `name`; when the parameter is repeated the last occurrence wins.
fn required_param<'a>(pairs: &'a [(String, String)], name: &str) -> Result<&'a str> {
    pairs
        .iter()
        .rev()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
        .ok_or_else(|| ApiError::MissingParameter {
            name: name.to_string(),
        })
}

/// `scheme://host` of the incoming request, unless a public URL is configured.
fn base_url(public_url: Option<&str>, host: Option<&str>, headers: &HeaderMap) -> String {
    if let Some(url) = public_url {
        return url.to_string();
    }

    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    format!("{}://{}", scheme, host.unwrap_or("localhost"))
}
