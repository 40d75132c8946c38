use crate::shared::api_utils::api_url;
use crate::shared::http;
use chrono::NaiveDate;
use contracts::domain::a007_route::{OptimizeRouteRequest, Route, RouteId, RouteQuery};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_envelope::ApiError;

pub async fn fetch_route(date: NaiveDate) -> Result<Route, ApiError> {
    let path = http::with_query(&Route::list_path(), &RouteQuery { date })?;
    http::get_json(&path).await
}

/// Пересчитать порядок остановок на бэкенде
pub async fn optimize_route(date: NaiveDate) -> Result<Route, ApiError> {
    http::post_json(
        &format!("{}/optimizar", Route::list_path()),
        &OptimizeRouteRequest { date },
    )
    .await
}

/// Документ для печати отдаёт бэкенд
pub fn print_url(id: RouteId) -> String {
    api_url(&format!("{}/imprimir", Route::item_path(id)))
}
