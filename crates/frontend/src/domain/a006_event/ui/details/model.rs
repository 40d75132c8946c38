use crate::shared::http;
use contracts::domain::a006_event::{Event, EventDto, EventId};
use contracts::domain::common::AggregateRoot;
use contracts::shared::api_envelope::ApiError;

pub async fn fetch_event(id: EventId) -> Result<Event, ApiError> {
    http::get_json(&Event::item_path(id)).await
}

/// Сохранить событие; бэкенд возвращает сохранённую запись
pub async fn save_event(dto: &EventDto) -> Result<Event, ApiError> {
    match dto.id {
        Some(id) => http::put_json(&Event::item_path(id), dto).await,
        None => http::post_json(&Event::list_path(), dto).await,
    }
}
