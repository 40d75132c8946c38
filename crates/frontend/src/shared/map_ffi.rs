// Обёртки над функциями карты, которые index.html кладёт в window.
// Состояния здесь нет: только подготовка маркеров.

use contracts::domain::a007_route::{GeoBounds, Route, RouteStop};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = floreriaMapInit)]
    fn map_init(container_id: &str);

    #[wasm_bindgen(js_name = floreriaMapShowStops)]
    fn map_show_stops(stops: JsValue, bounds: JsValue);

    #[wasm_bindgen(js_name = floreriaMapFocusStop)]
    fn map_focus_stop(order_id: f64);
}

/// Маркер для карты. `label` и `address` - простой текст, шим не разбирает их как HTML.
#[derive(Debug, Serialize, PartialEq)]
struct MapMarker<'a> {
    id: i64,
    position: u32,
    label: &'a str,
    address: &'a str,
    lat: f64,
    lng: f64,
    urgent: bool,
    dispatched: bool,
}

/// Создать карту в контейнере
pub fn init(container_id: &str) {
    map_init(container_id);
}

fn markers<'a>(stops: &[&'a RouteStop]) -> Vec<MapMarker<'a>> {
    stops
        .iter()
        .map(|s| MapMarker {
            id: s.order_id.value(),
            position: s.position,
            label: &s.customer,
            address: &s.address,
            lat: s.lat,
            lng: s.lng,
            urgent: s.urgent,
            dispatched: s.dispatched,
        })
        .collect()
}

/// Остановки и границы для карты; без маршрута карта пустая
fn route_payload(route: Option<&Route>) -> (Vec<&RouteStop>, Option<GeoBounds>) {
    match route {
        Some(r) => (r.ordered_stops(), r.bounds()),
        None => (Vec::new(), None),
    }
}

/// Показать остановки и вписать карту в их границы
pub fn show_stops(stops: &[&RouteStop], bounds: Option<GeoBounds>) {
    let markers = match serde_wasm_bindgen::to_value(&markers(stops)) {
        Ok(v) => v,
        Err(e) => {
            log::error!("No se pudieron serializar las paradas: {}", e);
            return;
        }
    };
    let bounds = bounds
        .and_then(|b| serde_wasm_bindgen::to_value(&b).ok())
        .unwrap_or(JsValue::NULL);
    map_show_stops(markers, bounds);
}

/// Показать маршрут; `None` убирает маркеры прошлого маршрута
pub fn show_route(route: Option<&Route>) {
    let (stops, bounds) = route_payload(route);
    show_stops(&stops, bounds);
}

pub fn focus_stop(order_id: i64) {
    map_focus_stop(order_id as f64);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::domain::a005_order::OrderId;
    use contracts::domain::a007_route::RouteId;

    fn stop(id: i64, position: u32, customer: &str) -> RouteStop {
        RouteStop {
            order_id: OrderId(id),
            position,
            customer: customer.into(),
            address: "Av. Providencia 1234".into(),
            lat: -33.43,
            lng: -70.61,
            urgent: false,
            dispatched: false,
        }
    }

    #[test]
    fn test_missing_route_clears_map() {
        let (stops, bounds) = route_payload(None);
        assert!(stops.is_empty());
        assert_eq!(bounds, None);
    }

    #[test]
    fn test_route_payload_in_visit_order() {
        let route = Route {
            id: RouteId(1),
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            stops: vec![stop(7, 2, "Luis"), stop(3, 1, "Ana")],
            distance_km: 12.0,
            duration_min: 40.0,
        };
        let (stops, bounds) = route_payload(Some(&route));
        let ids: Vec<i64> = stops.iter().map(|s| s.order_id.value()).collect();
        assert_eq!(ids, vec![3, 7]);
        assert!(bounds.is_some());
    }

    #[test]
    fn test_marker_text_is_passed_verbatim() {
        let s = stop(1, 1, "<img src=x onerror=alert(1)>");
        let list = markers(&[&s]);
        // Экранирование делает шим через textContent; здесь текст не меняется
        assert_eq!(list[0].label, "<img src=x onerror=alert(1)>");
        assert_eq!(list[0].address, "Av. Providencia 1234");
    }
}
