use crate::domain::a005_order::OrderId;
use crate::domain::common::AggregateRoot;
use chrono::NaiveDate;
use crate::shared::serde_helpers::null_as_default;
use serde::{Deserialize, Serialize};

crate::aggregate_id!(RouteId);

/// Маршрут доставки, уже оптимизированный бэкендом
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub id: RouteId,

    #[serde(rename = "fecha")]
    pub date: NaiveDate,

    #[serde(rename = "paradas", default, deserialize_with = "null_as_default")]
    pub stops: Vec<RouteStop>,

    #[serde(rename = "distancia_km", default, deserialize_with = "null_as_default")]
    pub distance_km: f64,

    #[serde(rename = "duracion_min", default, deserialize_with = "null_as_default")]
    pub duration_min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    #[serde(rename = "pedido_id")]
    pub order_id: OrderId,

    /// Порядковый номер остановки, с 1
    #[serde(rename = "orden")]
    pub position: u32,

    #[serde(rename = "cliente", default, deserialize_with = "null_as_default")]
    pub customer: String,

    #[serde(rename = "direccion", default, deserialize_with = "null_as_default")]
    pub address: String,

    pub lat: f64,
    pub lng: f64,

    #[serde(rename = "urgente", default, deserialize_with = "null_as_default")]
    pub urgent: bool,

    #[serde(rename = "despachado", default, deserialize_with = "null_as_default")]
    pub dispatched: bool,
}

/// Прямоугольник для `fitBounds` карты
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

/// Запрос на пересчёт маршрута
/// Query-строка `?fecha=YYYY-MM-DD` для маршрута на день
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteQuery {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizeRouteRequest {
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
}

impl Route {
    /// Остановки в порядке объезда
    pub fn ordered_stops(&self) -> Vec<&RouteStop> {
        let mut stops: Vec<&RouteStop> = self.stops.iter().collect();
        stops.sort_by_key(|s| s.position);
        stops
    }

    pub fn pending_count(&self) -> usize {
        self.stops.iter().filter(|s| !s.dispatched).count()
    }

    /// Границы всех остановок; `None`, если нет ни одной валидной точки
    pub fn bounds(&self) -> Option<GeoBounds> {
        self.stops
            .iter()
            .filter(|s| s.lat.is_finite() && s.lng.is_finite())
            .fold(None, |acc: Option<GeoBounds>, s| {
                Some(match acc {
                    None => GeoBounds {
                        south: s.lat,
                        west: s.lng,
                        north: s.lat,
                        east: s.lng,
                    },
                    Some(b) => GeoBounds {
                        south: b.south.min(s.lat),
                        west: b.west.min(s.lng),
                        north: b.north.max(s.lat),
                        east: b.east.max(s.lng),
                    },
                })
            })
    }

    pub fn stop_mut(&mut self, order_id: OrderId) -> Option<&mut RouteStop> {
        self.stops.iter_mut().find(|s| s.order_id == order_id)
    }
}

impl AggregateRoot for Route {
    type Id = RouteId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn description(&self) -> &str {
        "Ruta de despacho"
    }

    fn aggregate_index() -> &'static str {
        "a007"
    }

    fn collection_name() -> &'static str {
        "rutas"
    }

    fn element_name() -> &'static str {
        "Ruta"
    }

    fn list_name() -> &'static str {
        "Rutas"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(position: u32, lat: f64, lng: f64) -> RouteStop {
        RouteStop {
            order_id: OrderId(position as i64),
            position,
            customer: String::new(),
            address: String::new(),
            lat,
            lng,
            urgent: false,
            dispatched: false,
        }
    }

    fn route(stops: Vec<RouteStop>) -> Route {
        Route {
            id: RouteId(1),
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            stops,
            distance_km: 0.0,
            duration_min: 0.0,
        }
    }

    #[test]
    fn test_ordered_stops_sorted_by_position() {
        let r = route(vec![stop(3, 0.0, 0.0), stop(1, 0.0, 0.0), stop(2, 0.0, 0.0)]);
        let positions: Vec<u32> = r.ordered_stops().iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_bounds_cover_all_stops() {
        let r = route(vec![
            stop(1, -33.45, -70.66),
            stop(2, -33.40, -70.58),
            stop(3, -33.52, -70.60),
        ]);
        let b = r.bounds().unwrap();
        assert_eq!(b.south, -33.52);
        assert_eq!(b.north, -33.40);
        assert_eq!(b.west, -70.66);
        assert_eq!(b.east, -70.58);
    }

    #[test]
    fn test_bounds_empty_route() {
        assert_eq!(route(vec![]).bounds(), None);
        assert_eq!(route(vec![stop(1, f64::NAN, 0.0)]).bounds(), None);
    }
}
