//! Раскладка заказов по колонкам и перемещение между ними

use super::state::{date_bucket, OrderState};
use crate::domain::a005_order::{Order, OrderId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Вид доски
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BoardKind {
    /// Все 10 колонок
    #[default]
    Kanban,
    /// 7 колонок: ближайшие недели сворачиваются в "Entregas Futuras"
    Simplified,
}

impl BoardKind {
    pub fn columns(&self) -> Vec<OrderState> {
        match self {
            BoardKind::Kanban => OrderState::ALL.to_vec(),
            BoardKind::Simplified => OrderState::ALL
                .into_iter()
                .filter(|s| {
                    !matches!(
                        s,
                        OrderState::DeliverDayAfter
                            | OrderState::DeliverThisWeek
                            | OrderState::DeliverNextWeek
                    )
                })
                .collect(),
        }
    }

    /// Колонка этого вида доски для состояния
    pub fn column_for(&self, state: OrderState) -> OrderState {
        match (self, state) {
            (
                BoardKind::Simplified,
                OrderState::DeliverDayAfter
                | OrderState::DeliverThisWeek
                | OrderState::DeliverNextWeek,
            ) => OrderState::DeliverLater,
            _ => state,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            BoardKind::Kanban => "Kanban",
            BoardKind::Simplified => "Simplificado",
        }
    }
}

/// Состояние заказа: строка бэкенда, иначе колонка по дате доставки
pub fn classify(order: &Order, today: NaiveDate) -> OrderState {
    OrderState::from_label(&order.state)
        .unwrap_or_else(|| date_bucket(order.delivery_date, today))
}

/// Колонка доски с заказами
#[derive(Debug, Clone, PartialEq)]
pub struct BoardColumn {
    pub state: OrderState,
    pub orders: Vec<Order>,
}

impl BoardColumn {
    pub fn urgent_count(&self) -> usize {
        self.orders.iter().filter(|o| o.urgent).count()
    }
}

/// Разложить заказы по колонкам вида `kind`
///
/// Каждый заказ попадает ровно в одну колонку. Внутри колонки срочные идут
/// первыми, затем по дате доставки.
pub fn group_orders(orders: &[Order], kind: BoardKind, today: NaiveDate) -> Vec<BoardColumn> {
    let mut columns: Vec<BoardColumn> = kind
        .columns()
        .into_iter()
        .map(|state| BoardColumn {
            state,
            orders: Vec::new(),
        })
        .collect();

    for order in orders {
        let target = kind.column_for(classify(order, today));
        if let Some(col) = columns.iter_mut().find(|c| c.state == target) {
            col.orders.push(order.clone());
        }
    }

    for col in &mut columns {
        col.orders.sort_by(|a, b| {
            b.urgent
                .cmp(&a.urgent)
                .then_with(|| match (a.delivery_date, b.delivery_date) {
                    (Some(x), Some(y)) => x.cmp(&y),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                })
        });
    }
    columns
}

/// Тело PUT `/pedidos/{id}/estado`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveOrderRequest {
    #[serde(rename = "estado")]
    pub state: OrderState,
}

/// Query для загрузки доски
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoardQuery {
    /// Пересчитать колонки по датам на бэкенде
    #[serde(rename = "reclasificar")]
    pub reclassify: bool,
}

impl BoardQuery {
    /// Первая загрузка доски
    pub fn initial() -> Self {
        Self { reclassify: true }
    }

    /// Перезагрузка после перемещения: раскладку пользователя не трогаем
    pub fn after_move() -> Self {
        Self { reclassify: false }
    }
}

/// Запрос на перемещение, если оно что-то меняет
///
/// Перемещение в колонку, где заказ уже показан на доске `kind`, - no-op
/// без запроса к бэкенду.
pub fn move_request(
    order: &Order,
    kind: BoardKind,
    target: OrderState,
    today: NaiveDate,
) -> Option<(OrderId, MoveOrderRequest)> {
    if kind.column_for(classify(order, today)) == target {
        return None;
    }
    Some((order.id, MoveOrderRequest { state: target }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 12).unwrap()
    }

    fn order(id: i64, state: &str, days: Option<i64>, urgent: bool) -> Order {
        Order {
            id: OrderId(id),
            customer_name: format!("Cliente {id}"),
            customer_phone: String::new(),
            address: String::new(),
            product_id: None,
            product_name: String::new(),
            quantity: 1,
            delivery_date: days.map(|d| today() + chrono::Duration::days(d)),
            state: state.to_string(),
            urgent,
            photo_url: None,
            notes: String::new(),
            total: 0.0,
            recipe_confirmed: false,
        }
    }

    fn sample() -> Vec<Order> {
        vec![
            order(1, "", Some(0), false),
            order(2, "desconocido", Some(1), false),
            order(3, "", Some(2), false),
            order(4, "", Some(5), false),
            order(5, "", Some(9), false),
            order(6, "", Some(40), false),
            order(7, "", None, false),
            order(8, "En Proceso", Some(0), false),
            order(9, "Listo para Despacho", None, true),
            order(10, "Despachados", Some(-3), false),
            order(11, "Entregas Próxima Semana", None, false),
        ]
    }

    #[test]
    fn test_each_order_in_exactly_one_column() {
        for kind in [BoardKind::Kanban, BoardKind::Simplified] {
            let columns = group_orders(&sample(), kind, today());
            let mut ids: Vec<i64> = columns
                .iter()
                .flat_map(|c| c.orders.iter().map(|o| o.id.value()))
                .collect();
            ids.sort();
            assert_eq!(ids, (1..=11).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_column_counts() {
        assert_eq!(BoardKind::Kanban.columns().len(), 10);
        assert_eq!(BoardKind::Simplified.columns().len(), 7);
    }

    #[test]
    fn test_unknown_state_due_today_goes_to_today() {
        let o = order(1, "???", Some(0), false);
        assert_eq!(classify(&o, today()), OrderState::DeliverToday);
    }

    #[test]
    fn test_simplified_folds_mid_range() {
        let columns = group_orders(&sample(), BoardKind::Simplified, today());
        let later = columns
            .iter()
            .find(|c| c.state == OrderState::DeliverLater)
            .unwrap();
        let mut ids: Vec<i64> = later.orders.iter().map(|o| o.id.value()).collect();
        ids.sort();
        assert_eq!(ids, vec![3, 4, 5, 6, 11]);
    }

    #[test]
    fn test_urgent_first_within_column() {
        let orders = vec![
            order(1, "En Proceso", Some(1), false),
            order(2, "En Proceso", Some(3), true),
        ];
        let columns = group_orders(&orders, BoardKind::Kanban, today());
        let col = columns
            .iter()
            .find(|c| c.state == OrderState::InProgress)
            .unwrap();
        assert_eq!(col.orders[0].id, OrderId(2));
        assert_eq!(col.urgent_count(), 1);
    }

    #[test]
    fn test_move_to_same_state_is_noop() {
        let o = order(8, "En Proceso", None, false);
        assert!(move_request(&o, BoardKind::Kanban, OrderState::InProgress, today()).is_none());

        let (id, req) = move_request(&o, BoardKind::Kanban, OrderState::Dispatched, today()).unwrap();
        assert_eq!(id, OrderId(8));
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            serde_json::json!({ "estado": "Despachados" })
        );
    }

    #[test]
    fn test_any_state_can_move_back() {
        let o = order(10, "Despachados", None, false);
        assert!(move_request(&o, BoardKind::Kanban, OrderState::DeliverToday, today()).is_some());
    }

    #[test]
    fn test_simplified_drop_on_folded_column_is_noop() {
        let o = order(4, "Entregas esta Semana", None, false);
        assert!(move_request(&o, BoardKind::Simplified, OrderState::DeliverLater, today()).is_none());
        // На kanban та же колонка "Entregas Futuras" - реальное перемещение
        let (_, req) = move_request(&o, BoardKind::Kanban, OrderState::DeliverLater, today()).unwrap();
        assert_eq!(req.state, OrderState::DeliverLater);
    }
}
