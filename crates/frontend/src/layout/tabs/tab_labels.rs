//! Заголовки вкладок: единственный источник правды

use contracts::dashboards::d400_sales_report::SalesReportDashboard;
use contracts::domain::a001_flower::Flower;
use contracts::domain::a002_container::Container;
use contracts::domain::a003_supplier::Supplier;
use contracts::domain::a004_product::Product;
use contracts::domain::a006_event::Event;
use contracts::domain::a007_route::Route;
use contracts::domain::common::AggregateRoot;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_order_board::OrderBoardUseCase;

/// Префикс detail-вкладки события: "a006_evento_<id>" или "a006_evento_new"
pub const EVENT_DETAIL_PREFIX: &str = "a006_evento_";

/// Заголовок вкладки списка/страницы. Пустая строка для неизвестного ключа.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        k if k == Flower::tab_key() => Flower::list_name(),
        k if k == Container::tab_key() => Container::list_name(),
        k if k == Supplier::tab_key() => Supplier::list_name(),
        k if k == Product::tab_key() => Product::list_name(),
        k if k == Event::tab_key() => Event::list_name(),
        k if k == Route::tab_key() => Route::list_name(),
        k if k == OrderBoardUseCase::full_name() => OrderBoardUseCase::display_name(),
        SalesReportDashboard::KEY => SalesReportDashboard::TITLE,
        _ => "",
    }
}

/// Заголовок detail-вкладки: «<сущность> · <идентификатор>»
pub fn detail_tab_label(entity_label: &str, identifier: &str) -> String {
    format!("{} · {}", entity_label, identifier)
}

/// Заголовок для ключа из URL (`?active=`), включая detail-вкладки
pub fn title_for_key(key: &str) -> String {
    if let Some(id) = key.strip_prefix(EVENT_DETAIL_PREFIX) {
        return if id == "new" {
            format!("Nuevo {}", Event::element_name().to_lowercase())
        } else {
            detail_tab_label(Event::element_name(), id)
        };
    }
    match tab_label_for_key(key) {
        "" => key.to_string(),
        label => label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_keys() {
        assert_eq!(tab_label_for_key("a001_flores"), "Flores");
        assert_eq!(tab_label_for_key("u502_order_board"), "Tablero de pedidos");
        assert_eq!(tab_label_for_key("x"), "");
    }

    #[test]
    fn test_title_for_detail_keys() {
        assert_eq!(title_for_key("a006_evento_12"), "Evento · 12");
        assert_eq!(title_for_key("a006_evento_new"), "Nuevo evento");
        assert_eq!(title_for_key("zzz"), "zzz");
    }
}
