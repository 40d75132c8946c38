use crate::shared::list_utils::{cmp_number, cmp_text, Searchable, Sortable};
use contracts::domain::a004_product::Product;
use std::cmp::Ordering;

/// Строка таблицы продуктов
#[derive(Clone, Debug, PartialEq)]
pub struct ProductRow(pub Product);

impl Sortable for ProductRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.0.name, &other.0.name),
            "category" => cmp_text(&self.0.category, &other.0.category),
            "price" => cmp_number(self.0.price, other.0.price),
            "colors" => self.0.colors.len().cmp(&other.0.colors.len()),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for ProductRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.0.matches_filter(filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_list, sort_list};
    use contracts::domain::a004_product::ProductId;

    fn row(id: i64, name: &str, category: &str, price: f64) -> ProductRow {
        ProductRow(Product {
            id: ProductId(id),
            name: name.into(),
            details: String::new(),
            price,
            category: category.into(),
            image_url: None,
            colors: vec![],
            active: true,
        })
    }

    #[test]
    fn test_sort_by_price_desc() {
        let mut rows = vec![
            row(1, "Ramo", "Ramos", 15000.0),
            row(2, "Caja", "Cajas", 32000.0),
            row(3, "Mini", "Ramos", 8000.0),
        ];
        sort_list(&mut rows, "price", false);
        let ids: Vec<i64> = rows.iter().map(|r| r.0.id.value()).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_filter_by_category() {
        let rows = vec![row(1, "Ramo", "Ramos", 1.0), row(2, "Caja", "Cajas", 1.0)];
        assert_eq!(filter_list(rows, "cajas").len(), 1);
    }
}
