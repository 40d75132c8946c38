use crate::shared::list_utils::{cmp_number, cmp_text, Searchable, Sortable};
use contracts::domain::a006_event::Event;
use std::cmp::Ordering;

/// Строка таблицы событий
#[derive(Clone, Debug, PartialEq)]
pub struct EventRow(pub Event);

impl EventRow {
    pub fn price(&self) -> f64 {
        self.0.proposed_price.unwrap_or(0.0)
    }
}

impl Sortable for EventRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "name" => cmp_text(&self.0.name, &other.0.name),
            "customer" => cmp_text(&self.0.customer, &other.0.customer),
            // События без даты уходят в конец при сортировке по возрастанию
            "date" => match (self.0.date, other.0.date) {
                (Some(a), Some(b)) => a.cmp(&b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            "price" => cmp_number(self.price(), other.price()),
            _ => Ordering::Equal,
        }
    }
}

impl Searchable for EventRow {
    fn matches_filter(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        [&self.0.name, &self.0.customer, &self.0.venue]
            .iter()
            .any(|s| s.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_utils::{filter_list, sort_list};
    use chrono::NaiveDate;
    use contracts::domain::a006_event::EventId;

    fn row(id: i64, name: &str, venue: &str, day: Option<u32>) -> EventRow {
        EventRow(Event {
            id: EventId(id),
            name: name.into(),
            customer: "Cliente".into(),
            date: day.and_then(|d| NaiveDate::from_ymd_opt(2026, 11, d)),
            venue: venue.into(),
            items: vec![],
            margin_percent: 30.0,
            proposed_price: None,
        })
    }

    #[test]
    fn test_sort_by_date_puts_undated_last() {
        let mut rows = vec![row(1, "A", "", None), row(2, "B", "", Some(20)), row(3, "C", "", Some(5))];
        sort_list(&mut rows, "date", true);
        let ids: Vec<i64> = rows.iter().map(|r| r.0.id.value()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }

    #[test]
    fn test_filter_matches_venue() {
        let rows = vec![row(1, "Boda Soto", "Casona Las Condes", None), row(2, "Funeral", "Parroquia", None)];
        let found = filter_list(rows, "casona");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].0.id, EventId(1));
    }
}
