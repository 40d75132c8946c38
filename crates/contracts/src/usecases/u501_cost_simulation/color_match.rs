//! Подбор цветков к цветовой группе
//!
//! Цвет цветка в инвентаре - свободный текст ("rojo intenso", "Blanco/Crema"),
//! поэтому совпадение нестрогое: после trim и приведения к нижнему регистру
//! одна строка должна содержать другую.

use crate::domain::a001_flower::Flower;

/// Принадлежит ли цвет цветка цветовой группе
///
/// Пустая строка - подстрока любой строки, поэтому пустой цвет группы
/// совпадает со всеми цветками.
pub fn color_matches(group_color: &str, flower_color: &str) -> bool {
    let group = group_color.trim().to_lowercase();
    let flower = flower_color.trim().to_lowercase();
    group.contains(&flower) || flower.contains(&group)
}

/// Цветки, доступные для группы, в порядке справочника
pub fn flowers_for_color<'a>(flowers: &'a [Flower], group_color: &str) -> Vec<&'a Flower> {
    flowers
        .iter()
        .filter(|f| color_matches(group_color, &f.color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_flower::FlowerId;

    fn flower(id: i64, color: &str) -> Flower {
        Flower {
            id: FlowerId(id),
            name: format!("Flor {}", id),
            color: color.to_string(),
            unit_cost: 100.0,
            stock: 10,
            min_stock: 0,
            supplier_id: None,
        }
    }

    #[test]
    fn test_exact_match_ignores_case_and_spaces() {
        assert!(color_matches("Rojo", "  rojo "));
    }

    #[test]
    fn test_substring_both_directions() {
        assert!(color_matches("Rojo", "Rojo intenso"));
        assert!(color_matches("rojo intenso", "ROJO"));
        assert!(!color_matches("Rojo", "Blanco"));
    }

    #[test]
    fn test_non_ascii_case_folding() {
        assert!(color_matches("ÁMBAR", "ámbar claro"));
    }

    #[test]
    fn test_filter_keeps_catalog_order() {
        let flowers = vec![
            flower(1, "Blanco"),
            flower(2, "Rojo"),
            flower(3, "rojo oscuro"),
        ];
        let ids: Vec<i64> = flowers_for_color(&flowers, "Rojo")
            .iter()
            .map(|f| f.id.0)
            .collect();
        assert_eq!(ids, vec![2, 3]);
    }
}
