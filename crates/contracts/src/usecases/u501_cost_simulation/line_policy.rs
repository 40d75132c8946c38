//! Единое правило "можно ли удалить строку цветка из группы"

/// Минимальное число строк в цветовой группе
///
/// Инвариант: операция удаления никогда не опускает группу ниже
/// `min_lines_per_group`; сама группа не удаляется никогда.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePolicy {
    pub min_lines_per_group: usize,
}

impl LinePolicy {
    /// Симулятор: группа может остаться пустой (вклад 0)
    pub const SIMULATOR: LinePolicy = LinePolicy {
        min_lines_per_group: 0,
    };

    /// Редактор рецепта: в каждой группе минимум один цветок
    pub const RECIPE_EDITOR: LinePolicy = LinePolicy {
        min_lines_per_group: 1,
    };

    pub fn can_remove(&self, lines_in_group: usize) -> bool {
        lines_in_group > self.min_lines_per_group
    }

    /// Сколько строк по умолчанию создать в пустой группе
    pub fn initial_lines(&self) -> usize {
        self.min_lines_per_group
    }
}

impl Default for LinePolicy {
    fn default() -> Self {
        LinePolicy::SIMULATOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulator_allows_last_line_removal() {
        assert!(LinePolicy::SIMULATOR.can_remove(1));
        assert!(!LinePolicy::SIMULATOR.can_remove(0));
    }

    #[test]
    fn test_editor_keeps_one_line() {
        assert!(!LinePolicy::RECIPE_EDITOR.can_remove(1));
        assert!(LinePolicy::RECIPE_EDITOR.can_remove(2));
    }
}
