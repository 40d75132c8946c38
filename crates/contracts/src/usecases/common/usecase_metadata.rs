/// Метаданные UseCase для идентификации и навигации
pub trait UseCaseMetadata {
    /// Индекс UseCase (например, "u501")
    fn usecase_index() -> &'static str;

    /// Техническое имя (например, "cost_simulation")
    fn usecase_name() -> &'static str;

    /// Отображаемое имя для UI (например, "Simulador de costos")
    fn display_name() -> &'static str;

    /// Описание UseCase
    fn description() -> &'static str {
        ""
    }

    /// Полное имя вида "u501_cost_simulation"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
