use super::AggregateId;

/// Трейт для корня агрегата
///
/// Агрегаты здесь - зеркала ответов бэкенда, поэтому трейт описывает только
/// идентификацию записи и статические метаданные для UI и маршрутов API.
pub trait AggregateRoot {
    /// Тип идентификатора агрегата
    type Id: AggregateId;

    // ============================================================================
    // Методы экземпляра (данные конкретной записи)
    // ============================================================================

    /// Получить ID записи
    fn id(&self) -> Self::Id;

    /// Получить название записи для списков и заголовков
    fn description(&self) -> &str;

    // ============================================================================
    // Метаданные класса агрегата (статические данные)
    // ============================================================================

    /// Индекс агрегата в системе (например, "a001")
    fn aggregate_index() -> &'static str;

    /// Путь коллекции в REST API (например, "inventario/flores")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число, например, "Flor")
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число, например, "Flores")
    fn list_name() -> &'static str;

    // ============================================================================
    // Методы с реализацией по умолчанию
    // ============================================================================

    /// Ключ вкладки (например, "a001_flores")
    fn tab_key() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::slug())
    }

    /// Латинское имя модуля агрегата (по умолчанию - последний сегмент пути API)
    fn slug() -> &'static str {
        Self::collection_name()
            .rsplit('/')
            .next()
            .unwrap_or_else(Self::collection_name)
    }

    /// Путь к записи в REST API
    fn item_path(id: Self::Id) -> String {
        format!("/{}/{}", Self::collection_name(), id.as_string())
    }

    /// Путь к коллекции в REST API
    fn list_path() -> String {
        format!("/{}", Self::collection_name())
    }
}
