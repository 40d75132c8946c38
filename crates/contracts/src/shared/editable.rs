//! Контракт записи, редактируемой по ячейкам (inline-edit)
//!
//! Сетка инвентаря не знает конкретных типов: она показывает значения полей,
//! разбирает введённый текст через `set_field` и отправляет на бэкенд патч
//! из одного поля.

use super::validation::ValidationError;
use serde::Serialize;

/// Поле записи, доступное для редактирования в ячейке
pub trait EditableField: Copy + PartialEq + Send + Sync + 'static {
    /// Имя поля в JSON
    fn key(&self) -> &'static str;

    /// Заголовок колонки
    fn label(&self) -> &'static str;

    /// Числовые поля выравниваются вправо и редактируются в `type=number`
    fn is_numeric(&self) -> bool {
        false
    }
}

/// Запись, редактируемая по ячейкам
pub trait EditableRecord: Clone + Sized {
    type Field: EditableField;
    /// Тело POST для создания новой записи
    type Draft: Serialize;

    /// Колонки сетки в порядке отображения
    fn fields() -> &'static [Self::Field];

    /// Текст ячейки
    fn field_value(&self, field: Self::Field) -> String;

    /// Разобрать введённый текст и записать в поле
    fn set_field(&mut self, field: Self::Field, raw: &str) -> Result<(), ValidationError>;

    /// Значение поля для патча
    fn field_json(&self, field: Self::Field) -> serde_json::Value;

    /// Проверка записи целиком
    fn validate(&self) -> Result<(), ValidationError>;

    /// Черновик новой записи с заданным названием
    fn draft(name: &str) -> Result<Self::Draft, ValidationError>;

    /// Строка требует внимания (например, остаток ниже минимума)
    fn needs_attention(&self) -> bool {
        false
    }

    /// Применить правку ячейки и вернуть патч `{ key: value }`
    ///
    /// Запись меняется только если новое значение прошло валидацию.
    fn edit_cell(
        &self,
        field: Self::Field,
        raw: &str,
    ) -> Result<(Self, serde_json::Value), ValidationError> {
        let mut updated = self.clone();
        updated.set_field(field, raw)?;
        updated.validate()?;
        let mut patch = serde_json::Map::new();
        patch.insert(field.key().to_string(), updated.field_json(field));
        Ok((updated, serde_json::Value::Object(patch)))
    }
}
