use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

use super::actions::{AuxiliaryAction, LifecycleAction};
use super::catalog::StageStyle;
use super::record::LifecycleRecord;
use super::request::PatchStyle;
use super::transition::TransitionRule;

/// Закрытый набор значений с кодом для wire-формата и подписью для UI.
///
/// Реализуется стадиями, пунктами чек-листа и причинами каждого вида
/// жизненного цикла. Порядок `all()` задаёт порядок отображения.
pub trait CodedVariant:
    Copy + Eq + Ord + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Все значения в каноническом порядке
    fn all() -> &'static [Self];

    /// Код значения (совпадает с serde-представлением)
    fn code(&self) -> &'static str;

    /// Человекочитаемое название
    fn label(&self) -> &'static str;

    /// Парсинг из кода; `None` для неизвестного значения
    fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|v| v.code() == code)
    }

    /// Позиция значения в каноническом порядке
    fn position(&self) -> usize {
        Self::all()
            .iter()
            .position(|v| v == self)
            .unwrap_or(usize::MAX)
    }
}

/// Описание одного вида жизненного цикла (закрытие сотрудника, завершение стажировки и т.д.)
///
/// Каждый вид объявляет свой упорядоченный список стадий, набор пунктов чек-листа,
/// таблицу переходов и вспомогательные действия. Общая логика (каталог, прогресс,
/// резолвер действий, валидация переходов) написана один раз поверх этого трейта.
pub trait LifecycleDefinition:
    Debug + Clone + Copy + PartialEq + Default + Send + Sync + 'static
{
    /// Стадии процесса
    type Stage: CodedVariant;
    /// Пункты чек-листа
    type Checklist: CodedVariant;
    /// Классификация причины входа в процесс
    type Reason: CodedVariant;
    /// Дополнительные атрибуты записи, от которых зависят условные действия
    type Attributes: Debug
        + Clone
        + Default
        + PartialEq
        + Serialize
        + DeserializeOwned
        + Send
        + Sync
        + 'static;

    // ============================================================================
    // Метаданные вида
    // ============================================================================

    /// Индекс вида в системе (например, "a001")
    fn index() -> &'static str;

    /// Имя коллекции (например, "employee_closure")
    fn collection_name() -> &'static str;

    /// Имя элемента для UI (единственное число)
    fn element_name() -> &'static str;

    /// Имя списка для UI (множественное число)
    fn list_name() -> &'static str;

    /// Префикс бизнес-кода записи (например, "CLS")
    fn code_prefix() -> &'static str;

    /// Путь коллекции на сервере
    fn endpoint() -> &'static str;

    /// Формат PATCH-запроса действия
    fn patch_style() -> PatchStyle;

    // ============================================================================
    // Поведение
    // ============================================================================

    /// Стадия новой записи
    fn initial_stage() -> Self::Stage;

    /// Таблица цвета/иконки по стадиям
    fn stage_styles() -> &'static [(Self::Stage, StageStyle)];

    /// Таблица переходов (прямые действия)
    fn transitions() -> &'static [TransitionRule<Self::Stage, Self::Checklist>];

    /// Всегда доступные действия, не меняющие стадию
    fn auxiliary_actions() -> &'static [AuxiliaryAction];

    /// Действия, доступные только в определённой стадии или при определённых атрибутах записи
    fn conditional_actions(
        _stage: Self::Stage,
        _record: &LifecycleRecord<Self>,
    ) -> Vec<LifecycleAction> {
        Vec::new()
    }

    /// Полное имя вида (например, "a001_employee_closure")
    fn full_name() -> String {
        format!("{}_{}", Self::index(), Self::collection_name())
    }
}
