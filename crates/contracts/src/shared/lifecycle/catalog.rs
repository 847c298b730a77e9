use std::marker::PhantomData;

use super::definition::{CodedVariant, LifecycleDefinition};

/// Визуальное оформление стадии: CSS-классы бейджа и имя иконки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageStyle {
    pub color: &'static str,
    pub icon: &'static str,
}

impl StageStyle {
    pub const fn new(color: &'static str, icon: &'static str) -> Self {
        Self { color, icon }
    }
}

/// Оформление для значения, которого нет в каталоге
pub const UNKNOWN_STAGE_STYLE: StageStyle = StageStyle::new("bg-gray-100 text-gray-800", "clock");

/// Каталог стадий вида `D`: цвет, иконка, подпись.
///
/// Никогда не паникует: неизвестная стадия получает нейтральное оформление.
pub struct StatusCatalog<D>(PhantomData<D>);

impl<D: LifecycleDefinition> StatusCatalog<D> {
    /// Стадии в каноническом порядке
    pub fn stages() -> &'static [D::Stage] {
        D::Stage::all()
    }

    pub fn style_for(stage: D::Stage) -> StageStyle {
        D::stage_styles()
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, style)| *style)
            .unwrap_or(UNKNOWN_STAGE_STYLE)
    }

    pub fn color_for(stage: D::Stage) -> &'static str {
        Self::style_for(stage).color
    }

    pub fn icon_for(stage: D::Stage) -> &'static str {
        Self::style_for(stage).icon
    }

    /// Оформление по коду стадии, пришедшему извне
    pub fn style_for_code(code: &str) -> StageStyle {
        D::Stage::from_code(code)
            .map(Self::style_for)
            .unwrap_or(UNKNOWN_STAGE_STYLE)
    }

    pub fn color_for_code(code: &str) -> &'static str {
        Self::style_for_code(code).color
    }

    pub fn icon_for_code(code: &str) -> &'static str {
        Self::style_for_code(code).icon
    }

    /// Подпись стадии по коду; для неизвестного кода возвращается сам код
    pub fn label_for_code(code: &str) -> String {
        D::Stage::from_code(code)
            .map(|stage| stage.label().to_string())
            .unwrap_or_else(|| code.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_employee_closure::{ClosureStage, EmployeeClosure};
    use crate::domain::a002_intern_termination::InternTermination;
    use crate::domain::a003_intern_completion::InternCompletion;
    use crate::domain::a004_talent_track::TalentTrack;
    use crate::domain::a005_early_completion::EarlyCompletion;

    fn assert_styled<D: LifecycleDefinition>() {
        for stage in D::Stage::all() {
            assert!(
                D::stage_styles().iter().any(|(s, _)| s == stage),
                "{} has no style for {:?}",
                D::full_name(),
                stage
            );
        }
    }

    #[test]
    fn test_every_stage_has_a_style() {
        assert_styled::<EmployeeClosure>();
        assert_styled::<InternTermination>();
        assert_styled::<InternCompletion>();
        assert_styled::<TalentTrack>();
        assert_styled::<EarlyCompletion>();
    }

    #[test]
    fn test_known_stage_lookup() {
        assert_eq!(
            StatusCatalog::<EmployeeClosure>::color_for(ClosureStage::AccessRevocation),
            "bg-red-100 text-red-800"
        );
        assert_eq!(StatusCatalog::<EmployeeClosure>::icon_for_code("closed"), "archive");
        assert_eq!(
            StatusCatalog::<EmployeeClosure>::label_for_code("notice_period"),
            "Notice Period"
        );
    }

    #[test]
    fn test_unknown_code_gets_neutral_style() {
        assert_eq!(
            StatusCatalog::<InternTermination>::color_for_code("on_hold"),
            "bg-gray-100 text-gray-800"
        );
        assert_eq!(StatusCatalog::<InternTermination>::icon_for_code(""), "clock");
        assert_eq!(StatusCatalog::<InternTermination>::label_for_code("on_hold"), "on_hold");
    }
}
