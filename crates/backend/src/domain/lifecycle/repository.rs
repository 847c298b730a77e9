use anyhow::Context;
use contracts::domain::common::EntityMetadata;
use contracts::shared::lifecycle::{CodedVariant, LifecycleDefinition, LifecycleRecord};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};

/// Одна таблица на все виды жизненного цикла; вид хранится в `kind`.
/// Вложенные части записи лежат в TEXT-колонках как JSON.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lifecycle_records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub kind: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub current_stage: String,
    pub subject: String,
    pub stage_flags: String,
    pub reason: Option<String>,
    pub attributes: String,
    pub notes: String,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// ============================================================================
// Model <-> LifecycleRecord
// ============================================================================

fn into_record<D: LifecycleDefinition>(m: Model) -> anyhow::Result<LifecycleRecord<D>> {
    let current_stage = D::Stage::from_code(&m.current_stage).with_context(|| {
        format!(
            "{}: record {} has unknown stage '{}'",
            D::full_name(),
            m.id,
            m.current_stage
        )
    })?;
    let reason = match m.reason.as_deref() {
        Some(json) => Some(serde_json::from_str(json).context("reason column")?),
        None => None,
    };
    let now = chrono::Utc::now();

    Ok(LifecycleRecord {
        subject: serde_json::from_str(&m.subject).context("subject column")?,
        stage_flags: serde_json::from_str(&m.stage_flags).context("stage_flags column")?,
        attributes: serde_json::from_str(&m.attributes).context("attributes column")?,
        notes: serde_json::from_str(&m.notes).context("notes column")?,
        reason,
        current_stage,
        metadata: EntityMetadata {
            created_at: m.created_at.unwrap_or(now),
            updated_at: m.updated_at.unwrap_or(now),
            version: m.version,
        },
        id: m.id,
        code: m.code,
    })
}

fn to_active<D: LifecycleDefinition>(record: &LifecycleRecord<D>) -> anyhow::Result<ActiveModel> {
    let reason = match &record.reason {
        Some(reason) => Some(serde_json::to_string(reason)?),
        None => None,
    };
    Ok(ActiveModel {
        kind: Set(D::full_name()),
        id: Set(record.id.clone()),
        code: Set(record.code.clone()),
        current_stage: Set(record.current_stage.code().to_string()),
        subject: Set(serde_json::to_string(&record.subject)?),
        stage_flags: Set(serde_json::to_string(&record.stage_flags)?),
        reason: Set(reason),
        attributes: Set(serde_json::to_string(&record.attributes)?),
        notes: Set(serde_json::to_string(&record.notes)?),
        created_at: Set(Some(record.metadata.created_at)),
        updated_at: Set(Some(record.metadata.updated_at)),
        version: Set(record.metadata.version),
    })
}

// ============================================================================
// Запросы
// ============================================================================

/// Все записи вида. Строки, которые не удалось прочитать, пропускаются с предупреждением.
pub async fn list_all<D: LifecycleDefinition>(
    db: &DatabaseConnection,
) -> anyhow::Result<Vec<LifecycleRecord<D>>> {
    let records = Entity::find()
        .filter(Column::Kind.eq(D::full_name()))
        .order_by_asc(Column::Code)
        .all(db)
        .await?
        .into_iter()
        .filter_map(|m| match into_record::<D>(m) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping unreadable row: {:#}", e);
                None
            }
        })
        .collect();
    Ok(records)
}

pub async fn get_by_id<D: LifecycleDefinition>(
    db: &DatabaseConnection,
    id: &str,
) -> anyhow::Result<Option<LifecycleRecord<D>>> {
    Entity::find_by_id((D::full_name(), id.to_string()))
        .one(db)
        .await?
        .map(into_record::<D>)
        .transpose()
}

pub async fn count<D: LifecycleDefinition>(db: &DatabaseConnection) -> anyhow::Result<u64> {
    Ok(Entity::find()
        .filter(Column::Kind.eq(D::full_name()))
        .count(db)
        .await?)
}

pub async fn insert<D: LifecycleDefinition>(
    db: &DatabaseConnection,
    record: &LifecycleRecord<D>,
) -> anyhow::Result<()> {
    to_active(record)?.insert(db).await?;
    Ok(())
}

/// Записать новую версию, если в БД всё ещё `expected_version`.
/// `false` означает, что запись успели изменить (или удалить).
pub async fn update_if_version<D: LifecycleDefinition>(
    db: &DatabaseConnection,
    record: &LifecycleRecord<D>,
    expected_version: i32,
) -> anyhow::Result<bool> {
    let mut active = to_active(record)?;
    active.kind = NotSet;
    active.id = NotSet;
    active.created_at = NotSet;

    let result = Entity::update_many()
        .set(active)
        .filter(Column::Kind.eq(D::full_name()))
        .filter(Column::Id.eq(record.id.clone()))
        .filter(Column::Version.eq(expected_version))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}
