use chrono::{DateTime, Duration, Utc};
use contracts::domain::common::EntityMetadata;
use contracts::shared::lifecycle::{
    AuditNote, ChecklistEntry, LifecycleDefinition, LifecycleRecord, ReasonInfo, SubjectInfo,
};

/// Демо-записи вида для пустой базы (`POST <endpoint>/testdata` и `seed.demo_data`)
pub trait DemoData: LifecycleDefinition {
    fn demo_records(now: DateTime<Utc>) -> Vec<LifecycleRecord<Self>>;
}

pub fn person(name: &str, role: &str, department: &str, organization: &str) -> SubjectInfo {
    let email = format!(
        "{}@internhub.example",
        name.to_lowercase().replace(' ', ".")
    );
    SubjectInfo {
        name: name.to_string(),
        email,
        role: role.to_string(),
        department: department.to_string(),
        organization: organization.to_string(),
        ..Default::default()
    }
}

/// Сборка демо-записи: стадия, выполненные пункты и причина.
/// `age_days` сдвигает дату создания в прошлое.
pub struct DemoRecord<D: LifecycleDefinition> {
    record: LifecycleRecord<D>,
    now: DateTime<Utc>,
}

impl<D: LifecycleDefinition> DemoRecord<D> {
    pub fn new(number: usize, subject: SubjectInfo, now: DateTime<Utc>, age_days: i64) -> Self {
        let mut record = LifecycleRecord::<D>::new(
            uuid::Uuid::new_v4().to_string(),
            format!("{}-{:04}", D::code_prefix(), number),
            subject,
        );
        record.metadata = EntityMetadata::at(now - Duration::days(age_days));
        record.metadata.updated_at = now;
        Self { record, now }
    }

    pub fn stage(mut self, stage: D::Stage) -> Self {
        self.record.current_stage = stage;
        self
    }

    pub fn done(mut self, items: &[D::Checklist]) -> Self {
        for (i, item) in items.iter().enumerate() {
            let at = self.now - Duration::days((items.len() - i) as i64);
            self.record.stage_flags.insert(*item, ChecklistEntry::done(at));
        }
        self
    }

    pub fn reason(mut self, category: D::Reason, initiated_by: &str, details: &str) -> Self {
        self.record.reason = Some(ReasonInfo {
            category,
            initiated_by: Some(initiated_by.to_string()),
            details: details.to_string(),
        });
        self
    }

    pub fn attributes(mut self, attributes: D::Attributes) -> Self {
        self.record.attributes = attributes;
        self
    }

    pub fn note(mut self, author: &str, content: &str) -> Self {
        self.record.notes.push(AuditNote {
            id: uuid::Uuid::new_v4().to_string(),
            author: author.to_string(),
            content: content.to_string(),
            timestamp: self.now - Duration::hours(2),
            action: None,
            from_stage: None,
            to_stage: None,
            details: Default::default(),
        });
        self
    }

    pub fn build(self) -> LifecycleRecord<D> {
        self.record
    }
}
