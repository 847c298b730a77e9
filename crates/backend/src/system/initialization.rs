use anyhow::Result;
use contracts::domain::{
    a001_employee_closure::EmployeeClosure, a002_intern_termination::InternTermination,
    a003_intern_completion::InternCompletion, a004_talent_track::TalentTrack,
    a005_early_completion::EarlyCompletion,
};
use sea_orm::DatabaseConnection;

use crate::domain::lifecycle::{seed::DemoData, service};

/// Заполнить пустые коллекции демо-записями (`[seed] demo_data = true`)
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<()> {
    let inserted = seed_kind::<EmployeeClosure>(db).await?
        + seed_kind::<InternTermination>(db).await?
        + seed_kind::<InternCompletion>(db).await?
        + seed_kind::<TalentTrack>(db).await?
        + seed_kind::<EarlyCompletion>(db).await?;

    if inserted > 0 {
        tracing::info!("Demo data: {} records inserted", inserted);
    }
    Ok(())
}

async fn seed_kind<D: DemoData>(db: &DatabaseConnection) -> Result<usize> {
    service::insert_test_data::<D>(db)
        .await
        .map_err(|e| anyhow::anyhow!("{}: seeding failed: {}", D::full_name(), e))
}

/// Выпустить токен для локальной проверки (`backend --issue-token <username>`)
pub fn issue_dev_token(username: &str) -> Result<String> {
    let user_id = format!("dev-{}", username);
    super::auth::jwt::generate_access_token(&user_id, username, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db;

    #[tokio::test]
    async fn test_seed_fills_every_kind_once() {
        let conn = db::connect("sqlite::memory:", Some(1)).await.unwrap();
        seed_demo_data(&conn).await.unwrap();

        let closures = service::list::<EmployeeClosure>(&conn).await.unwrap();
        let requests = service::list::<EarlyCompletion>(&conn).await.unwrap();
        assert!(!closures.is_empty());
        assert!(!requests.is_empty());
        assert!(closures[0].code.starts_with("CLS-"));

        seed_demo_data(&conn).await.unwrap();
        let again = service::list::<EmployeeClosure>(&conn).await.unwrap();
        assert_eq!(again.len(), closures.len());
    }
}
