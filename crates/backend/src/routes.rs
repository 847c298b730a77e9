use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use contracts::domain::{
    a001_employee_closure::EmployeeClosure, a002_intern_termination::InternTermination,
    a003_intern_completion::InternCompletion, a004_talent_track::TalentTrack,
    a005_early_completion::EarlyCompletion,
};
use contracts::shared::lifecycle::LifecycleDefinition;

use crate::domain::lifecycle::seed::DemoData;
use crate::handlers;
use crate::shared::config::Config;
use crate::system;

/// Маршруты одного вида жизненного цикла
fn lifecycle_routes<D: DemoData>() -> Router {
    let endpoint = D::endpoint();
    Router::new()
        .route(endpoint, get(handlers::lifecycle::list::<D>))
        .route(
            &format!("{}/:id/{}", endpoint, D::patch_style().segment()),
            patch(handlers::lifecycle::apply::<D>),
        )
        .route(
            &format!("{}/testdata", endpoint),
            post(handlers::lifecycle::insert_test_data::<D>),
        )
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(config: &Config) -> Router {
    // ========================================
    // COMPANY LIFECYCLE ROUTES
    // ========================================
    let mut company = Router::new()
        // A001 Employee closure
        .merge(lifecycle_routes::<EmployeeClosure>())
        // A002 Intern termination
        .merge(lifecycle_routes::<InternTermination>())
        // A003 Intern completion
        .merge(lifecycle_routes::<InternCompletion>())
        // A004 Talent track
        .merge(lifecycle_routes::<TalentTrack>())
        // A005 Early completion requests
        .merge(lifecycle_routes::<EarlyCompletion>());

    if config.auth.enabled {
        company = company.route_layer(middleware::from_fn(
            system::auth::middleware::require_auth,
        ));
    }

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(company)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::lifecycle::PatchStyle;

    #[test]
    fn test_patch_paths_follow_kind_style() {
        assert_eq!(
            InternTermination::patch_style().path(InternTermination::endpoint(), ":id"),
            "/api/company/recruitment/interns/termination/:id/status"
        );
        assert_eq!(EarlyCompletion::patch_style(), PatchStyle::Decision);
        assert_eq!(EmployeeClosure::patch_style(), PatchStyle::Action);
    }

    #[test]
    fn test_router_builds_with_and_without_auth() {
        let mut config = Config::default();
        let _ = configure_routes(&config);
        config.auth.enabled = true;
        let _ = configure_routes(&config);
    }
}
