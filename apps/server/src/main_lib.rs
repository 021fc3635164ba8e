use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use budgetwise_core::budgets::{AllocationRatios, BudgetService, BudgetServiceTrait};
use budgetwise_core::categories::{CategoryService, CategoryServiceTrait};
use budgetwise_core::goals::{GoalService, GoalServiceTrait};
use budgetwise_core::spending::SpendingRepositoryTrait;
use budgetwise_storage_sqlite::budgets::BudgetRepository;
use budgetwise_storage_sqlite::categories::CategoryRepository;
use budgetwise_storage_sqlite::db;
use budgetwise_storage_sqlite::goals::GoalRepository;
use budgetwise_storage_sqlite::spending::SpendingRepository;

use crate::config::Config;

pub struct AppState {
    pub budget_service: Arc<dyn BudgetServiceTrait + Send + Sync>,
    pub category_service: Arc<dyn CategoryServiceTrait + Send + Sync>,
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub spending_repository: Arc<dyn SpendingRepositoryTrait + Send + Sync>,
    pub db_path: String,
}

pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if config.log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = Arc::new(db::create_pool(&db_path)?);
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer((*pool).clone());

    let category_repo = Arc::new(CategoryRepository::new(pool.clone(), writer.clone()));
    let category_service = Arc::new(CategoryService::new(category_repo));

    let goal_repo = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let goal_service: Arc<GoalService> = Arc::new(GoalService::new(goal_repo));

    let spending_repository: Arc<SpendingRepository> =
        Arc::new(SpendingRepository::new(pool.clone(), writer.clone()));

    let budget_repo = Arc::new(BudgetRepository::new(pool.clone(), writer.clone()));
    let budget_service = Arc::new(BudgetService::new(
        budget_repo,
        spending_repository.clone(),
        goal_service.clone(),
        AllocationRatios::default(),
    )?);

    Ok(Arc::new(AppState {
        budget_service,
        category_service,
        goal_service,
        spending_repository,
        db_path,
    }))
}
