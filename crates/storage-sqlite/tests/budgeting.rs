//! Integration tests against a real SQLite database.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tempfile::TempDir;
use uuid::Uuid;

use budgetwise_core::budgets::{
    AllocationRatios, Budget, BudgetRepositoryTrait, BudgetService, BudgetServiceTrait,
};
use budgetwise_core::categories::{NewCategory, PriorityType};
use budgetwise_core::errors::{DatabaseError, Error};
use budgetwise_core::goals::{GoalService, GoalServiceTrait, NewGoal};
use budgetwise_core::spending::{ReportingPeriod, SpendRecord, SpendingRepositoryTrait};
use budgetwise_storage_sqlite::budgets::BudgetRepository;
use budgetwise_storage_sqlite::categories::CategoryRepository;
use budgetwise_storage_sqlite::goals::GoalRepository;
use budgetwise_storage_sqlite::spending::SpendingRepository;
use budgetwise_storage_sqlite::{create_pool, run_migrations, spawn_writer, DbPool, WriteHandle};

use budgetwise_core::categories::CategoryRepositoryTrait;

struct TestDb {
    pool: Arc<DbPool>,
    writer: WriteHandle,
    // Held so the database file outlives the test body.
    _tmp: TempDir,
}

fn test_db() -> TestDb {
    let tmp = TempDir::new().unwrap();
    let db_path = tmp.path().join("test.db");
    let pool = Arc::new(create_pool(db_path.to_str().unwrap()).unwrap());
    run_migrations(&pool).unwrap();
    let writer = spawn_writer((*pool).clone());
    TestDb {
        pool,
        writer,
        _tmp: tmp,
    }
}

fn user_id() -> String {
    Uuid::new_v4().to_string()
}

fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

fn budget(user_id: &str, total_income: Decimal, month_year: Option<&str>) -> Budget {
    Budget {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        budget_name: "Monthly".to_string(),
        total_income,
        needs_budget: total_income * dec!(0.5),
        wants_budget: total_income * dec!(0.3),
        savings_budget: total_income * dec!(0.2),
        month_year: month_year.map(str::to_string),
        created_at: at(2026, 8, 1),
        updated_at: at(2026, 8, 1),
    }
}

async fn seed_category(db: &TestDb, name: &str, priority: PriorityType) -> String {
    let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());
    repo.create(NewCategory {
        category_name: name.to_string(),
        priority_type: priority,
    })
    .await
    .unwrap()
    .id
}

async fn seed_spend(
    db: &TestDb,
    user_id: &str,
    category_id: &str,
    amount: Decimal,
    created_at: NaiveDateTime,
) {
    let repo = SpendingRepository::new(db.pool.clone(), db.writer.clone());
    repo.insert(SpendRecord {
        id: Uuid::new_v4().to_string(),
        user_id: user_id.to_string(),
        category_id: category_id.to_string(),
        amount,
        created_at,
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn replace_for_user_keeps_exactly_one_budget() {
    let db = test_db();
    let repo = BudgetRepository::new(db.pool.clone(), db.writer.clone());
    let user = user_id();
    let other = user_id();

    repo.replace_for_user(budget(&user, dec!(1000), Some("2026-08")))
        .await
        .unwrap();
    repo.replace_for_user(budget(&other, dec!(750), Some("2026-08")))
        .await
        .unwrap();
    repo.replace_for_user(budget(&user, dec!(2500), Some("2026-08")))
        .await
        .unwrap();

    let stored = repo.get_by_user(&user).unwrap().unwrap();
    assert_eq!(stored.total_income, dec!(2500));
    assert_eq!(stored.needs_budget, dec!(1250.0));

    // The other user's budget is untouched.
    let other_stored = repo.get_by_user(&other).unwrap().unwrap();
    assert_eq!(other_stored.total_income, dec!(750));
}

#[tokio::test]
async fn delete_for_user_reports_deleted_count() {
    let db = test_db();
    let repo = BudgetRepository::new(db.pool.clone(), db.writer.clone());
    let user = user_id();

    assert_eq!(repo.delete_for_user(&user).await.unwrap(), 0);

    repo.replace_for_user(budget(&user, dec!(1000), None))
        .await
        .unwrap();
    assert_eq!(repo.delete_for_user(&user).await.unwrap(), 1);
    assert!(repo.get_by_user(&user).unwrap().is_none());
}

#[tokio::test]
async fn missing_category_maps_to_not_found() {
    let db = test_db();
    let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());
    let result = repo.get_by_id(&Uuid::new_v4().to_string());
    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::NotFound(_)))
    ));
}

#[tokio::test]
async fn duplicate_category_name_maps_to_unique_violation() {
    let db = test_db();
    let repo = CategoryRepository::new(db.pool.clone(), db.writer.clone());
    repo.create(NewCategory {
        category_name: "Groceries".to_string(),
        priority_type: PriorityType::Need,
    })
    .await
    .unwrap();

    let result = repo
        .create(NewCategory {
            category_name: "Groceries".to_string(),
            priority_type: PriorityType::Want,
        })
        .await;
    assert!(matches!(
        result,
        Err(Error::Database(DatabaseError::UniqueViolation(_)))
    ));
}

#[tokio::test]
async fn sum_by_priority_joins_and_buckets() {
    let db = test_db();
    let user = user_id();
    let stranger = user_id();

    let groceries = seed_category(&db, "Groceries", PriorityType::Need).await;
    let dining = seed_category(&db, "Dining out", PriorityType::Want).await;
    let emergency = seed_category(&db, "Emergency fund", PriorityType::Saving).await;

    seed_spend(&db, &user, &groceries, dec!(120.50), at(2026, 8, 3)).await;
    seed_spend(&db, &user, &groceries, dec!(79.50), at(2026, 8, 20)).await;
    seed_spend(&db, &user, &dining, dec!(45), at(2026, 8, 10)).await;
    // saving-classified spend stays out of both buckets
    seed_spend(&db, &user, &emergency, dec!(500), at(2026, 8, 11)).await;
    // other users are invisible
    seed_spend(&db, &stranger, &groceries, dec!(999), at(2026, 8, 12)).await;
    // outside the August window
    seed_spend(&db, &user, &dining, dec!(999), at(2026, 7, 31)).await;
    seed_spend(&db, &user, &groceries, dec!(999), at(2026, 9, 1)).await;

    let repo = SpendingRepository::new(db.pool.clone(), db.writer.clone());
    let period = ReportingPeriod::from_month_year("2026-08").unwrap();
    let totals = repo.sum_by_priority(&user, Some(&period)).await.unwrap();
    assert_eq!(totals.needs_spent, dec!(200.00));
    assert_eq!(totals.wants_spent, dec!(45));

    // Without a period, everything the user ever spent counts.
    let all_time = repo.sum_by_priority(&user, None).await.unwrap();
    assert_eq!(all_time.needs_spent, dec!(1199.00));
    assert_eq!(all_time.wants_spent, dec!(1044));
}

#[tokio::test]
async fn goal_service_sums_accumulated_over_real_store() {
    let db = test_db();
    let user = user_id();
    let service = GoalService::new(Arc::new(GoalRepository::new(
        db.pool.clone(),
        db.writer.clone(),
    )));

    assert_eq!(service.total_accumulated(&user).unwrap(), Decimal::ZERO);

    service
        .create_goal(
            &user,
            NewGoal {
                name: "Vacation".to_string(),
                required_amount: dec!(3000),
                accumulated_amount: dec!(150.25),
            },
        )
        .await
        .unwrap();
    let second = service
        .create_goal(
            &user,
            NewGoal {
                name: "Laptop".to_string(),
                required_amount: dec!(2000),
                accumulated_amount: dec!(0),
            },
        )
        .await
        .unwrap();
    service
        .update_accumulated(&user, &second.id, dec!(49.75))
        .await
        .unwrap();

    assert_eq!(service.total_accumulated(&user).unwrap(), dec!(200.00));
}

#[tokio::test]
async fn budget_summary_end_to_end() {
    let db = test_db();
    let user = user_id();

    let groceries = seed_category(&db, "Groceries", PriorityType::Need).await;
    let dining = seed_category(&db, "Dining out", PriorityType::Want).await;
    seed_spend(&db, &user, &groceries, dec!(600), at(2026, 8, 5)).await;
    seed_spend(&db, &user, &dining, dec!(150), at(2026, 8, 9)).await;

    let budget_repo = Arc::new(BudgetRepository::new(db.pool.clone(), db.writer.clone()));
    let spending_repo = Arc::new(SpendingRepository::new(db.pool.clone(), db.writer.clone()));
    let goal_service = Arc::new(GoalService::new(Arc::new(GoalRepository::new(
        db.pool.clone(),
        db.writer.clone(),
    ))));
    goal_service
        .create_goal(
            &user,
            NewGoal {
                name: "Emergency fund".to_string(),
                required_amount: dec!(1000),
                accumulated_amount: dec!(50),
            },
        )
        .await
        .unwrap();

    let service = BudgetService::new(
        budget_repo.clone(),
        spending_repo,
        goal_service,
        AllocationRatios::default(),
    )
    .unwrap();

    // Pin the reporting period by seeding the budget row directly.
    budget_repo
        .replace_for_user(budget(&user, dec!(1000), Some("2026-08")))
        .await
        .unwrap();

    let summary = service
        .get_budget_summary(&user)
        .await
        .unwrap()
        .expect("budget exists");
    assert_eq!(summary.metrics.needs_spent_amount, dec!(600));
    assert_eq!(summary.metrics.needs_spent_percent, dec!(100));
    assert!(summary.metrics.is_needs_over_available_balance);
    assert_eq!(summary.metrics.wants_spent_percent, dec!(50.00));
    assert!(!summary.metrics.is_wants_over_available_balance);
    assert_eq!(summary.metrics.savings_amount, dec!(50));
    assert_eq!(summary.metrics.savings_percentage, dec!(25.00));
    assert!(!summary.metrics.is_total_income_exceeded);

    // And the no-budget read is an explicit empty, not an error.
    let nobody = user_id();
    assert!(service.get_budget_summary(&nobody).await.unwrap().is_none());
}
