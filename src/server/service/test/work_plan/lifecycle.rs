use super::*;

/// Tests a plan advances one step at a time.
///
/// Expected: start refused for a draft, then APPROVED -> IN_PROGRESS -> COMPLETED
#[tokio::test]
async fn advances_step_by_step() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();

    let department = factory::create_department(db).await?;
    let commander = factory::create_user_with_roles(db, department.id, &["COMMANDER"]).await?;
    let plan = factory::create_work_plan(db, department.id, commander.id).await?;
    let commander = UserRepository::new(db).get_by_id(commander.id).await?.unwrap();

    let service = WorkPlanService::new(db, &hub);

    assert!(matches!(
        service.start(plan.id).await,
        Err(AppError::Conflict(_))
    ));

    service.approve(&commander, plan.id).await?;
    let started = service.start(plan.id).await?;
    assert_eq!(started.status, WorkPlanStatus::InProgress);
    assert_eq!(started.approved_by, Some(commander.id));

    let completed = service.complete(plan.id).await?;
    assert_eq!(completed.status, WorkPlanStatus::Completed);

    assert!(matches!(
        service.complete(plan.id).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests editing and deleting are limited to drafts.
///
/// Expected: Err(AppError::Conflict) for an approved plan
#[tokio::test]
async fn freezes_approved_plan() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();

    let department = factory::create_department(db).await?;
    let author = factory::create_user(db, department.id).await?;
    let author = UserRepository::new(db).get_by_id(author.id).await?.unwrap();
    let plan = WorkPlanFactory::new(db, department.id, author.id)
        .status("APPROVED")
        .build()
        .await?;

    let today = Utc::now().date_naive();
    let params = WorkPlanParams {
        department_id: department.id,
        title: "Revised plan".to_string(),
        description: None,
        period_start: today,
        period_end: today + Duration::days(7),
    };

    let service = WorkPlanService::new(db, &hub);

    assert!(matches!(
        service.update(&author, plan.id, params).await,
        Err(AppError::Conflict(_))
    ));
    assert!(matches!(
        service.delete(&author, plan.id).await,
        Err(AppError::Conflict(_))
    ));

    Ok(())
}

/// Tests only the author or an admin may edit or delete a draft plan.
///
/// Expected: Err(AppError::AuthErr) for another user, Ok for the author and an admin
#[tokio::test]
async fn restricts_changes_to_author() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();

    let department = factory::create_department(db).await?;
    let users = UserRepository::new(db);
    let author = factory::create_user(db, department.id).await?;
    let author = users.get_by_id(author.id).await?.unwrap();
    let other = factory::create_user_with_roles(db, department.id, &["COMMANDER"]).await?;
    let other = users.get_by_id(other.id).await?.unwrap();
    let admin = factory::create_user_with_roles(db, department.id, &["ADMIN"]).await?;
    let admin = users.get_by_id(admin.id).await?.unwrap();
    let plan = factory::create_work_plan(db, department.id, author.id).await?;

    let today = Utc::now().date_naive();
    let params = |title: &str| WorkPlanParams {
        department_id: department.id,
        title: title.to_string(),
        description: None,
        period_start: today,
        period_end: today + Duration::days(7),
    };

    let service = WorkPlanService::new(db, &hub);

    assert!(matches!(
        service.update(&other, plan.id, params("Hijacked")).await,
        Err(AppError::AuthErr(_))
    ));
    assert!(matches!(
        service.delete(&other, plan.id).await,
        Err(AppError::AuthErr(_))
    ));

    let updated = service.update(&author, plan.id, params("Revised plan")).await?;
    assert_eq!(updated.title, "Revised plan");

    service.delete(&admin, plan.id).await?;
    assert!(matches!(
        service.get_by_id(plan.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests two approvals of the same draft running at the same time.
///
/// Expected: one Ok, one Err(AppError::Conflict)
#[tokio::test]
async fn approves_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();

    let department = factory::create_department(db).await?;
    let commander = factory::create_user_with_roles(db, department.id, &["COMMANDER"]).await?;
    let commander = UserRepository::new(db).get_by_id(commander.id).await?.unwrap();
    let plan = factory::create_work_plan(db, department.id, commander.id).await?;

    let service = WorkPlanService::new(db, &hub);
    let (first, second) = tokio::join!(
        service.approve(&commander, plan.id),
        service.approve(&commander, plan.id),
    );

    assert!(first.is_ok() != second.is_ok());
    assert!(matches!(first.err().or(second.err()), Some(AppError::Conflict(_))));

    Ok(())
}

/// Tests a plan whose period ends before it starts.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_inverted_period() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let hub = NotificationHub::new();

    let department = factory::create_department(db).await?;
    let author = factory::create_user(db, department.id).await?;
    let author = UserRepository::new(db).get_by_id(author.id).await?.unwrap();

    let today = Utc::now().date_naive();
    let params = WorkPlanParams {
        department_id: department.id,
        title: "Quarterly plan".to_string(),
        description: None,
        period_start: today,
        period_end: today - Duration::days(1),
    };

    let result = WorkPlanService::new(db, &hub).create(&author, params).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}
