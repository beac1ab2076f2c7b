use super::*;

/// Tests approving a plan.
///
/// Verifies that approval records the approver and timestamp.
///
/// Expected: Ok with status APPROVED and approver set
#[tokio::test]
async fn records_approver() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    let commander = factory::create_user_with_roles(db, department.id, &["COMMANDER"]).await?;
    let plan = factory::create_work_plan(db, department.id, author.id).await?;

    let repo = WorkPlanRepository::new(db);
    let approved = repo
        .set_status(
            plan.id,
            WorkPlanStatus::Draft,
            WorkPlanStatus::Approved,
            Some(commander.id),
        )
        .await?
        .unwrap();

    assert_eq!(approved.status, WorkPlanStatus::Approved);
    assert_eq!(approved.approved_by, Some(commander.id));
    assert!(approved.approved_at.is_some());

    Ok(())
}

/// Tests advancing a plan without an approver.
///
/// Verifies that earlier approval data is kept.
///
/// Expected: Ok with status IN_PROGRESS
#[tokio::test]
async fn keeps_existing_approval() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    let plan = WorkPlanFactory::new(db, department.id, author.id)
        .status("DRAFT")
        .build()
        .await?;

    let repo = WorkPlanRepository::new(db);
    repo.set_status(
        plan.id,
        WorkPlanStatus::Draft,
        WorkPlanStatus::Approved,
        Some(author.id),
    )
    .await?;
    let started = repo
        .set_status(plan.id, WorkPlanStatus::Approved, WorkPlanStatus::InProgress, None)
        .await?
        .unwrap();

    assert_eq!(started.status, WorkPlanStatus::InProgress);
    assert_eq!(started.approved_by, Some(author.id));

    Ok(())
}

/// Tests a status change whose expected current status is stale.
///
/// Expected: Ok(None) and the plan left as it was
#[tokio::test]
async fn skips_stale_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    let plan = WorkPlanFactory::new(db, department.id, author.id)
        .status("APPROVED")
        .build()
        .await?;

    let repo = WorkPlanRepository::new(db);
    let result = repo
        .set_status(plan.id, WorkPlanStatus::Draft, WorkPlanStatus::Approved, Some(author.id))
        .await?;
    assert!(result.is_none());

    let stored = repo.get_by_id(plan.id).await?.unwrap();
    assert_eq!(stored.status, WorkPlanStatus::Approved);
    assert_eq!(stored.approved_by, None);

    Ok(())
}
