use super::*;

/// Tests listing schedule entries within a time window.
///
/// Verifies that the window includes its start, excludes its end, and results are
/// ordered by start time.
///
/// Expected: Ok with entries starting inside `[from, to)`
#[tokio::test]
async fn filters_by_window() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    let from = Utc::now() + Duration::days(1);
    let to = from + Duration::days(1);

    let late = ScheduleFactory::new(db, author.id)
        .starts_at(from + Duration::hours(6))
        .build()
        .await?;
    let at_start = ScheduleFactory::new(db, author.id)
        .starts_at(from)
        .build()
        .await?;
    ScheduleFactory::new(db, author.id).starts_at(to).build().await?;
    ScheduleFactory::new(db, author.id)
        .starts_at(from - Duration::hours(1))
        .build()
        .await?;

    let repo = ScheduleRepository::new(db);
    let (entries, total) = repo
        .get_paginated(
            &ScheduleFilter {
                department_id: None,
                from: Some(from),
                to: Some(to),
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 2);
    let ids: Vec<i32> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![at_start.id, late.id]);

    Ok(())
}

/// Tests listing schedule entries of one department.
///
/// Expected: Ok with that department's entries only
#[tokio::test]
async fn filters_by_department() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (department, author) = factory::helpers::create_department_with_member(db, &[]).await?;
    let own = ScheduleFactory::new(db, author.id)
        .department_id(department.id)
        .build()
        .await?;
    factory::create_schedule(db, author.id).await?;

    let repo = ScheduleRepository::new(db);
    let (entries, total) = repo
        .get_paginated(
            &ScheduleFilter {
                department_id: Some(department.id),
                ..Default::default()
            },
            0,
            10,
        )
        .await?;

    assert_eq!(total, 1);
    assert_eq!(entries[0].id, own.id);

    Ok(())
}
