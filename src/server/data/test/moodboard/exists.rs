use super::*;

/// Tests existence checks for present and missing moodboards.
///
/// Expected: Ok(true) for an existing moodboard, Ok(false) otherwise
#[tokio::test]
async fn reports_existence() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moodboard_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let moodboard = factory::create_moodboard(db).await?;

    let repo = MoodboardRepository::new(db);

    assert!(repo.exists(moodboard.id).await?);
    assert!(!repo.exists(moodboard.id + 1).await?);

    Ok(())
}
