use super::*;

/// Tests looking up a stored player by license.
///
/// Expected: Ok(Some) with the stored projection
#[tokio::test]
async fn finds_existing_player() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_player_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    repo.upsert(&[record("license:abc", Utc::now())]).await?;

    let player = repo.get_by_license("license:abc").await?;

    assert!(player.is_some());
    let player = player.unwrap();
    assert_eq!(player.license, "license:abc");
    assert_eq!(player.cash, 500);
    assert_eq!(player.bank, 5000);
    assert_eq!(player.job_name, "police");
    assert_eq!(player.job_grade, 2);

    Ok(())
}

/// Tests looking up a license that was never synced.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_license() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_player_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_player(db).await.unwrap();

    let player = PlayerRepository::new(db)
        .get_by_license("license:missing")
        .await?;

    assert!(player.is_none());

    Ok(())
}

/// Tests that a lookup against a missing table surfaces as a lookup error.
///
/// Expected: Err(StoreError::Lookup)
#[tokio::test]
async fn fails_without_table() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlayerRepository::new(db).get_by_license("license:abc").await;

    assert!(matches!(result, Err(StoreError::Lookup(_))));
}
