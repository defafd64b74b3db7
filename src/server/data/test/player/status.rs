use super::*;

/// Tests the status of an empty store.
///
/// Expected: Ok with zero players and no sync timestamp
#[tokio::test]
async fn empty_store_has_no_sync() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_player_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let status = PlayerRepository::new(db).status().await?;

    assert_eq!(status.total_players, 0);
    assert!(status.last_synced_at.is_none());

    Ok(())
}

/// Tests that status reports the most recent sync timestamp.
///
/// Expected: Ok with the player count and the latest last_synced_at
#[tokio::test]
async fn reports_latest_sync() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_player_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let older = Utc::now() - chrono::Duration::hours(4);
    let newer = Utc::now();

    factory::fivem_player::FivemPlayerFactory::new(db)
        .last_synced_at(older)
        .build()
        .await
        .unwrap();
    factory::fivem_player::FivemPlayerFactory::new(db)
        .last_synced_at(newer)
        .build()
        .await
        .unwrap();

    let status = PlayerRepository::new(db).status().await?;

    assert_eq!(status.total_players, 2);
    assert_eq!(
        status.last_synced_at.map(|t| t.timestamp()),
        Some(newer.timestamp())
    );

    Ok(())
}
