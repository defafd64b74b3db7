use super::*;

/// Tests inserting a batch of new players.
///
/// Verifies that every record in the batch is stored and counted as succeeded.
///
/// Expected: Ok with one row per record
#[tokio::test]
async fn inserts_new_players() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_player_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let records = vec![record("license:a", now), record("license:b", now)];

    let repo = PlayerRepository::new(db);
    let outcome = repo.upsert(&records).await?;

    assert_eq!(outcome.succeeded, 2);
    assert_eq!(outcome.failed, 0);

    let count = entity::prelude::FivemPlayer::find().count(db).await.unwrap();
    assert_eq!(count, 2);

    Ok(())
}

/// Tests that upserting an existing license replaces the stored row.
///
/// Verifies that a second write with the same license updates the projected fields
/// instead of adding a duplicate row.
///
/// Expected: Ok with a single updated row
#[tokio::test]
async fn replaces_existing_license() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_player_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PlayerRepository::new(db);
    repo.upsert(&[record("license:a", Utc::now())]).await?;

    let mut updated = record("license:a", Utc::now());
    updated.cash = 1;
    updated.name = "Renamed".to_string();
    repo.upsert(&[updated]).await?;

    let stored = entity::prelude::FivemPlayer::find()
        .filter(entity::fivem_player::Column::License.eq("license:a"))
        .all(db)
        .await
        .unwrap();

    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].cash, 1);
    assert_eq!(stored[0].name, "Renamed");

    Ok(())
}

/// Tests that repeating the same batch is idempotent.
///
/// Expected: Ok with the row count unchanged after the second call
#[tokio::test]
async fn repeated_batch_is_idempotent() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_player_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let records: Vec<_> = (0..5).map(|i| record(&format!("license:{}", i), now)).collect();

    let repo = PlayerRepository::new(db);
    let first = repo.upsert(&records).await?;
    let second = repo.upsert(&records).await?;

    assert_eq!(first, second);

    let count = entity::prelude::FivemPlayer::find().count(db).await.unwrap();
    assert_eq!(count, 5);

    Ok(())
}

/// Tests that an empty batch does not touch the store.
///
/// Expected: Ok with zero counts
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), StoreError> {
    let test = TestBuilder::new()
        .with_player_store_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = PlayerRepository::new(db).upsert(&[]).await?;

    assert_eq!(outcome.succeeded, 0);
    assert_eq!(outcome.failed, 0);

    Ok(())
}

/// Tests that a missing table is reported as a batch upsert failure.
///
/// Expected: Err(StoreError::Upsert) carrying the batch size
#[tokio::test]
async fn fails_without_table() {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PlayerRepository::new(db)
        .upsert(&[record("license:a", Utc::now())])
        .await;

    assert!(matches!(result, Err(StoreError::Upsert { records: 1, .. })));
}
