use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::player_sync, state::AppState};

/// Starts the player sync scheduler
///
/// Runs a full player sync on the given cron schedule. Scheduled runs share the sync
/// guard with the HTTP endpoint, so a run that would overlap another is skipped.
///
/// # Arguments
/// - `state`: Application state holding the database, game server credentials and guard
/// - `cron`: Six-field cron expression, e.g. `0 0 */4 * * *`
pub async fn start_scheduler(state: AppState, cron: &str) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(cron, move |_uuid, _lock| {
        let state = state.clone();

        Box::pin(async move {
            run_scheduled_sync(&state).await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Player sync scheduler started ({})", cron);

    Ok(())
}

async fn run_scheduled_sync(state: &AppState) {
    match player_sync::run_exclusive(state).await {
        Ok(result) if result.success => {
            tracing::info!(
                "Scheduled player sync synced {} of {} players",
                result.synced_players,
                result.total_rows
            );
        }
        Ok(result) => {
            tracing::error!("Scheduled player sync failed: {}", result.errors.join("; "));
        }
        Err(AppError::Conflict(_)) => {
            tracing::info!("Skipping scheduled player sync, a sync is already running");
        }
        Err(e) => {
            tracing::error!("Error running scheduled player sync: {}", e);
        }
    }
}
