//! Scheduler for periodic maintenance tasks.
//!
//! This module provides a cron-based job scheduler. It currently runs one job: failing
//! payments that were left pending after the Midtrans Snap session expired, so abandoned
//! checkouts do not stay pending forever.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::error::Error;

pub mod config;
pub mod payment;

use self::config::payment as payment_config;
use self::payment::expire_pending_transactions;

/// Job scheduler for background maintenance tasks.
pub struct Scheduler {
    db: DatabaseConnection,
    payment_client: payment_gateway::Client,
    sched: JobScheduler,
}

impl Scheduler {
    /// Creates a new instance of [`Scheduler`].
    ///
    /// # Returns
    /// - `Ok(Scheduler)` - Successfully created scheduler instance
    /// - `Err(Error)` - Failed to initialize the underlying job scheduler
    pub async fn new(
        db: DatabaseConnection,
        payment_client: payment_gateway::Client,
    ) -> Result<Self, Error> {
        let sched = JobScheduler::new().await?;
        Ok(Self {
            db,
            payment_client,
            sched,
        })
    }

    /// Registers all scheduled jobs and starts the scheduler.
    ///
    /// Once started, jobs run according to their cron expressions until the scheduler is
    /// dropped or the process exits.
    ///
    /// # Returns
    /// - `Ok(())` - All jobs successfully registered and scheduler started
    /// - `Err(Error)` - Failed to register a job or start the scheduler
    pub async fn start(mut self) -> Result<(), Error> {
        self.schedule_job(
            payment_config::CRON_EXPRESSION,
            "stale payment",
            expire_pending_transactions,
        )
        .await?;

        self.sched.start().await?;

        Ok(())
    }

    /// Schedules a recurring job with the specified cron expression.
    ///
    /// On execution, the job logs the number of records it changed on success, or the error.
    ///
    /// # Arguments
    /// - `cron` - Cron expression defining when the job should run (e.g., "0 0 * * * *" for hourly)
    /// - `name` - Human-readable name for the job (used in log messages)
    /// - `function` - Async job returning the count of records it changed
    ///
    /// # Returns
    /// - `Ok(())` - Job successfully registered with the scheduler
    /// - `Err(Error)` - Failed to create or add the job (invalid cron expression or scheduler error)
    pub async fn schedule_job<F, Fut>(
        &mut self,
        cron: &str,
        name: &str,
        function: F,
    ) -> Result<(), Error>
    where
        F: Fn(DatabaseConnection, payment_gateway::Client) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<u64, Error>> + Send + 'static,
    {
        let db = self.db.clone();
        let payment_client = self.payment_client.clone();
        let name = name.to_string();
        let function = Arc::new(function);

        self.sched
            .add(Job::new_async(cron, move |_, _| {
                let db = db.clone();
                let payment_client = payment_client.clone();
                let name = name.clone();
                let function = Arc::clone(&function);

                Box::pin(async move {
                    match function(db, payment_client).await {
                        Ok(0) => tracing::debug!("No {} updates needed", name),
                        Ok(count) => tracing::info!("Expired {} {} record(s)", count, name),
                        Err(e) => tracing::error!("Error running {} job: {:?}", name, e),
                    }
                })
            })?)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tokio_cron_scheduler::Job;

    use super::config::payment::CRON_EXPRESSION;

    #[tokio::test]
    async fn payment_cron_expression_is_valid() {
        let job = Job::new_async(CRON_EXPRESSION, |_, _| Box::pin(async {}));

        assert!(job.is_ok());
    }
}
