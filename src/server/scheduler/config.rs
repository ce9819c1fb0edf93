pub mod payment {
    /// Cron expression for expiring abandoned payments
    /// Runs every 30 minutes on the hour and half hour
    pub const CRON_EXPRESSION: &str = "0 */30 * * * *";
}
