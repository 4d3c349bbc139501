pub mod commodity {
    /// Cron expression for commodity synchronisation
    /// Runs every 6 hours at the top of the hour (00:00, 06:00, 12:00, 18:00)
    pub const CRON_EXPRESSION: &str = "0 0 */6 * * *";
}

pub mod star_system {
    /// Cron expression for star system synchronisation
    /// Runs once a year, at noon on January 1st
    pub const CRON_EXPRESSION: &str = "0 0 12 1 1 *";
}
