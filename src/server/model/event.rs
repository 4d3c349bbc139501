//! Events published after outpost records are committed.
//!
//! Derived records are generated by the [`EventWorker`](crate::server::worker::EventWorker)
//! in reaction to these events rather than inline with the write that caused them.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum RecordEvent {
    /// An outpost was created, one stock row per commodity is generated for it.
    OutpostCreated { outpost_id: i32 },

    /// The stock amount of an outpost commodity changed, a change row with the signed
    /// difference is appended.
    OutpostCommodityUpdated {
        outpost_commodity_id: i32,
        commodity_id: i32,
        /// Amount before the update
        previous_amount: f64,
        /// Amount after the update
        amount: f64,
    },
}

impl fmt::Display for RecordEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutpostCreated { outpost_id } => write!(f, "outpost {} created", outpost_id),
            Self::OutpostCommodityUpdated {
                outpost_commodity_id,
                previous_amount,
                amount,
                ..
            } => write!(
                f,
                "outpost commodity {} updated from {} to {}",
                outpost_commodity_id, previous_amount, amount
            ),
        }
    }
}
