pub mod logger;
pub mod superseded;

pub use logger::{init_logger, LogContext, TimedOperation};
pub use superseded::{KeyedLatestSlots, LatestSlot, RequestTicket, RequestTracker};
