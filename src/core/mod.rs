pub mod clock;
pub mod daily_counter;
pub mod event_log;
pub mod quitting;
pub mod session;
