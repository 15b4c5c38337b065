pub mod daily_counter;
pub mod event;
pub mod policy;
pub mod state;
pub mod ui_state;
