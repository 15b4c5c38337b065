use super::{daily_counter::DailyCounter, event::EventLog, policy::QuittingPolicy, ui_state::UiState};

/// Everything the tracker knows, owned by a single `Session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerState {
    pub log: EventLog,
    pub counter: DailyCounter,
    pub policy: QuittingPolicy,
    pub ui: UiState,
}
