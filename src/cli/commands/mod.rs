pub mod clear;
pub mod config;
pub mod history;
pub mod init;
pub mod light;
pub mod log;
pub mod quit;
pub mod reset;
pub mod status;
pub mod ui;
pub mod watch;

use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::core::session::Session;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database and load the tracker state as of now.
pub(crate) fn open_session(cfg: &Config) -> AppResult<Session> {
    let pool = DbPool::new(&cfg.database)?;
    Session::open(pool, cfg, SystemClock.now())
}
