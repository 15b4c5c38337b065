//! Unified application error type.
//! The policy core never fails; everything that can (storage, config, CLI
//! argument parsing) returns AppError so handling stays in one place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid position: {0} (expected X,Y)")]
    InvalidPosition(String),

    #[error("Invalid viewport: {0} (expected WIDTHxHEIGHT)")]
    InvalidViewport(String),

    // ---------------------------
    // Policy refusals
    // ---------------------------
    #[error("Not allowed yet: wait {0} more")]
    NotAllowedYet(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
