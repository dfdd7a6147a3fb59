//! Unified application error type.
//! Both the data layer and the window setup return AppError so main has a
//! single failure path to report.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Display error: {0}")]
    Gui(#[from] eframe::Error),
}

pub type AppResult<T> = Result<T, AppError>;
