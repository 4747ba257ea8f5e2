use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("period {0} is not in the timetable")]
    PeriodNotInTable(u8),

    #[error("course name must not be empty")]
    EmptyCourseName,

    #[error("day of week must be 1-7 (Monday=1), got {0}")]
    WeekdayOutOfRange(u8),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid schedule definition: {0}")]
    Schedule(String),
}

pub type Result<T> = std::result::Result<T, Error>;
