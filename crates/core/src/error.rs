use thiserror::Error;

use crate::model::LevelParseError;
use crate::schedule::ScheduleError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Level(#[from] LevelParseError),
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}
