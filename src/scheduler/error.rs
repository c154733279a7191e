use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerError {
    InvalidQuantum { quantum: u64 },
    ZeroBurst { id: u32 },
    DuplicateId { id: u32 },
    EmptyBatch,
    NotYetScheduled,
    AlreadyScheduled,
}

pub type SchedulerResult<T> = Result<T, SchedulerError>;

impl fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchedulerError::InvalidQuantum { quantum } => {
                write!(f, "invalid quantum {quantum}, must be at least 1")
            }
            SchedulerError::ZeroBurst { id } => {
                write!(f, "process {id} has a zero burst time")
            }
            SchedulerError::DuplicateId { id } => {
                write!(f, "process id {id} appears more than once in the batch")
            }
            SchedulerError::EmptyBatch => write!(f, "cannot average over an empty batch"),
            SchedulerError::NotYetScheduled => write!(f, "the batch has not been scheduled yet"),
            SchedulerError::AlreadyScheduled => write!(f, "the scheduler has already run its batch"),
        }
    }
}

impl Error for SchedulerError {}
