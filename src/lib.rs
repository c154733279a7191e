//! Batch CPU-scheduling simulation: First-Come-First-Served and Round Robin
//! over a closed batch of processes, reporting per-process wait and
//! turnaround times plus batch averages.

pub mod scheduler;

pub use scheduler::{
    FcfsScheduler, Process, RoundRobinScheduler, Scheduler, SchedulerError, SchedulerResult,
    Slice, WaitAccounting, WorkloadGenerator, DEFAULT_ACCOUNTING, DEFAULT_QUANTUM,
};
