mod error;
mod fcfs;
mod metrics;
mod process;
pub mod report;
mod round_robin;
mod workload;

pub use error::{SchedulerError, SchedulerResult};
pub use fcfs::{FcfsScheduler, WaitAccounting, DEFAULT_ACCOUNTING};
pub use process::Process;
pub use round_robin::RoundRobinScheduler;
pub use workload::WorkloadGenerator;

pub const DEFAULT_QUANTUM: u64 = 2;

// One contiguous stretch of CPU given to a process; the ordered slices of a
// run form the scheduler's execution timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slice {
    pub id: u32,
    pub start: u64,
    pub end: u64,
}

pub trait Scheduler {
    const NAME: &'static str;

    fn with_processes(processes: Vec<Process>, quantum: u64) -> SchedulerResult<Self>
    where
        Self: Sized;
    fn processes(&self) -> &[Process];
    fn timeline(&self) -> &[Slice];
    fn has_run(&self) -> bool;
    // Runs the whole simulation; a scheduler instance runs its batch at most
    // once, a second call returns AlreadyScheduled.
    fn schedule(&mut self) -> SchedulerResult<()>;

    fn average_wait_time(&self) -> SchedulerResult<f64> {
        metrics::average_wait_time(self.processes())
    }

    fn average_turnaround_time(&self) -> SchedulerResult<f64> {
        metrics::average_turnaround_time(self.processes())
    }
}

// Batch validation shared by every policy constructor: no zero bursts (a
// zero-burst process would never complete under Round Robin), no duplicate
// ids, and every process normalized back to its pre-run state.
pub(crate) fn prepare_batch(processes: &mut [Process]) -> SchedulerResult<()> {
    for process in processes.iter() {
        if process.burst_time() == 0 {
            return Err(SchedulerError::ZeroBurst { id: process.id() });
        }
    }
    let mut seen = Vec::with_capacity(processes.len());
    for process in processes.iter() {
        if seen.contains(&process.id()) {
            return Err(SchedulerError::DuplicateId { id: process.id() });
        }
        seen.push(process.id());
    }
    for process in processes.iter_mut() {
        process.reset();
    }
    Ok(())
}
