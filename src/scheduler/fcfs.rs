use super::{prepare_batch, Process, Scheduler, SchedulerError, SchedulerResult, Slice};
use log::{debug, trace};

// How the recorded wait time is computed when a process completes.
// `Legacy` reproduces the original simulator, which recorded
// `completion - arrival` as the wait time; that quantity is algebraically the
// turnaround time, so it is kept only as a documented deviation and is never
// the default. `Textbook` is `completion - arrival - burst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitAccounting {
    Textbook,
    Legacy,
}

pub const DEFAULT_ACCOUNTING: WaitAccounting = WaitAccounting::Textbook;

pub struct FcfsScheduler {
    processes: Vec<Process>,
    timeline: Vec<Slice>,
    accounting: WaitAccounting,
    has_run: bool,
}

impl FcfsScheduler {
    pub fn with_accounting(
        mut processes: Vec<Process>,
        _quantum: u64,
        accounting: WaitAccounting,
    ) -> SchedulerResult<Self> {
        prepare_batch(&mut processes)?;
        Ok(Self {
            processes,
            timeline: Vec::new(),
            accounting,
            has_run: false,
        })
    }

    pub fn accounting(&self) -> WaitAccounting {
        self.accounting
    }
}

impl Scheduler for FcfsScheduler {
    const NAME: &'static str = "First-Come-First-Served Scheduler";

    fn with_processes(processes: Vec<Process>, quantum: u64) -> SchedulerResult<Self> {
        FcfsScheduler::with_accounting(processes, quantum, DEFAULT_ACCOUNTING)
    }

    fn processes(&self) -> &[Process] {
        &self.processes
    }

    fn timeline(&self) -> &[Slice] {
        &self.timeline
    }

    fn has_run(&self) -> bool {
        self.has_run
    }

    // Non-preemptive: run each process to completion in ascending arrival
    // order (stable, so ties keep the batch order). The clock accumulates
    // burst times back-to-back and is never advanced to meet a future
    // arrival, matching the reference simulator.
    fn schedule(&mut self) -> SchedulerResult<()> {
        if self.has_run {
            return Err(SchedulerError::AlreadyScheduled);
        }
        debug!("{}: scheduling {} processes", Self::NAME, self.processes.len());

        self.processes.sort_by_key(|process| process.arrival_time());

        let mut time: u64 = 0;
        for process in &mut self.processes {
            let start = time;
            let burst = process.burst_time();
            time += burst;
            process.execute(burst);

            let wait = match self.accounting {
                WaitAccounting::Textbook => {
                    time as i64 - process.arrival_time() as i64 - burst as i64
                }
                WaitAccounting::Legacy => time as i64 - process.arrival_time() as i64,
            };
            process.record_wait(wait);

            self.timeline.push(Slice {
                id: process.id(),
                start,
                end: time,
            });
            trace!(
                "{}: process {} ran {start}..{time}, wait {wait}",
                Self::NAME,
                process.id()
            );
        }

        self.has_run = true;
        debug!("{}: batch complete at time {time}", Self::NAME);
        Ok(())
    }
}
