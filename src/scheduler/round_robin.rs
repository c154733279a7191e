use super::{prepare_batch, Process, Scheduler, SchedulerError, SchedulerResult, Slice};
use log::{debug, trace};
use std::collections::VecDeque;

pub struct RoundRobinScheduler {
    processes: Vec<Process>,
    quantum: u64,
    timeline: Vec<Slice>,
    has_run: bool,
}

impl Scheduler for RoundRobinScheduler {
    const NAME: &'static str = "Round Robin Scheduler";

    fn with_processes(mut processes: Vec<Process>, quantum: u64) -> SchedulerResult<Self> {
        if quantum == 0 {
            return Err(SchedulerError::InvalidQuantum { quantum });
        }
        prepare_batch(&mut processes)?;
        Ok(Self {
            processes,
            quantum,
            timeline: Vec::new(),
            has_run: false,
        })
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

    // Preemptive fixed-quantum time-slicing. The ring order is established
    // once by a stable arrival sort and then rotates; completed processes
    // leave the ring permanently. Arrival-aware: when nobody in the ring has
    // arrived yet the clock jumps straight to the next arrival, and a head
    // that has not arrived rotates to the tail until one that has comes up.
    fn schedule(&mut self) -> SchedulerResult<()> {
        if self.has_run {
            return Err(SchedulerError::AlreadyScheduled);
        }
        debug!(
            "{}: scheduling {} processes with quantum {}",
            Self::NAME,
            self.processes.len(),
            self.quantum
        );

        self.processes.sort_by_key(|process| process.arrival_time());
        let mut ring: VecDeque<usize> = (0..self.processes.len()).collect();
        let mut time: u64 = 0;

        while !ring.is_empty() {
            if let Some(earliest) = ring
                .iter()
                .map(|&index| self.processes[index].arrival_time())
                .min()
            {
                if earliest > time {
                    trace!("{}: idle {time}..{earliest}", Self::NAME);
                    time = earliest;
                }
            }
            // Terminates: at least one ring member has arrived by now.
            while let Some(&head) = ring.front() {
                if self.processes[head].arrival_time() <= time {
                    break;
                }
                ring.rotate_left(1);
            }

            let index = match ring.pop_front() {
                Some(index) => index,
                None => break,
            };
            let process = &mut self.processes[index];
            let execution = process.remaining_time().min(self.quantum);
            let start = time;
            time += execution;
            process.execute(execution);
            self.timeline.push(Slice {
                id: process.id(),
                start,
                end: time,
            });
            trace!("{}: process {} ran {start}..{time}", Self::NAME, process.id());

            if process.remaining_time() == 0 {
                let wait =
                    time as i64 - process.arrival_time() as i64 - process.burst_time() as i64;
                process.record_wait(wait);
            } else {
                ring.push_back(index);
            }
        }

        self.has_run = true;
        debug!("{}: batch complete at time {time}", Self::NAME);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::FcfsScheduler;

    fn completed(batch: Vec<Process>, quantum: u64) -> RoundRobinScheduler {
        let mut scheduler = RoundRobinScheduler::with_processes(batch, quantum).unwrap();
        scheduler.schedule().unwrap();
        scheduler
    }

    fn slice(id: u32, start: u64, end: u64) -> Slice {
        Slice { id, start, end }
    }

    #[test]
    fn zero_quantum_is_rejected() {
        assert_eq!(
            RoundRobinScheduler::with_processes(vec![Process::new(1, 1, 0)], 0).err(),
            Some(SchedulerError::InvalidQuantum { quantum: 0 })
        );
    }

    #[test]
    fn two_processes_interleave_by_quantum() {
        let scheduler = completed(vec![Process::new(1, 5, 0), Process::new(2, 3, 0)], 2);
        assert_eq!(
            scheduler.timeline(),
            &[
                slice(1, 0, 2),
                slice(2, 2, 4),
                slice(1, 4, 6),
                slice(2, 6, 7),
                slice(1, 7, 8),
            ]
        );
        assert_eq!(scheduler.processes()[0].wait_time(), Some(3));
        assert_eq!(scheduler.processes()[1].wait_time(), Some(4));
        assert_eq!(scheduler.average_wait_time().unwrap(), 3.5);
        assert_eq!(scheduler.average_turnaround_time().unwrap(), 7.5);
    }

    #[test]
    fn every_process_reaches_exactly_zero() {
        let scheduler = completed(
            vec![
                Process::new(1, 7, 0),
                Process::new(2, 1, 2),
                Process::new(3, 4, 2),
            ],
            3,
        );
        for process in scheduler.processes() {
            assert_eq!(process.remaining_time(), 0);
            assert!(process.wait_time().unwrap() >= 0);
            assert_eq!(
                process.turnaround_time().unwrap(),
                process.wait_time().unwrap() + process.burst_time() as i64
            );
        }
    }

    #[test]
    fn clock_jumps_to_the_next_arrival_when_everyone_is_pending() {
        let scheduler = completed(vec![Process::new(1, 2, 3), Process::new(2, 1, 0)], 2);
        // P2 finishes at 1, then the ring holds only P1 (arrival 3): the
        // clock jumps to 3 instead of busy-waiting.
        assert_eq!(scheduler.timeline(), &[slice(2, 0, 1), slice(1, 3, 5)]);
        assert_eq!(scheduler.processes()[0].wait_time(), Some(0));
        assert_eq!(scheduler.processes()[1].wait_time(), Some(0));
    }

    #[test]
    fn unarrived_head_rotates_to_the_tail() {
        let scheduler = completed(vec![Process::new(1, 4, 0), Process::new(2, 4, 10)], 2);
        assert_eq!(
            scheduler.timeline(),
            &[
                slice(1, 0, 2),
                slice(1, 2, 4),
                slice(2, 10, 12),
                slice(2, 12, 14),
            ]
        );
    }

    #[test]
    fn burst_within_quantum_completes_in_one_turn() {
        let scheduler = completed(vec![Process::new(1, 3, 0), Process::new(2, 2, 0)], 5);
        assert_eq!(scheduler.timeline(), &[slice(1, 0, 3), slice(2, 3, 5)]);
    }

    #[test]
    fn identical_arrivals_keep_the_batch_order() {
        let scheduler = completed(
            vec![
                Process::new(3, 2, 1),
                Process::new(1, 2, 1),
                Process::new(2, 2, 1),
            ],
            2,
        );
        let order: Vec<u32> = scheduler.timeline().iter().map(|slice| slice.id).collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[test]
    fn rotation_is_fair_between_consecutive_turns() {
        let scheduler = completed(
            vec![
                Process::new(1, 6, 0),
                Process::new(2, 6, 0),
                Process::new(3, 6, 0),
            ],
            2,
        );
        let order: Vec<u32> = scheduler.timeline().iter().map(|slice| slice.id).collect();
        // With everyone backlogged the ring stays strictly cyclic, so no
        // process runs twice before every other live process has run once.
        assert_eq!(order, vec![1, 2, 3, 1, 2, 3, 1, 2, 3]);
    }

    #[test]
    fn large_quantum_degenerates_to_fcfs() {
        let batch = vec![
            Process::new(1, 4, 0),
            Process::new(2, 2, 0),
            Process::new(3, 3, 0),
        ];
        let round_robin = completed(batch.clone(), 10);
        let mut fcfs = FcfsScheduler::with_processes(batch, 10).unwrap();
        fcfs.schedule().unwrap();

        for (ours, theirs) in round_robin.processes().iter().zip(fcfs.processes()) {
            assert_eq!(ours.id(), theirs.id());
            assert_eq!(ours.wait_time(), theirs.wait_time());
            assert_eq!(ours.turnaround_time(), theirs.turnaround_time());
        }
        assert_eq!(
            round_robin.average_wait_time().unwrap(),
            fcfs.average_wait_time().unwrap()
        );
        assert_eq!(
            round_robin.average_turnaround_time().unwrap(),
            fcfs.average_turnaround_time().unwrap()
        );
    }

    #[test]
    fn second_schedule_is_rejected() {
        let mut scheduler = completed(vec![Process::new(1, 1, 0)], 1);
        assert_eq!(scheduler.schedule(), Err(SchedulerError::AlreadyScheduled));
    }

    #[test]
    fn empty_batch_schedules_as_a_no_op() {
        let mut scheduler = RoundRobinScheduler::with_processes(Vec::new(), 2).unwrap();
        scheduler.schedule().unwrap();
        assert!(scheduler.timeline().is_empty());
        assert_eq!(scheduler.average_wait_time(), Err(SchedulerError::EmptyBatch));
    }
}
