use super::{Process, SchedulerError, SchedulerResult};

pub fn average_wait_time(processes: &[Process]) -> SchedulerResult<f64> {
    average(processes, Process::wait_time)
}

pub fn average_turnaround_time(processes: &[Process]) -> SchedulerResult<f64> {
    average(processes, Process::turnaround_time)
}

// Guards before dividing: an empty batch has no mean, and a missing wait
// means the batch has not been scheduled.
fn average(
    processes: &[Process],
    value: impl Fn(&Process) -> Option<i64>,
) -> SchedulerResult<f64> {
    if processes.is_empty() {
        return Err(SchedulerError::EmptyBatch);
    }
    let mut total: i64 = 0;
    for process in processes {
        total += value(process).ok_or(SchedulerError::NotYetScheduled)?;
    }
    Ok(total as f64 / processes.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{FcfsScheduler, Scheduler};

    #[test]
    fn empty_batch_has_no_mean() {
        assert_eq!(average_wait_time(&[]), Err(SchedulerError::EmptyBatch));
        assert_eq!(
            average_turnaround_time(&[]),
            Err(SchedulerError::EmptyBatch)
        );
    }

    #[test]
    fn unscheduled_batch_is_rejected() {
        let batch = [Process::new(1, 3, 0), Process::new(2, 2, 0)];
        assert_eq!(
            average_wait_time(&batch),
            Err(SchedulerError::NotYetScheduled)
        );
    }

    #[test]
    fn means_over_a_completed_batch() {
        let mut scheduler = FcfsScheduler::with_processes(
            vec![Process::new(1, 2, 0), Process::new(2, 2, 0)],
            1,
        )
        .unwrap();
        scheduler.schedule().unwrap();
        // Waits 0 and 2; turnarounds 2 and 4.
        assert_eq!(average_wait_time(scheduler.processes()), Ok(1.0));
        assert_eq!(average_turnaround_time(scheduler.processes()), Ok(3.0));
    }
}
