use super::{Scheduler, SchedulerError, SchedulerResult};

// Renders a completed run as plain text: policy header, per-process table in
// batch order, then the two batch averages to two decimals.
pub fn render<S: Scheduler>(scheduler: &S) -> SchedulerResult<String> {
    let average_wait = scheduler.average_wait_time()?;
    let average_turnaround = scheduler.average_turnaround_time()?;

    let mut report = String::new();
    report.push_str(&format!("--- {} ---\n", S::NAME));
    report.push_str(&format!(
        "{:>4} | {:>5} | {:>7} | {:>5} | {:>10}\n",
        "ID", "Burst", "Arrival", "Wait", "Turnaround"
    ));
    for process in scheduler.processes() {
        let wait = process.wait_time().ok_or(SchedulerError::NotYetScheduled)?;
        let turnaround = process
            .turnaround_time()
            .ok_or(SchedulerError::NotYetScheduled)?;
        report.push_str(&format!(
            "{:>4} | {:>5} | {:>7} | {:>5} | {:>10}\n",
            process.id(),
            process.burst_time(),
            process.arrival_time(),
            wait,
            turnaround
        ));
    }
    report.push_str(&format!("Average wait time: {average_wait:.2}\n"));
    report.push_str(&format!("Average turnaround time: {average_turnaround:.2}\n"));

    Ok(report)
}
