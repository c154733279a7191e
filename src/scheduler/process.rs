#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    id: u32,
    burst_time: u64,
    arrival_time: u64,
    remaining_time: u64,
    wait_time: Option<i64>,
}

impl Process {
    pub fn new(id: u32, burst_time: u64, arrival_time: u64) -> Self {
        Self {
            id,
            burst_time,
            arrival_time,
            remaining_time: burst_time,
            wait_time: None,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn burst_time(&self) -> u64 {
        self.burst_time
    }

    pub fn arrival_time(&self) -> u64 {
        self.arrival_time
    }

    pub fn remaining_time(&self) -> u64 {
        self.remaining_time
    }

    // None until the process has completed a run.
    pub fn wait_time(&self) -> Option<i64> {
        self.wait_time
    }

    // Derived on demand, never stored: turnaround = wait + burst.
    pub fn turnaround_time(&self) -> Option<i64> {
        self.wait_time.map(|wait| wait + self.burst_time as i64)
    }

    pub(crate) fn execute(&mut self, time: u64) {
        debug_assert!(time <= self.remaining_time);
        self.remaining_time -= time;
    }

    pub(crate) fn record_wait(&mut self, wait: i64) {
        self.wait_time = Some(wait);
    }

    pub(crate) fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.wait_time = None;
    }
}
