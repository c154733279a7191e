use cpu_scheduling_sim::{
    scheduler::report, FcfsScheduler, Process, RoundRobinScheduler, Scheduler, SchedulerResult,
    WorkloadGenerator, DEFAULT_QUANTUM,
};
use crossterm::{
    execute,
    style::Stylize,
    terminal::{Clear, ClearType},
};
use std::{env, error::Error, io};

const DEFAULT_SEED: u64 = 42;
const BATCH_SIZES: [usize; 2] = [5, 10];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    execute!(io::stdout(), Clear(ClearType::All))?;

    let seed = env::args()
        .nth(1)
        .and_then(|argument| argument.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    println!(
        "{}",
        format!("CPU scheduling simulation (workload seed {seed})").bold()
    );

    let mut generator = WorkloadGenerator::seeded(seed);
    for count in BATCH_SIZES {
        println!();
        println!(
            "{}",
            format!("===== Test case: {count} processes =====").bold()
        );
        let batch = generator.batch(count);
        run_policy::<FcfsScheduler>(batch.clone())?;
        run_policy::<RoundRobinScheduler>(batch)?;
    }
    Ok(())
}

fn run_policy<S: Scheduler>(batch: Vec<Process>) -> SchedulerResult<()> {
    let mut scheduler = S::with_processes(batch, DEFAULT_QUANTUM)?;
    scheduler.schedule()?;
    println!();
    print!("{}", report::render(&scheduler)?);
    Ok(())
}
