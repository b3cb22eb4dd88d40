use supercomputer_workloads::{Profile, run_to_stdout};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    run_to_stdout(Profile::full())?;
    Ok(())
}
