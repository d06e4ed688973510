use crate::config::SessionConfig;
use crate::session::Session;
use crate::utils::add_numbers;
use anyhow::{Context, Result};
use std::io::Write;

/// Packaged job: add two numbers and report the result.
pub fn run_sample_job<W: Write>(out: &mut W) -> Result<()> {
    let result = add_numbers(2, 3);
    writeln!(out, "Job ran successfully, 2 + 3 = {result}").context("failed to write result")?;
    Ok(())
}

/// Demo script: show `range(10)` from the process-wide session, configured
/// through [`SessionConfig::from_env`].
pub fn run_demo_script<W: Write>(out: &mut W) -> Result<()> {
    let cfg = SessionConfig::from_env().context("failed to resolve session config")?;
    run_demo_script_with(out, &cfg)
}

/// Demo script body with an explicit session config.
pub fn run_demo_script_with<W: Write>(out: &mut W, cfg: &SessionConfig) -> Result<()> {
    let spark = Session::builder()
        .with_config(cfg)
        .get_or_create()
        .context("failed to get or create session")?;

    let df = spark.range(10).context("failed to materialize range")?;

    let cfg = spark.config();
    writeln!(out, "=== Demo: spark.range(10) ===")?;
    df.write_show(out, cfg.show_rows, cfg.truncate)?;

    writeln!(out, "Demo script completed successfully.")?;
    Ok(())
}
