//! Demo command
//!
//! Usage: roster demo

use clap::Args;
use roster_core::{demo, log_op_end, log_op_error, log_op_start};

#[derive(Debug, Args)]
pub struct DemoArgs {
    /// Print only the final state instead of every step
    #[arg(long)]
    pub final_only: bool,
}

/// Execute demo command
pub fn execute(args: DemoArgs) -> Result<(), Box<dyn std::error::Error>> {
    log_op_start!("demo_run");
    let start = std::time::Instant::now();

    let steps = demo::run().map_err(|e| {
        log_op_error!(
            "demo_run",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    log_op_end!(
        "demo_run",
        duration_ms = start.elapsed().as_millis() as u64,
        steps = steps.len()
    );

    let shown = if args.final_only {
        steps.len().saturating_sub(1)
    } else {
        0
    };
    let rendered: Vec<String> = steps[shown..].iter().map(ToString::to_string).collect();
    print!("{}", rendered.join("\n"));

    Ok(())
}
