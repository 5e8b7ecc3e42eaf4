//! reftest-debugger - run the headless reftests and inspect failures

use clap::Parser;
use reftest_debugger::commands::Args;
use reftest_debugger::common::logging;
use reftest_debugger::{Result, Runner, RunnerConfig};

#[tokio::main]
async fn main() {
    let args = Args::parse();
    logging::init_cli(args.verbose);

    match run(&args).await {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Run once and map the outcome to the process exit status
async fn run(args: &Args) -> Result<i32> {
    let config = args.load_config()?;
    let exit_on_failure = config.run.exit_code;

    let runner = Runner::new(RunnerConfig::from(&config));
    let outcome = runner.run(&mut std::io::stdout()).await?;

    Ok(if !outcome.passed() && exit_on_failure { 1 } else { 0 })
}
