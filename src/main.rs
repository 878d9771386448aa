use std::path::PathBuf;
use std::time::Instant;

use clap::{ArgAction, Parser};
use env_logger::{Builder, Env};
use log::{debug, info, LevelFilter};
use sysinfo::{get_current_pid, ProcessExt, System, SystemExt};

use cwc_centuries::{pipeline, ReportConfig, ReportError, TableStyle};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CenturiesArgs {
    #[arg(short, long, help = "JSON report configuration")]
    config: Option<PathBuf>,
    #[arg(short, long, help = "Centuries CSV (overrides the config file)")]
    input: Option<PathBuf>,
    #[arg(short, long, help = "HTML page to write (overrides the config file)")]
    output: Option<PathBuf>,
    #[arg(short, long, value_enum, help = "Table presentation")]
    table_style: Option<TableStyle>,
    #[arg(short, long, action = ArgAction::Count, help = "Verbose level")]
    verbose: u8,
}

/// Resident memory of this process in bytes, 0 when unavailable.
fn monitor_memory() -> u64 {
    let Ok(pid) = get_current_pid() else {
        return 0;
    };
    let mut system = System::new();
    system.refresh_process(pid);
    system.process(pid).map(|process| process.memory()).unwrap_or(0)
}

#[tokio::main]
async fn main() -> Result<(), ReportError> {
    let cli = CenturiesArgs::parse();

    let log_level = match cli.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let env = Env::new().filter("CWC_LOG");
    Builder::new()
        .filter(Some("cwc_centuries"), log_level)
        .parse_env(env)
        .init();

    debug!("Arguments {:#?}", cli);

    let config = match &cli.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    }
    .with_overrides(cli.input, cli.output, cli.table_style);

    let start_time = Instant::now();
    let start_memory = monitor_memory();

    pipeline::run(&config).await?;

    let end_memory = monitor_memory();
    info!("Time elapsed: {:?}", start_time.elapsed());
    info!("Memory used: {} bytes", end_memory.saturating_sub(start_memory));

    Ok(())
}
