use std::{error::Error, path::PathBuf, thread, time::Duration};

use batchcalc::{
    dispatch::{CalculatorService, IdScope},
    io::{read_all_requests, ConsoleIo, FileIo, IoHandler},
};
use clap::{Parser, ValueEnum};
use log::info;

/// batchcalc evaluates batches of integer expression requests concurrently.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Where to read requests from and write results to.
    #[arg(long, value_enum, default_value_t = IoMode::Console)]
    io: IoMode,

    /// Input file path (file mode only).
    #[arg(long, requires = "output")]
    input: Option<PathBuf>,

    /// Output file path (file mode only).
    #[arg(long, requires = "input")]
    output: Option<PathBuf>,

    /// Restart request numbering from 1 for every batch instead of numbering
    /// continuously across the session.
    #[arg(long)]
    per_batch_ids: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum IoMode {
    /// Read requests from stdin, write results to stdout.
    Console,
    /// Read requests from a file, write results to a file, and keep watching
    /// the input file for new content.
    File,
}

/// Polling interval for file monitoring.
const POLL_INTERVAL: Duration = Duration::from_secs(1);

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut io: Box<dyn IoHandler> = match args.io {
        IoMode::Console => Box::new(ConsoleIo::new()),
        IoMode::File => {
            let (Some(input), Some(output)) = (&args.input, &args.output) else {
                return Err("File mode requires --input and --output".into());
            };
            Box::new(FileIo::new(input, output)?)
        },
    };

    let id_scope = if args.per_batch_ids { IdScope::Batch } else { IdScope::Service };
    let mut service = CalculatorService::new(id_scope);

    run_continuous(io.as_mut(), &service)?;

    service.shutdown();
    Ok(())
}

/// Processes the initial input, then keeps polling for new requests when the
/// handler supports monitoring.
///
/// Requests already processed in this session are remembered by content and
/// skipped on re-reads, so appending to the input file only evaluates the
/// new requests. Returns once the exit sentinel is read or, for handlers
/// without monitoring, after the initial batch.
fn run_continuous(io: &mut dyn IoHandler, service: &CalculatorService) -> Result<(), Box<dyn Error>> {
    let Some(requests) = read_all_requests(io) else {
        return Ok(());
    };

    if requests.is_empty() && !io.supports_monitoring() {
        io.write_line("No expressions provided.")?;
        return Ok(());
    }

    let mut processed: Vec<Vec<String>> = Vec::new();
    if !requests.is_empty() {
        dispatch_and_render(io, service, &requests)?;
        processed.extend(requests);
    }

    if !io.supports_monitoring() {
        return Ok(());
    }

    info!("monitoring input for new requests");
    loop {
        thread::sleep(POLL_INTERVAL);
        if !io.has_new_content() {
            continue;
        }
        io.reset()?;

        let Some(requests) = read_all_requests(io) else {
            return Ok(());
        };
        let new: Vec<Vec<String>> = requests.into_iter()
                                            .filter(|request| !processed.contains(request))
                                            .collect();
        if new.is_empty() {
            continue;
        }

        info!("found {} new request(s)", new.len());
        dispatch_and_render(io, service, &new)?;
        processed.extend(new);
    }
}

/// Evaluates one batch and writes its rendered outcomes.
fn dispatch_and_render(io: &mut dyn IoHandler,
                       service: &CalculatorService,
                       requests: &[Vec<String>])
                       -> Result<(), Box<dyn Error>> {
    let outcomes = service.process_batch(requests);

    io.write_line("Results:")?;
    for outcome in outcomes {
        io.write_line(&outcome.to_string())?;
    }
    Ok(())
}
