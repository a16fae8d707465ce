//! Generates sustained CPU load from worker threads bound to specific
//! processors.
//!
//! Each worker is bound round-robin to one of the processors given via `-c`,
//! reports the affinity the operating system actually granted it and then
//! spins forever. The process never exits on its own - stop it with Ctrl+C
//! or `kill` once the scheduling experiment it feeds is done.
//!
//! # Usage
//!
//! ```text
//! cpuburn -c 0,1,2,3 -w 8
//! ```

use std::num::NonZero;
use std::process::ExitCode;

use argh::FromArgs;

use crate::launcher::{Launcher, MAX_WORKERS};

mod bindings;
mod error;
mod launcher;
mod primitive_types;
mod worker;

const USAGE: &str = "usage: cpuburn -c <cpus> -w <workers> [-h]";

/// Spawn processor-pinned worker threads that spin forever to generate CPU
/// load.
#[derive(FromArgs)]
struct Args {
    /// comma-separated processor indexes to bind workers to, round-robin
    #[argh(option, short = 'c')]
    cpus: Option<String>,

    /// number of worker threads to launch (1 to 128)
    #[argh(option, short = 'w')]
    workers: Option<usize>,

    /// print usage information and exit without launching anything
    #[argh(switch, short = 'h')]
    usage: bool,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    if args.usage {
        eprintln!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let Some(cpus) = args.cpus else {
        eprintln!("missing cpu list");
        return ExitCode::FAILURE;
    };

    const MAX_WORKERS_NZ: NonZero<usize> =
        NonZero::new(MAX_WORKERS).expect("literal must have non-zero value");

    let cores = match corelist::parse(&cpus, MAX_WORKERS_NZ) {
        Ok(cores) => cores,
        Err(error) => {
            eprintln!("error parsing cpus: {error}");
            return ExitCode::FAILURE;
        }
    };

    println!("using {} cpus for affinity", cores.len());

    let Some(worker_count) = args.workers else {
        eprintln!("missing worker thread count");
        return ExitCode::FAILURE;
    };

    let Some(worker_count) = NonZero::new(worker_count) else {
        eprintln!("invalid worker thread count: 0");
        return ExitCode::FAILURE;
    };

    println!("using {} cores, {} worker threads", cores.len(), worker_count);

    let launcher = Launcher::new();

    let workers = match launcher.launch(worker_count, &cores, worker::entrypoint) {
        Ok(workers) => workers,
        Err(error) => {
            eprintln!("{error}");
            return ExitCode::FAILURE;
        }
    };

    // Workers never return, so this blocks until the process is killed from
    // the outside. That is the intended terminal state of the tool.
    workers.join_all();

    ExitCode::SUCCESS
}
