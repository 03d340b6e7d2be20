use std::env;
use std::io;
use std::path::Path;
use std::process::ExitCode;

use log::error;

use rvm_core::{load_program, Vm};

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let mut args = env::args();
    let program_name = args.next().unwrap_or_else(|| "rvm".to_string());

    let path = match args.next() {
        Some(path) if args.next().is_none() => path,
        _ => {
            println!("usage: {program_name} PROGRAM");
            return ExitCode::FAILURE;
        }
    };

    match run(Path::new(&path)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<(), rvm_core::VmError> {
    let program = load_program(path)?;
    let mut vm = Vm::new(program, io::stdin(), io::stdout());
    vm.run()
}
