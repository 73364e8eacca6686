#![allow(non_snake_case)]
use RustedComputor::Utils::logger::init_logger;
use RustedComputor::polynomial::equation_api::{Computor, USAGE, parse_cli_args};
use RustedComputor::polynomial::poly_errors::EquationError;
use std::env;
use std::process;

fn run(args: &[String]) -> Result<(), EquationError> {
    let (config, equation) = parse_cli_args(args)?;
    init_logger(config.log_level()?);
    let report = Computor::with_config(config).run(equation)?;
    println!("{}", report);
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "computor".to_string());
    if let Err(e) = run(args.get(1..).unwrap_or_default()) {
        eprintln!("{}: {}", program, e);
        if let EquationError::Usage(_) = e {
            eprintln!("usage: {} {}", program, USAGE);
        }
        process::exit(1);
    }
}
