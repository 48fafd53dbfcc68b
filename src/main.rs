use std::process::ExitCode;

use rand::rngs::StdRng;
use rand::SeedableRng;

use fastmath::bench;
use fastmath::opts::{
    BenchOpts, Command, ErrorScanOpts, Opts, TablesOpts, VerifyOpts,
};
use fastmath::verify::verifier::DEFAULT_BINS;
use fastmath::verify::{Histogram, Verifier, VerifyError};

fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64)
}

fn run_verify(opts: &VerifyOpts) -> Result<(), VerifyError> {
    let verifier = match opts.threads {
        Some(threads) => Verifier::new(threads)?,
        None => Verifier::with_available_parallelism(),
    };

    let hist: Histogram<DEFAULT_BINS> = verifier.run_range(
        opts.start..opts.end,
        opts.function.candidate(),
        opts.function.reference(),
    )?;

    println!("\nULP delta ({}):", opts.function);
    print!("{hist}");

    Ok(())
}

fn run_bench(opts: &BenchOpts) {
    let mut rng = rng_from_seed(opts.seed);
    let (double, single) =
        bench::run_suite(&mut rng, opts.count, opts.iterations);

    for result in double {
        println!("{result}");
    }

    for result in single {
        println!("{result}");
    }
}

fn run_error_scan(opts: &ErrorScanOpts) {
    let mut rng = rng_from_seed(opts.seed);
    let iv = bench::generate_test_vector(&mut rng, 0.5, 10.0, opts.count);

    println!(
        "{}",
        bench::validate_error(&iv, opts.max_range, opts.iterations)
    );
    println!(
        "{}",
        bench::validate_monotonic(opts.max_range, opts.iterations)
    );
}

fn run_tables(opts: &TablesOpts) -> ExitCode {
    let mut source = String::new();

    if let Err(err) = opts.table.write_source(&mut source) {
        eprintln!("error: {err}");

        return ExitCode::FAILURE;
    }

    print!("{source}");

    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    env_logger::Builder::new()
        .filter_level(opts.log_level)
        .init();

    match &opts.command {
        Command::Verify(args) => {
            if let Err(err) = run_verify(args) {
                eprintln!("error: {err}");

                return ExitCode::FAILURE;
            }
        }
        Command::Bench(args) => run_bench(args),
        Command::ErrorScan(args) => run_error_scan(args),
        Command::Tables(args) => return run_tables(args),
    }

    ExitCode::SUCCESS
}
