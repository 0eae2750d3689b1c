use std::process::ExitCode;

use foo2ascii::{cli, convert, ConvertError};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => return report(ConvertError::from(e)),
    };

    match convert(&args.input, &args.output) {
        Ok(dims) => {
            println!("Image dimensions: {}", dims);
            println!("Conversion completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => report(e),
    }
}

fn report(err: ConvertError) -> ExitCode {
    if err.is_usage() {
        // clap already renders "error: ..." plus the usage line
        eprint!("{}", err);
    } else {
        log::error!("Conversion failed: {:?}", err);
        eprintln!("error: {}", err);
    }
    ExitCode::FAILURE
}
