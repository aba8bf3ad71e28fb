/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use png_to_rgb565::cli::Args;
use png_to_rgb565::ConvertError;
use png_to_rgb565::convert::{decode, encode};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("conversion failed (exit code {})", err.exit_code());
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run() -> Result<(), ConvertError> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => return Err(ConvertError::Usage(err.render().to_string())),
    };
    let options = args.into_options();

    let img = decode(&options.input)?;
    println!("/* Image Width:{} Height:{} */", img.width(), img.height());

    let report = encode(&img, &options)?;
    log::debug!("{report:?}");

    println!(
        "PNG file \"{}\" converted to \"{}\"",
        options.input.display(),
        options.output.display()
    );
    Ok(())
}
