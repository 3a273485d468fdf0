extern crate clap;
use clap::{Arg, App};

use mg_growth::cosmic_time::{cosmic_time, describe};
use mg_growth::cosmology::PLANCK_COSMOLOGY;
use mg_growth::error::Error;

use std::str::FromStr;

fn run() -> Result<(), Error> {
    let matches = App::new("Cosmic Time")
        .version("0.1.0")
        .about("Convert redshift to cosmic time by integrating the expansion history.")
        .arg(Arg::with_name("Z_TO")
             .help("Redshift at which the clock stops. Defaults to 0.")
             .index(1))
        .arg(Arg::with_name("Z_FROM")
             .help("Redshift at which the clock starts, inf for the big bang. Defaults to inf.")
             .index(2))
        .get_matches();

    let z_to = match matches.value_of("Z_TO") {
        Some(text) => f64::from_str(text)?,
        None => 0.0
    };
    let z_from = match matches.value_of("Z_FROM") {
        Some(text) => f64::from_str(text)?,
        None => f64::INFINITY
    };

    let time = cosmic_time(&PLANCK_COSMOLOGY, z_to, z_from)?;
    println!("{}", describe(z_to, z_from, time));
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("cosmic_time: {}", e);
        std::process::exit(1);
    }
}
