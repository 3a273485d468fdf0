use mg_growth::cosmology::PLANCK_COSMOLOGY;
use mg_growth::error::Error;
use mg_growth::growth;
use mg_growth::plot;
use mg_growth::renorm::renorm;

use std::path::Path;

// modified gravity coupling values to be plotted
const Y_VALUES: [f64; 3] = [0.6, 1.0, 1.4];

// redshift of recombination
const Z_RECOMB: usize = 1100;

fn run() -> Result<(), Error> {
    let mut curves = Vec::with_capacity(Y_VALUES.len());
    for &val in Y_VALUES.iter() {
        let g_eff = renorm(val);
        curves.push((val, growth::solve(&PLANCK_COSMOLOGY, g_eff, Z_RECOMB)?));
        println!("{}", plot::summary_line(val, g_eff));
    }
    plot::plot_growth(Path::new("growth_function.png"), &curves)?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("growth_function: {}", e);
        std::process::exit(1);
    }
}
