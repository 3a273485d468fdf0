use crate::cosmology::{Cosmology, SEC_PER_MYR};
use crate::error::Error;
use crate::quadrature;

/// Cosmic time elapsed between two redshifts, in millions of years.
/// Passing f64::INFINITY for z_from starts the clock at the big bang.
pub fn cosmic_time(cosmo: &Cosmology, z_to: f64, z_from: f64) -> Result<f64, Error> {
    let (seconds, _) = quadrature::quad(|z| 1.0 / (cosmo.hubble_z(z) * (1.0 + z)), z_to, z_from)?;
    Ok(seconds / SEC_PER_MYR)
}

pub fn describe(z_to: f64, z_from: f64, myr: f64) -> String {
    let start = if z_from == f64::INFINITY {
        "big bang".to_string()
    } else {
        format!("z={}", z_from)
    };
    format!("{:.5} million years from {} until z={}", myr, start, z_to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmology::PLANCK_COSMOLOGY;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_age_of_universe() {
        let age = cosmic_time(&PLANCK_COSMOLOGY, 0.0, f64::INFINITY).unwrap();
        println!("age of the universe: {:.1} million years", age);
        assert_approx_eq!(age, 13800.0, 300.0);
    }

    #[test]
    fn test_einstein_de_sitter_age() {
        let eds = Cosmology { h: 0.6766, omega_m: 1.0, omega_l: 0.0, omega_r: 0.0 };
        let age = cosmic_time(&eds, 0.0, f64::INFINITY).unwrap();
        let expected = 2.0 / (3.0 * eds.h0()) / SEC_PER_MYR;
        assert_approx_eq!(age, expected, expected * 1e-6);
    }

    #[test]
    fn test_intervals_are_additive() {
        let whole = cosmic_time(&PLANCK_COSMOLOGY, 0.0, f64::INFINITY).unwrap();
        let late = cosmic_time(&PLANCK_COSMOLOGY, 0.0, 5.0).unwrap();
        let early = cosmic_time(&PLANCK_COSMOLOGY, 5.0, f64::INFINITY).unwrap();
        assert_approx_eq!(late + early, whole, 0.01);
    }

    #[test]
    fn test_earlier_start_is_longer() {
        let a = cosmic_time(&PLANCK_COSMOLOGY, 0.0, 10.0).unwrap();
        let b = cosmic_time(&PLANCK_COSMOLOGY, 0.0, 100.0).unwrap();
        let c = cosmic_time(&PLANCK_COSMOLOGY, 0.0, 1100.0).unwrap();
        let whole = cosmic_time(&PLANCK_COSMOLOGY, 0.0, f64::INFINITY).unwrap();
        assert!(a < b);
        assert!(b < c);
        assert!(c < whole);
    }

    #[test]
    fn test_describe() {
        assert_eq!(describe(0.0, f64::INFINITY, 13806.25),
                   "13806.25000 million years from big bang until z=0");
        assert_eq!(describe(1.0, 5.0, 1234.5),
                   "1234.50000 million years from z=5 until z=1");
    }
}
