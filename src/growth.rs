use crate::cosmology::{self, Cosmology};
use crate::error::Error;
use crate::numeric::State2;
use crate::ode;

use ndarray::{Array, Array1};

pub struct GrowthCurve {
    pub redshift: Array1<f64>,
    pub growth: Array1<f64>
}

/// Friction term of the growth equation in s = ln a.
pub fn alpha(cosmo: &Cosmology, s: f64) -> f64 {
    2.0 + cosmo.dhubble_ds(s) / cosmo.hubble(s)
}

/// Source term of the growth equation; g_eff rescales the gravitational
/// coupling felt by matter perturbations, g_eff = 1 is general relativity.
pub fn beta(cosmo: &Cosmology, s: f64, g_eff: f64) -> f64 {
    let a = s.exp();
    3.0 / 2.0 * cosmo.omega_m * a.powf(-3.0) * (cosmo.h0() / cosmo.hubble(s)).powf(2.0) * g_eff
}

/// Integrates the linear growth equation delta'' + alpha delta' - beta delta = 0
/// on a uniform grid in s from recombination to today, and normalises the
/// growth factor to unity at z = 0.
pub fn solve(cosmo: &Cosmology, g_eff: f64, z_recomb: usize) -> Result<GrowthCurve, Error> {
    if z_recomb < 2 {
        return Err(Error::ArgumentError("need at least two redshift samples".to_string()));
    }

    let n = z_recomb;
    let s_min = (1.0 / (z_recomb as f64 + 1.0)).ln();

    let mut s = Array::linspace(s_min, 0.0, n);
    s[n - 1] = 0.0; // keep the endpoint at z = 0 free of rounding

    let rhs = |x: f64, State2(u): State2| {
        State2([u[1], beta(cosmo, x, g_eff) * u[0] - alpha(cosmo, x) * u[1]])
    };

    let states = ode::dopri5(rhs, State2([0.01, 0.01]), s.as_slice().unwrap(),
                             &ode::Options::default())?;

    let redshift = s.mapv(cosmology::redshift);
    let mut growth: Array1<f64> = states.iter().map(|&State2(u)| u[0]).collect();
    let today = growth[n - 1];
    growth /= today;

    Ok(GrowthCurve { redshift, growth })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmology::{dicke, PLANCK_COSMOLOGY};
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_normalisation() {
        let curve = solve(&PLANCK_COSMOLOGY, 1.0, 1100).unwrap();
        assert_eq!(curve.growth.len(), 1100);
        assert_eq!(curve.redshift.len(), 1100);
        assert_eq!(curve.growth[1099], 1.0);
        assert_eq!(curve.redshift[1099], 0.0);
        assert_approx_eq!(curve.redshift[0], 1100.0, 1e-9);
    }

    #[test]
    fn test_growth_is_monotonic() {
        let curve = solve(&PLANCK_COSMOLOGY, 1.0, 1100).unwrap();
        for i in 1..curve.growth.len() {
            assert!(curve.growth[i] > curve.growth[i - 1]);
        }
    }

    #[test]
    fn test_matches_dicke_fit() {
        let curve = solve(&PLANCK_COSMOLOGY, 1.0, 1100).unwrap();
        let d0 = dicke(PLANCK_COSMOLOGY.omega_z(0.0));
        for (&z, &d) in curve.redshift.iter().zip(curve.growth.iter()) {
            if z < 0.4 || z > 3.0 {
                continue;
            }
            let fit = dicke(PLANCK_COSMOLOGY.omega_z(z)) / (1.0 + z) / d0;
            assert!((d / fit - 1.0).abs() < 0.05);
        }
    }

    #[test]
    fn test_coupling_strength_ordering() {
        let weak = solve(&PLANCK_COSMOLOGY, 0.6, 1100).unwrap();
        let strong = solve(&PLANCK_COSMOLOGY, 1.4, 1100).unwrap();
        // stronger coupling has grown more since any earlier epoch, so its
        // curve normalised at z = 0 sits lower at high redshift
        let i = weak.redshift.iter().position(|&z| z < 5.0).unwrap();
        assert!(strong.growth[i] < weak.growth[i]);
        assert_eq!(weak.growth[1099], strong.growth[1099]);
    }

    #[test]
    fn test_rejects_degenerate_grid() {
        assert!(solve(&PLANCK_COSMOLOGY, 1.0, 0).is_err());
        assert!(solve(&PLANCK_COSMOLOGY, 1.0, 1).is_err());
    }
}
