pub const H100: f64 = 3.2407e-18; // 100 km/s/Mpc in 1/s
pub const SEC_PER_MYR: f64 = 3.1556952e13;

pub struct Cosmology {
    pub h: f64,
    pub omega_m: f64,
    pub omega_l: f64,
    pub omega_r: f64
}

pub const PLANCK_COSMOLOGY: Cosmology = Cosmology {
    h: 0.6766,
    omega_m: 0.31,
    omega_l: 1.0 - 0.31,
    omega_r: 8.6e-5
};

impl Cosmology {
    pub fn h0(&self) -> f64 {
        self.h * H100
    }

    /// Hubble rate as a function of the logarithmic scale factor s = ln a.
    pub fn hubble(&self, s: f64) -> f64 {
        let a = s.exp();
        self.h0() * (self.omega_m * a.powf(-3.0) + self.omega_r * a.powf(-4.0) + self.omega_l).sqrt()
    }

    /// Derivative of the Hubble rate with respect to s, from the Friedmann equation.
    pub fn dhubble_ds(&self, s: f64) -> f64 {
        let a = s.exp();
        -self.h0().powf(2.0) / (2.0 * self.hubble(s))
            * (3.0 * self.omega_m * a.powf(-3.0) + 4.0 * self.omega_r * a.powf(-4.0))
    }

    /// Hubble rate as a function of redshift.
    pub fn hubble_z(&self, z: f64) -> f64 {
        self.h0() * (self.omega_m * (1.0 + z).powf(3.0)
            + self.omega_r * (1.0 + z).powf(4.0)
            + self.omega_l).sqrt()
    }

    /// Matter density parameter at redshift z.
    pub fn omega_z(&self, z: f64) -> f64 {
        self.omega_m * (1.0 + z).powf(3.0)
            / (self.omega_m * (1.0 + z).powf(3.0) + self.omega_l + self.omega_r * (1.0 + z).powf(4.0))
    }
}

pub fn redshift(s: f64) -> f64 {
    1.0 / s.exp() - 1.0
}

pub fn log_scale_factor(z: f64) -> f64 {
    (1.0 / (1.0 + z)).ln()
}

/// Growth suppression fit of Carroll, Press & Turner (1992) for a flat
/// universe with a cosmological constant.
pub fn dicke(omega: f64) -> f64 {
    5.0 / 2.0 * omega
        / (1.0 / 70.0 + 209.0 * omega / 140.0 - omega.powf(2.0) / 140.0 + omega.powf(4.0 / 7.0))
}
