//! Linear growth of matter perturbations under modified gravity, and the
//! conversion of redshift to cosmic time, on a flat FLRW background.

pub mod cosmic_time;
pub mod cosmology;
pub mod error;
pub mod growth;
pub mod numeric;
pub mod ode;
pub mod plot;
pub mod quadrature;
pub mod renorm;
