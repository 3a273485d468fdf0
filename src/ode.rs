use crate::error::Error;
use crate::numeric::State2;

use num_traits::identities::Zero;

const SAFETY: f64 = 0.9;
const MIN_FACTOR: f64 = 0.2;
const MAX_FACTOR: f64 = 5.0;

pub struct Options {
    pub rtol: f64,
    pub atol: f64,
    pub h0: Option<f64>,
    pub max_steps: usize
}

impl Default for Options {
    fn default() -> Options {
        Options {
            rtol: 1.49e-8,
            atol: 1.49e-8,
            h0: None,
            max_steps: 100_000
        }
    }
}

/// Dormand-Prince 5(4) embedded Runge-Kutta pair with adaptive step size.
/// Integrates dy/dt = f(t, y) from grid[0] and records the solution at every
/// grid point, shortening steps so that the output lands exactly on the grid.
pub fn dopri5<F>(f: F, y0: State2, grid: &[f64], opts: &Options) -> Result<Vec<State2>, Error>
    where F: Fn(f64, State2) -> State2
{
    if grid.len() < 2 {
        return Err(Error::ArgumentError("output grid needs at least two points".to_string()));
    }
    for w in grid.windows(2) {
        if w[1] <= w[0] {
            return Err(Error::ArgumentError("output grid must be strictly increasing".to_string()));
        }
    }

    let mut result = vec![State2::zero(); grid.len()];
    result[0] = y0;

    let mut t = grid[0];
    let mut y = y0;
    let mut h = opts.h0.unwrap_or((grid[grid.len() - 1] - grid[0]) / 100.0);
    let mut steps = 0;

    for (i, &t_out) in grid.iter().enumerate().skip(1) {
        while t < t_out {
            if steps >= opts.max_steps {
                return Err(Error::Solver(format!("no convergence in {} steps", opts.max_steps)));
            }
            steps += 1;

            let last = h >= t_out - t;
            let h_step = if last { t_out - t } else { h };

            let (y_new, err) = rk_step(&f, t, y, h_step, opts);

            let factor = if err.is_nan() {
                MIN_FACTOR
            } else if err > 0.0 {
                (SAFETY * err.powf(-0.2)).max(MIN_FACTOR).min(MAX_FACTOR)
            } else {
                MAX_FACTOR
            };

            if err <= 1.0 {
                y = y_new;
                t = if last { t_out } else { t + h_step };
            }
            h = h_step * factor;
        }
        result[i] = y;
    }

    Ok(result)
}

fn rk_step<F>(f: &F, t: f64, y: State2, h: f64, opts: &Options) -> (State2, f64)
    where F: Fn(f64, State2) -> State2
{
    let k1 = f(t, y);
    let k2 = f(t + h / 5.0, y + k1 * (h / 5.0));
    let k3 = f(t + 3.0 * h / 10.0, y + (k1 * (3.0 / 40.0) + k2 * (9.0 / 40.0)) * h);
    let k4 = f(t + 4.0 * h / 5.0,
               y + (k1 * (44.0 / 45.0) - k2 * (56.0 / 15.0) + k3 * (32.0 / 9.0)) * h);
    let k5 = f(t + 8.0 * h / 9.0,
               y + (k1 * (19372.0 / 6561.0) - k2 * (25360.0 / 2187.0)
                  + k3 * (64448.0 / 6561.0) - k4 * (212.0 / 729.0)) * h);
    let k6 = f(t + h,
               y + (k1 * (9017.0 / 3168.0) - k2 * (355.0 / 33.0)
                  + k3 * (46732.0 / 5247.0) + k4 * (49.0 / 176.0) - k5 * (5103.0 / 18656.0)) * h);

    let y_new = y + (k1 * (35.0 / 384.0) + k3 * (500.0 / 1113.0) + k4 * (125.0 / 192.0)
                   - k5 * (2187.0 / 6784.0) + k6 * (11.0 / 84.0)) * h;
    let k7 = f(t + h, y_new);

    // difference between the fifth and the embedded fourth order result
    let e = (k1 * (71.0 / 57600.0) - k3 * (71.0 / 16695.0) + k4 * (71.0 / 1920.0)
           - k5 * (17253.0 / 339200.0) + k6 * (22.0 / 525.0) - k7 * (1.0 / 40.0)) * h;

    (y_new, error_norm(e, y, y_new, opts))
}

fn error_norm(e: State2, y0: State2, y1: State2, opts: &Options) -> f64 {
    let State2(e) = e;
    let State2(a) = y0;
    let State2(b) = y1;
    let mut acc = 0.0;
    for i in 0..2 {
        let scale = opts.atol + opts.rtol * a[i].abs().max(b[i].abs());
        acc += (e[i] / scale) * (e[i] / scale);
    }
    (acc / 2.0).sqrt()
}
