use crate::error::Error;

pub const EPSABS: f64 = 1.49e-8;
pub const EPSREL: f64 = 1.49e-8;

const MAX_DEPTH: u32 = 50;

// 15 point Kronrod rule on [-1, 1]; every second abscissa is a node of the
// embedded 7 point Gauss rule.
const XGK: [f64; 8] = [
    0.9914553711208126,
    0.9491079123427585,
    0.8648644233597691,
    0.7415311855993944,
    0.5860872354676911,
    0.4058451513773972,
    0.2077849550078985,
    0.0
];

const WGK: [f64; 8] = [
    0.0229353220105292,
    0.0630920926299786,
    0.1047900103222502,
    0.1406532597155259,
    0.1690047266392679,
    0.1903505780647854,
    0.2044329400752989,
    0.2094821410847278
];

const WG: [f64; 4] = [
    0.1294849661688697,
    0.2797053914892767,
    0.3818300505051189,
    0.4179591836734694
];

/// Adaptive Gauss-Kronrod integration of f over [a, b]. An upper bound of
/// +inf is folded onto the unit interval with x = a + t / (1 - t); the
/// Kronrod abscissae are interior, so the integrand is never evaluated at
/// the singular endpoint. Returns the integral and an error estimate.
pub fn quad<F>(f: F, a: f64, b: f64) -> Result<(f64, f64), Error>
    where F: Fn(f64) -> f64
{
    if !a.is_finite() {
        return Err(Error::ArgumentError("lower integration bound must be finite".to_string()));
    }
    if b == f64::INFINITY {
        let g = |t: f64| {
            let w = 1.0 - t;
            f(a + t / w) / (w * w)
        };
        return bounded(&g, 0.0, 1.0);
    }
    if !b.is_finite() {
        return Err(Error::ArgumentError("upper integration bound must be finite or +inf".to_string()));
    }
    bounded(&f, a, b)
}

fn bounded<F>(f: &F, a: f64, b: f64) -> Result<(f64, f64), Error>
    where F: Fn(f64) -> f64
{
    let (whole, err) = kronrod(f, a, b);
    let tol = EPSABS.max(EPSREL * whole.abs());
    split(f, a, b, whole, err, tol, 0)
}

fn split<F>(f: &F, a: f64, b: f64, whole: f64, err: f64, tol: f64, depth: u32) -> Result<(f64, f64), Error>
    where F: Fn(f64) -> f64
{
    if err <= tol {
        return Ok((whole, err));
    }
    if depth >= MAX_DEPTH {
        return Err(Error::Solver("quadrature ran out of subdivisions".to_string()));
    }
    let c = 0.5 * (a + b);
    let (v1, e1) = kronrod(f, a, c);
    let (v2, e2) = kronrod(f, c, b);
    let (left, el) = split(f, a, c, v1, e1, tol / 2.0, depth + 1)?;
    let (right, er) = split(f, c, b, v2, e2, tol / 2.0, depth + 1)?;
    Ok((left + right, el + er))
}

fn kronrod<F>(f: &F, a: f64, b: f64) -> (f64, f64)
    where F: Fn(f64) -> f64
{
    let c = 0.5 * (a + b);
    let half = 0.5 * (b - a);

    let fc = f(c);
    let mut resk = WGK[7] * fc;
    let mut resg = WG[3] * fc;

    for j in 0..7 {
        let x = half * XGK[j];
        let fsum = f(c - x) + f(c + x);
        resk += WGK[j] * fsum;
        if j % 2 == 1 {
            resg += WG[j / 2] * fsum;
        }
    }

    (resk * half, ((resk - resg) * half).abs())
}
