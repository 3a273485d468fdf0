use num_traits::identities::Zero;

/// State of the second order growth equation, (delta, ddelta/ds).
#[derive(Clone,Copy,Debug,Default)]
pub struct State2 (pub [f64; 2]);

impl std::ops::Add for State2 {
    type Output = State2;
    fn add(self, other: Self) -> Self {
        let State2(a) = self;
        let State2(b) = other;
        let mut c = [0.0; 2];
        for i in 0..2 { c[i] = a[i] + b[i]; }
        State2(c)
    }
}

impl std::ops::Sub for State2 {
    type Output = State2;
    fn sub(self, other: Self) -> Self {
        let State2(a) = self;
        let State2(b) = other;
        let mut c = [0.0; 2];
        for i in 0..2 { c[i] = a[i] - b[i]; }
        State2(c)
    }
}

impl std::ops::Mul<f64> for State2 {
    type Output = State2;
    fn mul(self, other: f64) -> Self {
        let State2(a) = self;
        let mut c = [0.0; 2];
        for i in 0..2 { c[i] = a[i] * other; }
        State2(c)
    }
}

impl std::ops::Div<f64> for State2 {
    type Output = State2;
    fn div(self, other: f64) -> Self {
        let State2(a) = self;
        let mut c = [0.0; 2];
        for i in 0..2 { c[i] = a[i] / other; }
        State2(c)
    }
}

impl num_traits::identities::Zero for State2 {
    fn zero() -> Self {
        State2([0.0, 0.0])
    }

    fn is_zero(&self) -> bool {
        let State2(d) = self;
        d.iter().all(|x| x.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_arithmetic() {
        let State2(v) = State2([1.0, -2.0]) + State2([0.5, 2.0]) * 2.0;
        assert_eq!(v, [2.0, 2.0]);
        let State2(w) = (State2([3.0, 9.0]) - State2([1.0, 1.0])) / 2.0;
        assert_eq!(w, [1.0, 4.0]);
        assert!(State2::zero().is_zero());
    }
}
