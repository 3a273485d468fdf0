/// Renormalisation of the bare modified gravity coupling Y into the
/// effective coupling Y' that sources the growth equation. The screening
/// model lives outside this crate; the passthrough below leaves the
/// coupling unscreened, so Y = 1 recovers general relativity.
pub fn renorm(y: f64) -> f64 {
    y
}
