use crate::error::Error;
use crate::growth::GrowthCurve;

use plotters::prelude::*;

use std::path::Path;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 400;
const Z_MAX: f64 = 25.0;
const COLORS: [RGBColor; 4] = [BLUE, BLACK, RED, GREEN];

pub fn summary_line(y: f64, g_eff: f64) -> String {
    format!("Y={:.2} Y'={:.2}", y, g_eff)
}

/// Renders the normalised growth curves against redshift into a PNG file,
/// one series per coupling value, cut off at z = 25.
pub fn plot_growth(path: &Path, curves: &[(f64, GrowthCurve)]) -> Result<(), Error> {
    let mut y_max = curves.iter()
        .flat_map(|(_, c)| c.growth.iter().cloned())
        .fold(0.0f64, f64::max);
    if y_max <= 0.0 {
        y_max = 1.0;
    }
    let y_hi = y_max * 1.05;

    let root = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..Z_MAX, 0.0..y_hi)?;

    chart
        .configure_mesh()
        .x_desc("redshift")
        .y_desc("growth factor")
        .draw()?;

    for (i, (val, curve)) in curves.iter().enumerate() {
        let color = COLORS[i % COLORS.len()];
        let points: Vec<(f64, f64)> = curve.redshift.iter()
            .zip(curve.growth.iter())
            .map(|(&z, &d)| (z, d))
            .filter(|&(z, _)| z <= Z_MAX)
            .collect();
        chart
            .draw_series(LineSeries::new(points, &color))?
            .label(format!("Y={:.1}", val))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line(0.6, 0.6), "Y=0.60 Y'=0.60");
        assert_eq!(summary_line(1.0, 1.25), "Y=1.00 Y'=1.25");
        assert_eq!(summary_line(1.4, 1.4), "Y=1.40 Y'=1.40");
    }
}
