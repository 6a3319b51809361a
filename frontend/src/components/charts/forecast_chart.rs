use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use shared::ForecastPoint;

use crate::services::date_utils::format_date_compact;

const PREDICTED_BLUE: RGBColor = RGBColor(37, 99, 235);
const BOUND_BLUE: RGBColor = RGBColor(147, 197, 253);
const BAND_BLUE: RGBColor = RGBColor(59, 130, 246);

#[derive(Properties, PartialEq)]
pub struct ForecastChartProps {
    pub data: Vec<ForecastPoint>,
}

/// Predicted-balance line over a shaded confidence band with dashed
/// bound lines, drawn straight onto a canvas.
pub struct ForecastChart {
    canvas_ref: NodeRef,
}

impl Component for ForecastChart {
    type Message = ();
    type Properties = ForecastChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().data != old_props.data {
            self.draw_chart(&ctx.props().data);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        if !ctx.props().data.is_empty() {
            self.draw_chart(&ctx.props().data);
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="chart-frame">
                <div class="chart-heading">
                    <h3>{"Cashflow Forecast"}</h3>
                    <p>{"Projected balance with uncertainty bounds."}</p>
                </div>
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="chart-canvas"
                    width="800"
                    height="350"
                ></canvas>
                <div class="chart-legend">
                    <span class="legend-item">
                        <span class="legend-swatch legend-swatch-predicted"></span>
                        {"Predicted Balance"}
                    </span>
                </div>
                <p class="chart-caption">
                    {"Shaded area represents the 95% confidence interval"}
                </p>
            </div>
        }
    }
}

impl ForecastChart {
    fn draw_chart(&self, data: &[ForecastPoint]) {
        if data.is_empty() {
            return;
        }

        let canvas = match self.canvas_ref.cast::<HtmlCanvasElement>() {
            Some(canvas) => canvas,
            None => return,
        };

        canvas.set_width(800);
        canvas.set_height(350);

        let backend = match CanvasBackend::with_canvas_object(canvas) {
            Some(backend) => backend,
            None => return,
        };

        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let (y_min, y_max) = y_bounds(data);
        let x_max = (data.len() as f64 - 1.0).max(1.0);
        let labels: Vec<String> = data
            .iter()
            .map(|point| format_date_compact(&point.date))
            .collect();

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..x_max, y_min..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_label_formatter(&|v| format!("${:.0}k", v / 1000.0))
            .x_label_formatter(&|x| {
                let slot = x.round();
                if (x - slot).abs() < 0.2 && slot >= 0.0 && (slot as usize) < labels.len() {
                    labels[slot as usize].clone()
                } else {
                    String::new()
                }
            })
            .label_style(("sans-serif", 11, &RGBColor(136, 136, 136)))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(245, 245, 245))
            .x_labels(data.len().min(12))
            .y_labels(8)
            .draw()
            .is_err()
        {
            return;
        }

        // Confidence band: upper path out, lower path back.
        let mut band: Vec<(f64, f64)> = data
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.upper_bound))
            .collect();
        band.extend(
            data.iter()
                .enumerate()
                .rev()
                .map(|(i, point)| (i as f64, point.lower_bound)),
        );
        if chart
            .draw_series(std::iter::once(Polygon::new(band, BAND_BLUE.mix(0.15).filled())))
            .is_err()
        {
            return;
        }

        let upper = data
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.upper_bound));
        if chart
            .draw_series(DashedLineSeries::new(upper, 4, 4, BOUND_BLUE.stroke_width(1)))
            .is_err()
        {
            return;
        }

        let lower = data
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.lower_bound));
        if chart
            .draw_series(DashedLineSeries::new(lower, 4, 4, BOUND_BLUE.stroke_width(1)))
            .is_err()
        {
            return;
        }

        let predicted: Vec<(f64, f64)> = data
            .iter()
            .enumerate()
            .map(|(i, point)| (i as f64, point.predicted_balance))
            .collect();
        if chart
            .draw_series(LineSeries::new(
                predicted.iter().copied(),
                PREDICTED_BLUE.stroke_width(3),
            ))
            .is_err()
        {
            return;
        }

        for &(x, y) in &predicted {
            if chart
                .draw_series(std::iter::once(Circle::new((x, y), 4, PREDICTED_BLUE.filled())))
                .is_err()
            {
                continue;
            }
            let _ = chart.draw_series(std::iter::once(Circle::new(
                (x, y),
                4,
                WHITE.stroke_width(2),
            )));
        }

        let _ = root.present();
    }
}

/// Vertical span of the band plus 10% padding on both sides. Balances are
/// not clamped to zero; an overdraft forecast should read below the axis.
fn y_bounds(data: &[ForecastPoint]) -> (f64, f64) {
    let min = data
        .iter()
        .map(|point| point.lower_bound)
        .fold(f64::INFINITY, f64::min);
    let max = data
        .iter()
        .map(|point| point.upper_bound)
        .fold(f64::NEG_INFINITY, f64::max);
    let padding = (max - min).max(1.0) * 0.1;
    (min - padding, max + padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, predicted: f64, lower: f64, upper: f64) -> ForecastPoint {
        ForecastPoint {
            date: date.to_string(),
            predicted_balance: predicted,
            lower_bound: lower,
            upper_bound: upper,
        }
    }

    #[test]
    fn bounds_pad_the_band_on_both_sides() {
        let data = vec![
            point("2024-09-01", 1000.0, 800.0, 1200.0),
            point("2024-10-01", 1100.0, 700.0, 1500.0),
        ];
        let (min, max) = y_bounds(&data);
        assert!(min < 700.0);
        assert!(max > 1500.0);
    }

    #[test]
    fn negative_balances_stay_in_range() {
        let data = vec![point("2024-09-01", -50.0, -200.0, 100.0)];
        let (min, max) = y_bounds(&data);
        assert!(min < -200.0);
        assert!(max > 100.0);
    }

    #[test]
    fn drawing_without_a_mounted_canvas_is_a_no_op() {
        let chart = ForecastChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw_chart(&[point("2024-09-01", 1000.0, 800.0, 1200.0)]);
        chart.draw_chart(&[]);
    }
}
