use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use shared::CashflowMonth;

use crate::services::date_utils::format_month_short;

const INCOME_GREEN: RGBColor = RGBColor(34, 197, 94);
const EXPENSE_RED: RGBColor = RGBColor(239, 68, 68);

// Bar group geometry around each month's integer slot.
const BAR_HALF_GAP: f64 = 0.06;
const BAR_WIDTH: f64 = 0.32;

#[derive(Properties, PartialEq)]
pub struct CashflowChartProps {
    /// Already filtered by the page's active date range.
    pub data: Vec<CashflowMonth>,
}

/// Grouped income/expense bars, one group per month, drawn straight onto a
/// canvas. Struct component because the canvas has to be redrawn outside
/// the vdom whenever the series changes.
pub struct CashflowChart {
    canvas_ref: NodeRef,
}

impl Component for CashflowChart {
    type Message = ();
    type Properties = CashflowChartProps;

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
                <canvas
                    ref={self.canvas_ref.clone()}
                    class="chart-canvas"
                    width="800"
                    height="350"
                ></canvas>
                <div class="chart-legend">
                    <span class="legend-item">
                        <span class="legend-swatch legend-swatch-income"></span>
                        {"Income"}
                    </span>
                    <span class="legend-item">
                        <span class="legend-swatch legend-swatch-expense"></span>
                        {"Expenses"}
                    </span>
                </div>
            </div>
        }
    }
}

impl CashflowChart {
    fn draw_chart(&self, data: &[CashflowMonth]) {
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

        let slots = data.len() as f64;
        let y_max = y_axis_max(data);
        let labels: Vec<String> = data
            .iter()
            .map(|entry| format_month_short(&entry.month))
            .collect();

        // Integer slots sit at bar-group centers, so axis ticks land under
        // the groups they label.
        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(70)
            .build_cartesian_2d(-0.5..slots - 0.5, 0.0..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        if chart
            .configure_mesh()
            .disable_x_mesh()
            .y_label_formatter(&|v| format!("${:.0}", v))
            .x_label_formatter(&|x| {
                let slot = x.round();
                if (x - slot).abs() < 0.3 && slot >= 0.0 && (slot as usize) < labels.len() {
                    labels[slot as usize].clone()
                } else {
                    String::new()
                }
            })
            .label_style(("sans-serif", 12, &RGBColor(136, 136, 136)))
            .axis_style(&RGBColor(230, 230, 230))
            .bold_line_style(&RGBColor(245, 245, 245))
            .x_labels(data.len().min(12))
            .y_labels(8)
            .draw()
            .is_err()
        {
            return;
        }

        let income_bars = data.iter().enumerate().map(|(i, entry)| {
            let center = i as f64;
            Rectangle::new(
                [
                    (center - BAR_HALF_GAP - BAR_WIDTH, 0.0),
                    (center - BAR_HALF_GAP, entry.income),
                ],
                INCOME_GREEN.filled(),
            )
        });
        if chart.draw_series(income_bars).is_err() {
            return;
        }

        let expense_bars = data.iter().enumerate().map(|(i, entry)| {
            let center = i as f64;
            Rectangle::new(
                [
                    (center + BAR_HALF_GAP, 0.0),
                    (center + BAR_HALF_GAP + BAR_WIDTH, entry.expense),
                ],
                EXPENSE_RED.filled(),
            )
        });
        if chart.draw_series(expense_bars).is_err() {
            return;
        }

        let _ = root.present();
    }
}

/// Tallest bar plus 10% headroom; never collapses below 1 so a flat series
/// still produces a drawable range.
fn y_axis_max(data: &[CashflowMonth]) -> f64 {
    let tallest = data
        .iter()
        .map(|entry| entry.income.max(entry.expense))
        .fold(0.0_f64, f64::max);
    (tallest * 1.1).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn month(tag: &str, income: f64, expense: f64) -> CashflowMonth {
        CashflowMonth {
            month: tag.to_string(),
            income,
            expense,
            net: income - expense,
        }
    }

    #[test]
    fn y_axis_covers_the_tallest_bar_with_headroom() {
        let data = vec![month("2024-01", 5000.0, 3000.0), month("2024-02", 4000.0, 6000.0)];
        let max = y_axis_max(&data);
        assert!(max > 6000.0);
        assert!(max <= 6600.0 + f64::EPSILON);
    }

    #[test]
    fn y_axis_never_collapses_to_zero() {
        let data = vec![month("2024-01", 0.0, 0.0)];
        assert_eq!(y_axis_max(&data), 1.0);
    }

    #[test]
    fn drawing_without_a_mounted_canvas_is_a_no_op() {
        let chart = CashflowChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw_chart(&[month("2024-01", 100.0, 50.0)]);
        chart.draw_chart(&[]);
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn chart_component_survives_draw_without_canvas() {
        let chart = CashflowChart {
            canvas_ref: NodeRef::default(),
        };
        chart.draw_chart(&[CashflowMonth {
            month: "2024-01".to_string(),
            income: 5000.0,
            expense: 3000.0,
            net: 2000.0,
        }]);
    }
}
