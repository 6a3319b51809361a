pub mod cashflow_chart;
pub mod forecast_chart;

pub use cashflow_chart::CashflowChart;
pub use forecast_chart::ForecastChart;
