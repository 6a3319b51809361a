pub mod dashboard;
pub mod forecast;
pub mod simulate;
pub mod upload;

pub use dashboard::DashboardPage;
pub use forecast::ForecastPage;
pub use simulate::SimulatePage;
pub use upload::UploadPage;

/// Top-level views reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Upload,
    Dashboard,
    Forecast,
    Simulate,
}
