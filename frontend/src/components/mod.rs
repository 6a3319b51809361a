pub mod charts;
pub mod csv_upload;
pub mod date_range_selector;
pub mod navbar;
pub mod simulation_form;
pub mod simulation_result;
pub mod summary_cards;

pub use csv_upload::CsvUpload;
pub use date_range_selector::DateRangeSelector;
pub use navbar::Navbar;
pub use simulation_form::SimulationForm;
pub use simulation_result::SimulationResultCard;
pub use summary_cards::SummaryCards;
