pub mod use_simulation;
pub mod use_upload_transactions;

pub use use_simulation::{use_simulation, SimulationDraft};
pub use use_upload_transactions::use_upload_transactions;
