pub mod provider;
pub mod selectors;
pub mod sequence;
pub mod state;

pub use provider::{use_finance_store, FinanceStore, FinanceStoreProvider};
pub use state::{AppState, DateRange, FinanceState, MonthBounds};
