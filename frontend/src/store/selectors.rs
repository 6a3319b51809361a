use shared::CashflowMonth;

use crate::services::date_utils::parse_month_start;
use crate::store::state::DateRange;

/// Apply the active date filter to a cashflow series. The filter only
/// engages when both endpoints are set; while it is active, month tags
/// that fail to parse are dropped because they cannot be compared.
pub fn filter_by_range(series: &[CashflowMonth], range: &DateRange) -> Vec<CashflowMonth> {
    let (start, end) = match (range.start, range.end) {
        (Some(start), Some(end)) => (start, end),
        _ => return series.to_vec(),
    };

    series
        .iter()
        .filter(|entry| {
            parse_month_start(&entry.month)
                .map(|month_start| month_start >= start && month_start <= end)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

/// Monthly averages derived from a (filtered) cashflow series, feeding the
/// dashboard summary cards.
#[derive(Debug, Clone, PartialEq)]
pub struct CashflowSummary {
    pub avg_income: f64,
    pub avg_expense: f64,
    pub net_buffer: f64,
    pub savings_rate: f64,
}

impl CashflowSummary {
    /// None when the series is empty. A zero-income series yields a zero
    /// savings rate rather than NaN.
    pub fn from_series(series: &[CashflowMonth]) -> Option<Self> {
        if series.is_empty() {
            return None;
        }

        let count = series.len() as f64;
        let total_income: f64 = series.iter().map(|entry| entry.income).sum();
        let total_expense: f64 = series.iter().map(|entry| entry.expense).sum();
        let avg_income = total_income / count;
        let avg_expense = total_expense / count;
        let net_buffer = avg_income - avg_expense;
        let savings_rate = if avg_income > 0.0 {
            net_buffer / avg_income * 100.0
        } else {
            0.0
        };

        Some(Self {
            avg_income,
            avg_expense,
            net_buffer,
            savings_rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn month(tag: &str, income: f64, expense: f64) -> CashflowMonth {
        CashflowMonth {
            month: tag.to_string(),
            income,
            expense,
            net: income - expense,
        }
    }

    fn full_year() -> Vec<CashflowMonth> {
        (1..=12)
            .map(|m| month(&format!("2024-{:02}", m), 5000.0, 3000.0))
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn boundaries_are_inclusive() {
        let range = DateRange {
            start: Some(date(2024, 3, 1)),
            end: Some(date(2024, 5, 1)),
        };
        let filtered = filter_by_range(&full_year(), &range);
        let tags: Vec<&str> = filtered.iter().map(|m| m.month.as_str()).collect();
        assert_eq!(tags, vec!["2024-03", "2024-04", "2024-05"]);
    }

    #[test]
    fn absent_endpoints_mean_no_filter() {
        let filtered = filter_by_range(&full_year(), &DateRange::default());
        assert_eq!(filtered.len(), 12);
    }

    #[test]
    fn a_half_open_range_does_not_filter() {
        let range = DateRange {
            start: Some(date(2024, 3, 1)),
            end: None,
        };
        assert_eq!(filter_by_range(&full_year(), &range).len(), 12);
    }

    #[test]
    fn unparseable_months_are_dropped_only_while_filtering() {
        let series = vec![month("2024-03", 1.0, 1.0), month("not-a-month", 1.0, 1.0)];

        let unfiltered = filter_by_range(&series, &DateRange::default());
        assert_eq!(unfiltered.len(), 2);

        let range = DateRange {
            start: Some(date(2024, 1, 1)),
            end: Some(date(2024, 12, 31)),
        };
        let filtered = filter_by_range(&series, &range);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].month, "2024-03");
    }

    #[test]
    fn summary_math_matches_the_card_definitions() {
        let series = vec![
            month("2024-01", 4000.0, 2500.0),
            month("2024-02", 6000.0, 3500.0),
        ];
        let summary = CashflowSummary::from_series(&series).unwrap();
        assert_eq!(summary.avg_income, 5000.0);
        assert_eq!(summary.avg_expense, 3000.0);
        assert_eq!(summary.net_buffer, 2000.0);
        assert_eq!(summary.savings_rate, 40.0);
    }

    #[test]
    fn zero_income_yields_zero_savings_rate() {
        let series = vec![month("2024-01", 0.0, 500.0)];
        let summary = CashflowSummary::from_series(&series).unwrap();
        assert_eq!(summary.savings_rate, 0.0);
        assert_eq!(summary.net_buffer, -500.0);
    }

    #[test]
    fn empty_series_has_no_summary() {
        assert_eq!(CashflowSummary::from_series(&[]), None);
    }
}
