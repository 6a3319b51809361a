use chrono::NaiveDate;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::services::date_utils::{months_back, start_of_year, today_naive};
use crate::store::{use_finance_store, DateRange};

/// Preset ranges for the dashboard filter. Presets resolve against the
/// browser clock at selection time, not at render time.
#[function_component(DateRangeSelector)]
pub fn date_range_selector() -> Html {
    let store = use_finance_store();

    let onchange = {
        let store = store.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            store.set_date_range(range_for_preset(&select.value(), today_naive()));
        })
    };

    html! {
        <select class="range-select" {onchange}>
            <option value="all_time" selected=true>{"All Time"}</option>
            <option value="12_months">{"Last 12 Months"}</option>
            <option value="ytd">{"Year to Date"}</option>
        </select>
    }
}

fn range_for_preset(preset: &str, today: NaiveDate) -> DateRange {
    match preset {
        "12_months" => DateRange {
            start: Some(months_back(today, 12)),
            end: Some(today),
        },
        "ytd" => DateRange {
            start: Some(start_of_year(today)),
            end: Some(today),
        },
        _ => DateRange::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn all_time_clears_the_filter() {
        assert_eq!(
            range_for_preset("all_time", date(2024, 8, 15)),
            DateRange::default()
        );
    }

    #[test]
    fn unknown_presets_fall_back_to_all_time() {
        assert_eq!(
            range_for_preset("whatever", date(2024, 8, 15)),
            DateRange::default()
        );
    }

    #[test]
    fn last_twelve_months_spans_back_a_year() {
        let range = range_for_preset("12_months", date(2024, 8, 15));
        assert_eq!(range.start, Some(date(2023, 8, 15)));
        assert_eq!(range.end, Some(date(2024, 8, 15)));
    }

    #[test]
    fn year_to_date_starts_at_january_first() {
        let range = range_for_preset("ytd", date(2024, 8, 15));
        assert_eq!(range.start, Some(date(2024, 1, 1)));
        assert_eq!(range.end, Some(date(2024, 8, 15)));
    }
}
