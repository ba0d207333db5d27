use chrono::{Days, NaiveDate};
use log::error;

use crate::error::RatesError;
use crate::exchange_rate::ExchangeRecord;
use crate::rate_source::RateSource;

/// Records collected for a day range, plus the days that were skipped.
#[derive(Debug, Default)]
pub struct CollectReport {
    pub records: Vec<ExchangeRecord>,
    pub failures: Vec<RatesError>,
}

/// Inclusive span of `num_days` calendar days ending at `today`, oldest first.
/// Non-positive counts give an empty range; counts reaching past
/// `NaiveDate::MIN` are clamped to the representable span.
pub fn day_range(
    today: NaiveDate,
    num_days: i64,
) -> impl DoubleEndedIterator<Item = NaiveDate> {
    let span = (today - NaiveDate::MIN).num_days().saturating_add(1);
    let count = num_days.clamp(0, span) as u64;

    (0..count)
        .rev()
        .filter_map(move |offset| today.checked_sub_days(Days::new(offset)))
}

pub async fn collect_rates<S>(source: &S, today: NaiveDate, num_days: i64) -> CollectReport
where
    S: RateSource + ?Sized,
{
    let mut report = CollectReport::default();

    for date in day_range(today, num_days) {
        let record = match source.fetch(date).await {
            Ok(response) => ExchangeRecord::from_response(date, &response),
            Err(err) => Err(err),
        };

        match record {
            Ok(record) => report.records.push(record),
            Err(err) => {
                error!("{}", err);
                report.failures.push(err);
            }
        }
    }

    report
}
