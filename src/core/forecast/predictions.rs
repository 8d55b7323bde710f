use super::params::ForecastParams;
use super::sample::{SampleMetrics, select_sample, worked_corpus};
use crate::core::calculator::{ewma, latest_clock_out, total_break_minutes, work_minutes};
use crate::models::{DayLabel, DayPrediction, TimeEntry};
use crate::utils::date::shift_days;
use crate::utils::formatting::round_to;
use crate::utils::time::{format_clock_minutes, format_time};
use chrono::NaiveDate;
use tracing::debug;

pub(crate) fn predict_days(
    entries: &[TimeEntry],
    today: NaiveDate,
    params: &ForecastParams,
) -> [DayPrediction; 3] {
    let corpus = worked_corpus(entries);
    DayLabel::ALL.map(|label| predict_day(&corpus, today, label, params))
}

fn predict_day(
    corpus: &[&TimeEntry],
    today: NaiveDate,
    label: DayLabel,
    params: &ForecastParams,
) -> DayPrediction {
    let date = shift_days(today, label.offset());

    // Today's data is still being recorded; it is always forecast.
    if label != DayLabel::Today
        && let Some(entry) = corpus.iter().find(|e| e.date == date)
    {
        return DayPrediction::actual(
            label,
            date,
            work_minutes(entry) as f64 / 60.0,
            total_break_minutes(&entry.sessions),
            latest_clock_out(entry).map(format_time),
        );
    }

    let sample = select_sample(corpus, date, params.min_weekday_samples);
    if sample.is_empty() {
        debug!(%date, "no history, using default prediction");
        return DayPrediction::predicted(
            label,
            date,
            round_to(params.default_work_minutes / 60.0, 1),
            params.default_break_minutes.round() as i64,
            params.default_departure(),
        );
    }

    let metrics = SampleMetrics::collect(&sample);
    let work = ewma(&metrics.work_minutes, params.alpha);
    let brk = ewma(&metrics.break_minutes, params.alpha);
    let clock_in = if metrics.clock_in_minutes.is_empty() {
        params.default_clock_in_minutes as f64
    } else {
        ewma(&metrics.clock_in_minutes, params.alpha)
    };

    DayPrediction::predicted(
        label,
        date,
        round_to(work / 60.0, 1),
        brk.round() as i64,
        format_clock_minutes(clock_in + work),
    )
}
