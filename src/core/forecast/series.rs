use super::MAX_HORIZON_DAYS;
use super::params::ForecastParams;
use super::sample::{SampleMetrics, select_sample, worked_corpus};
use crate::core::calculator::{ewma, latest_clock_out, total_break_minutes, variance, work_minutes};
use crate::models::{ForecastPoint, TimeEntry};
use crate::utils::date::{shift_days, short_label};
use crate::utils::formatting::round_to;
use crate::utils::time::minutes_of_day;
use chrono::NaiveDate;
use tracing::debug;

pub(crate) fn forecast_series(
    entries: &[TimeEntry],
    today: NaiveDate,
    future_days: u32,
    params: &ForecastParams,
) -> Vec<ForecastPoint> {
    let historical: Vec<&TimeEntry> = worked_corpus(entries)
        .into_iter()
        .filter(|e| e.date < today)
        .collect();

    let history_days = params.history_days.min(MAX_HORIZON_DAYS);
    let future_days = future_days.min(MAX_HORIZON_DAYS);
    let mut points =
        Vec::with_capacity(history_days.saturating_add(future_days).saturating_add(1) as usize);

    for back in (1..=history_days as i64).rev() {
        let date = shift_days(today, -back);
        points.push(observed_point(&historical, date));
    }

    // Dispersion baseline: every past worked day, whatever its weekday.
    let global = SampleMetrics::collect(&historical);
    let global_office = global.office_hours();

    for offset in 0..=future_days {
        let date = shift_days(today, offset as i64);
        let sample = select_sample(&historical, date, params.min_weekday_samples);

        if sample.is_empty() {
            debug!(%date, "no history, using default forecast point");
            points.push(default_point(date, params));
            continue;
        }

        let metrics = SampleMetrics::collect(&sample);
        let office = ewma(&metrics.work_minutes, params.alpha) / 60.0;
        let brk = ewma(&metrics.break_minutes, params.alpha);
        let departure = if metrics.departure_minutes.is_empty() {
            params.default_departure_minutes as f64
        } else {
            ewma(&metrics.departure_minutes, params.alpha)
        };

        let scale = params.scale_factor(offset);
        let spread = |values: &[f64], center: f64| variance(values, center).sqrt() * scale;

        points.push(ForecastPoint {
            date,
            label: short_label(date),
            total_office_hours: Some(round_to(office, 1)),
            break_minutes: Some(brk.round() as i64),
            departure_minutes: Some(departure.round() as i64),
            is_forecast: true,
            variance_office: Some(round_to(spread(&global_office, office), 1)),
            variance_break: Some(spread(&global.break_minutes, brk).round() as i64),
            variance_departure: Some(spread(&global.departure_minutes, departure).round() as i64),
        });
    }

    points
}

fn observed_point(historical: &[&TimeEntry], date: NaiveDate) -> ForecastPoint {
    let label = short_label(date);
    match historical.iter().find(|e| e.date == date) {
        Some(entry) => ForecastPoint {
            date,
            label,
            total_office_hours: Some(round_to(work_minutes(entry) as f64 / 60.0, 2)),
            break_minutes: Some(total_break_minutes(&entry.sessions)),
            departure_minutes: latest_clock_out(entry).map(minutes_of_day),
            is_forecast: false,
            variance_office: None,
            variance_break: None,
            variance_departure: None,
        },
        None => ForecastPoint::gap(date, label),
    }
}

fn default_point(date: NaiveDate, params: &ForecastParams) -> ForecastPoint {
    ForecastPoint {
        date,
        label: short_label(date),
        total_office_hours: Some(round_to(params.default_work_minutes / 60.0, 1)),
        break_minutes: Some(params.default_break_minutes.round() as i64),
        departure_minutes: Some(params.default_departure_minutes),
        is_forecast: true,
        variance_office: Some(0.0),
        variance_break: Some(0),
        variance_departure: Some(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkSession;
    use crate::utils::date::parse_date;
    use crate::utils::time::parse_time;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    fn day(date: &str, clock_in: &str, clock_out: &str) -> TimeEntry {
        let s = WorkSession::new("s", parse_time(clock_in).unwrap())
            .with_clock_out(parse_time(clock_out).unwrap());
        TimeEntry::work(date, d(date), vec![s])
    }

    #[test]
    fn window_layout() {
        let points = forecast_series(&[], d("2025-06-18"), 7, &ForecastParams::default());
        assert_eq!(points.len(), 38);
        assert_eq!(points[0].date, d("2025-05-19"));
        assert_eq!(points[29].date, d("2025-06-17"));
        assert_eq!(points[30].date, d("2025-06-18"));
        assert_eq!(points[37].date, d("2025-06-25"));
        assert_eq!(points[0].label, "May 19");
    }

    #[test]
    fn observed_day_rounds_to_two_decimals() {
        let entries = vec![day("2025-06-17", "09:00", "17:10")];
        let points = forecast_series(&entries, d("2025-06-18"), 0, &ForecastParams::default());
        let p = &points[29];
        assert!(!p.is_forecast);
        assert_eq!(p.total_office_hours, Some(8.17));
        assert_eq!(p.break_minutes, Some(0));
        assert_eq!(p.departure_minutes, Some(17 * 60 + 10));
        assert_eq!(p.variance_office, None);
    }

    #[test]
    fn today_entry_is_not_history() {
        let entries = vec![day("2025-06-18", "09:00", "10:00")];
        let points = forecast_series(&entries, d("2025-06-18"), 0, &ForecastParams::default());
        let today = &points[30];
        assert!(today.is_forecast);
        assert_eq!(today.total_office_hours, Some(8.0));
        assert_eq!(today.departure_minutes, Some(1050));
        assert_eq!(today.variance_office, Some(0.0));
    }

    #[test]
    fn band_widens_with_horizon() {
        let entries = vec![
            day("2025-06-10", "09:00", "17:00"),
            day("2025-06-11", "09:00", "18:00"),
            day("2025-06-12", "09:00", "16:00"),
            day("2025-06-13", "09:00", "17:30"),
        ];
        let points = forecast_series(&entries, d("2025-06-18"), 7, &ForecastParams::default());
        let first = points[30].variance_departure.unwrap();
        let last = points[37].variance_departure.unwrap();
        assert!(first > 0);
        assert!(last > first);
    }

    #[test]
    fn band_is_spread_around_prediction() {
        let brk = |start: &str, end: &str| (parse_time(start).unwrap(), parse_time(end).unwrap());
        let (b1, e1) = brk("12:00", "12:30");
        let (b2, e2) = brk("12:00", "13:30");
        // Mon 480 min, 30 min break, out 17:00; Tue 540 min, 90 min break, out 18:00.
        let entries = vec![
            TimeEntry::work(
                "mon",
                d("2025-06-16"),
                vec![WorkSession::new("s1", parse_time("09:00").unwrap())
                    .with_clock_out(parse_time("17:00").unwrap())
                    .with_break(b1, e1)],
            ),
            TimeEntry::work(
                "tue",
                d("2025-06-17"),
                vec![WorkSession::new("s2", parse_time("09:00").unwrap())
                    .with_clock_out(parse_time("18:00").unwrap())
                    .with_break(b2, e2)],
            ),
        ];
        let points = forecast_series(&entries, d("2025-06-18"), 7, &ForecastParams::default());

        // EWMA: work 501 min, break 51, departure 1041 (17:21).
        // Squared deviations sum to 0.545 h² and 1962 min², over n - 1 = 1.
        let today = &points[30];
        assert_eq!(today.break_minutes, Some(51));
        assert_eq!(today.departure_minutes, Some(1041));
        assert_eq!(today.variance_office, Some(0.7));
        assert_eq!(today.variance_break, Some(44));
        assert_eq!(today.variance_departure, Some(44));

        // Seven days out the spread is scaled by 1 + 7 * 0.15.
        let week_out = &points[37];
        assert_eq!(week_out.date, d("2025-06-25"));
        assert_eq!(week_out.variance_office, Some(1.5));
        assert_eq!(week_out.variance_break, Some(91));
        assert_eq!(week_out.variance_departure, Some(91));
    }

    #[test]
    fn horizon_is_capped() {
        let points = forecast_series(&[], d("2025-06-18"), u32::MAX, &ForecastParams::default());
        assert_eq!(points.len(), 30 + MAX_HORIZON_DAYS as usize + 1);
        assert!(points.iter().skip(30).all(|p| p.is_forecast));

        let params = ForecastParams {
            history_days: u32::MAX,
            ..ForecastParams::default()
        };
        let points = forecast_series(&[], d("2025-06-18"), 0, &params);
        assert_eq!(points.len(), MAX_HORIZON_DAYS as usize + 1);
        assert_eq!(points[0].date, shift_days(d("2025-06-18"), -(MAX_HORIZON_DAYS as i64)));
    }
}
