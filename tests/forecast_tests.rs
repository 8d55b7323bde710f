use chrono::NaiveDate;
use rtimecast::core::calculator::{ewma, variance, work_minutes};
use rtimecast::models::{DayLabel, TimeEntry, WorkSession};
use rtimecast::utils::time::parse_time;
use rtimecast::core::forecast::MAX_HORIZON_DAYS;
use rtimecast::{ForecastEngine, ForecastParams, get_forecast_time_series, get_predictions};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn session(clock_in: &str, clock_out: &str) -> WorkSession {
    WorkSession::new("s", parse_time(clock_in).unwrap()).with_clock_out(parse_time(clock_out).unwrap())
}

fn work(date: &str, clock_in: &str, clock_out: &str) -> TimeEntry {
    TimeEntry::work(date, d(date), vec![session(clock_in, clock_out)])
}

const TODAY: &str = "2025-06-18"; // Wednesday

#[test]
fn test_work_minutes_cases() {
    assert_eq!(work_minutes(&work("2025-06-16", "09:00", "17:00")), 480);
    assert_eq!(work_minutes(&work("2025-06-16", "23:00", "01:00")), 120);
}

#[test]
fn test_ewma_and_variance_properties() {
    assert_eq!(ewma(&[3.25], 0.35), 3.25);
    assert!((ewma(&[10.0, 20.0], 0.35) - (0.35 * 20.0 + 0.65 * 10.0)).abs() < 1e-9);
    assert_eq!(variance(&[4.0], 1.0), 0.0);
    assert_eq!(variance(&[], 1.0), 0.0);
}

#[test]
fn test_empty_log_uses_defaults_everywhere() {
    let preds = get_predictions(&[], d(TODAY));
    assert_eq!(preds.len(), 3);
    for p in &preds {
        assert!(!p.is_actual);
        assert_eq!(p.predicted_work_hours, Some(8.0));
        assert_eq!(p.predicted_break_minutes, Some(45));
        assert_eq!(p.predicted_departure.as_deref(), Some("17:30"));
    }

    let series = get_forecast_time_series(&[], d(TODAY), 7);
    assert_eq!(series.len(), 38);
    for p in &series[..30] {
        assert!(!p.is_forecast);
        assert!(p.is_gap());
    }
    for p in &series[30..] {
        assert!(p.is_forecast);
        assert_eq!(p.total_office_hours, Some(8.0));
        assert_eq!(p.break_minutes, Some(45));
        assert_eq!(p.departure_minutes, Some(1050));
        assert_eq!(p.variance_office, Some(0.0));
        assert_eq!(p.variance_break, Some(0));
        assert_eq!(p.variance_departure, Some(0));
    }
}

#[test]
fn test_yesterday_actual_today_never_actual() {
    let entries = vec![work("2025-06-17", "09:00", "17:30"), work(TODAY, "08:00", "09:00")];
    let [yesterday, today, tomorrow] = get_predictions(&entries, d(TODAY));

    assert_eq!(yesterday.label, DayLabel::Yesterday);
    assert!(yesterday.is_actual);
    assert_eq!(yesterday.predicted_work_hours, None);
    assert_eq!(yesterday.actual_work_hours, Some(8.5));
    assert_eq!(yesterday.actual_departure.as_deref(), Some("17:30"));

    assert_eq!(today.label, DayLabel::Today);
    assert!(!today.is_actual);
    assert_eq!(today.actual_work_hours, None);

    assert_eq!(tomorrow.date, d("2025-06-19"));
    assert!(!tomorrow.is_actual);
}

#[test]
fn test_tomorrow_with_entry_is_actual() {
    let entries = vec![work("2025-06-19", "10:00", "14:00")];
    let [_, _, tomorrow] = get_predictions(&entries, d(TODAY));
    assert!(tomorrow.is_actual);
    assert_eq!(tomorrow.actual_work_hours, Some(4.0));
}

#[test]
fn test_leave_and_empty_work_entries_are_ignored() {
    let entries = vec![
        TimeEntry::leave("l1", d("2025-06-17")),
        TimeEntry::work("w0", d("2025-06-16"), vec![]),
    ];
    let [yesterday, ..] = get_predictions(&entries, d(TODAY));
    assert!(!yesterday.is_actual);
    assert_eq!(yesterday.predicted_work_hours, Some(8.0));
}

#[test]
fn test_series_window_shape() {
    let series = get_forecast_time_series(&[work("2025-06-10", "09:00", "17:00")], d(TODAY), 7);
    assert_eq!(series.len(), 30 + 7 + 1);
    assert!(series[..30].iter().all(|p| !p.is_forecast));
    assert!(series[30..].iter().all(|p| p.is_forecast));
    assert!(series[..30].iter().all(|p| p.variance_office.is_none()));
    assert_eq!(series[30].date, d(TODAY));

    let observed = series.iter().find(|p| p.date == d("2025-06-10")).unwrap();
    assert_eq!(observed.total_office_hours, Some(8.0));
    assert_eq!(observed.departure_minutes, Some(17 * 60));
}

#[test]
fn test_constant_mondays_forecast_constant() {
    // Five Mondays, 7h 30m each; plus noisy other weekdays
    let mut entries: Vec<TimeEntry> = ["2025-05-12", "2025-05-19", "2025-05-26", "2025-06-02", "2025-06-09"]
        .iter()
        .map(|date| work(date, "08:30", "16:00"))
        .collect();
    entries.push(work("2025-06-10", "07:00", "19:00"));
    entries.push(work("2025-06-11", "10:00", "12:00"));

    let series = get_forecast_time_series(&entries, d(TODAY), 7);
    let monday = series
        .iter()
        .find(|p| p.is_forecast && p.date == d("2025-06-23"))
        .unwrap();
    assert_eq!(monday.total_office_hours, Some(7.5));
    assert_eq!(monday.departure_minutes, Some(16 * 60));
    assert!(monday.variance_office.unwrap() > 0.0);
}

#[test]
fn test_series_independent_of_input_order() {
    let a = vec![
        work("2025-06-10", "09:00", "17:00"),
        work("2025-06-12", "08:00", "18:00"),
        work("2025-06-16", "09:30", "16:00"),
    ];
    let mut b = a.clone();
    b.reverse();
    assert_eq!(
        get_forecast_time_series(&a, d(TODAY), 3),
        get_forecast_time_series(&b, d(TODAY), 3)
    );
}

#[test]
fn test_engine_respects_custom_params() {
    let params = ForecastParams {
        history_days: 14,
        default_work_minutes: 450.0,
        ..ForecastParams::default()
    };
    let engine = ForecastEngine::new(params);
    let series = engine.time_series(&[], d(TODAY), 2);
    assert_eq!(series.len(), 14 + 3);
    assert_eq!(series[14].total_office_hours, Some(7.5));

    let [_, today, _] = engine.predictions(&[], d(TODAY));
    assert_eq!(today.predicted_work_hours, Some(7.5));
}

#[test]
fn test_output_serializes_camel_case() {
    let [yesterday, ..] = get_predictions(&[work("2025-06-17", "09:00", "17:00")], d(TODAY));
    let json = serde_json::to_value(&yesterday).unwrap();
    assert_eq!(json["label"], "Yesterday");
    assert_eq!(json["isActual"], true);
    assert_eq!(json["actualWorkHours"], 8.0);
    assert!(json["predictedWorkHours"].is_null());

    let series = get_forecast_time_series(&[], d(TODAY), 0);
    let past = serde_json::to_value(&series[0]).unwrap();
    assert!(past.get("varianceOffice").is_none());
    let future = serde_json::to_value(&series[30]).unwrap();
    assert_eq!(future["varianceOffice"], 0.0);
    assert_eq!(future["departureMinutes"], 1050);
}

#[test]
fn test_unbounded_horizon_is_capped() {
    let series = get_forecast_time_series(&[work("2025-06-17", "09:00", "17:00")], d(TODAY), u32::MAX);
    assert_eq!(series.len(), 30 + MAX_HORIZON_DAYS as usize + 1);
    assert!(series.last().is_some_and(|p| p.is_forecast));
}
