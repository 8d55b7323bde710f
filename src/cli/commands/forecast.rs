use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::ForecastPoint;
use crate::ui::messages::header;
use crate::utils::colors::{colorize_kind, colorize_optional};
use crate::utils::formatting::{clock_or_dash, hours_or_dash, minutes_or_dash};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Forecast {
        days,
        json,
        forecast_only,
    } = cmd
    {
        let entries = ctx.load_entries()?;
        let future_days = ctx.future_days(*days);
        let mut points = ctx.engine()?.time_series(&entries, ctx.today, future_days);

        if *forecast_only {
            points.retain(|p| p.is_forecast);
        }

        if *json {
            println!("{}", serde_json::to_string_pretty(&points)?);
        } else {
            header(format!(
                "Forecast from {} ({} days ahead)",
                ctx.today, future_days
            ));
            print!("{}", render(&points));
        }
    }
    Ok(())
}

fn render(points: &[ForecastPoint]) -> String {
    let mut table = Table::new(vec![
        Column::new("Date", 10),
        Column::new("Day", 7),
        Column::new("Kind", 9),
        Column::new("Office", 7),
        Column::new("±Office", 7),
        Column::new("Break", 7),
        Column::new("±Break", 6),
        Column::new("Depart", 6),
        Column::new("±Depart", 7),
    ]);

    for p in points {
        let spread = |v: Option<String>| colorize_optional(&v.unwrap_or_else(|| "--".into()));
        let kind = if p.is_forecast { "forecast" } else { "actual" };
        table.add_row(vec![
            p.date.format("%Y-%m-%d").to_string(),
            p.label.clone(),
            if p.is_gap() {
                colorize_optional("--")
            } else {
                colorize_kind(kind, p.is_forecast)
            },
            colorize_optional(&hours_or_dash(p.total_office_hours)),
            spread(p.variance_office.map(|v| format!("{v:.1}"))),
            colorize_optional(&minutes_or_dash(p.break_minutes)),
            spread(p.variance_break.map(|v| v.to_string())),
            colorize_optional(&clock_or_dash(p.departure_minutes)),
            spread(p.variance_departure.map(|v| v.to_string())),
        ]);
    }

    table.render()
}
