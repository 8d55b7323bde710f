use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::models::DayPrediction;
use crate::ui::messages::header;
use crate::utils::colors::{colorize_kind, colorize_optional};
use crate::utils::formatting::{hours_or_dash, minutes_or_dash};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Predict { json } = cmd {
        let entries = ctx.load_entries()?;
        let predictions = ctx.engine()?.predictions(&entries, ctx.today);

        if *json {
            println!("{}", serde_json::to_string_pretty(&predictions)?);
        } else {
            header(format!("Predictions around {}", ctx.today));
            print!("{}", render(&predictions, ctx.cfg.show_weekday));
        }
    }
    Ok(())
}

fn render(predictions: &[DayPrediction], show_weekday: bool) -> String {
    let mut table = Table::new(vec![
        Column::new("Day", 10),
        Column::new("Date", if show_weekday { 14 } else { 10 }),
        Column::new("Kind", 9),
        Column::new("Hours", 6),
        Column::new("Break", 7),
        Column::new("Depart", 6),
    ]);

    for p in predictions {
        let date = if show_weekday {
            p.date.format("%Y-%m-%d %a").to_string()
        } else {
            p.date.format("%Y-%m-%d").to_string()
        };
        let kind = if p.is_actual { "actual" } else { "forecast" };
        table.add_row(vec![
            p.label.to_string(),
            date,
            colorize_kind(kind, !p.is_actual),
            colorize_optional(&hours_or_dash(p.work_hours())),
            colorize_optional(&minutes_or_dash(p.break_minutes())),
            colorize_optional(p.departure().unwrap_or("--:--")),
        ]);
    }

    table.render()
}
