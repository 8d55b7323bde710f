use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::core::summary::{month_summary, week_dates, week_summary, weekly_totals};
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::colorize_optional;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Summary { week, weeks, month } = cmd {
        let entries = ctx.load_entries()?;
        let dates = week_dates(ctx.today, *week);
        let summary = week_summary(&entries, ctx.today, *week);

        header(format!("Week {} → {}", dates[0], dates[6]));

        let mut table = Table::new(vec![
            Column::new("Day", 4),
            Column::new("Date", 10),
            Column::new("Office", 8),
            Column::new("Break", 8),
            Column::new("Net", 8),
            Column::new("Sessions", 8),
        ]);
        for d in &summary.days {
            let dash_if_zero = |m: i64| {
                if d.total_minutes == 0 {
                    colorize_optional("--:--")
                } else {
                    mins2readable(m, false, true)
                }
            };
            table.add_row(vec![
                d.day_label.clone(),
                d.date.to_string(),
                dash_if_zero(d.total_minutes),
                dash_if_zero(d.break_minutes),
                dash_if_zero(d.net_minutes),
                d.sessions.to_string(),
            ]);
        }
        print!("{}", table.render());

        println!();
        println!("Total:        {:.1}h", summary.total_hours);
        println!("Average/day:  {:.1}h", summary.avg_hours_per_day);
        println!("Breaks:       {} min", summary.total_break_minutes);
        println!("Days worked:  {}", summary.days_worked);
        if let Some(longest) = &summary.longest_day {
            println!(
                "Longest day:  {} {} ({})",
                longest.day_label,
                longest.date,
                mins2readable(longest.total_minutes, false, false)
            );
        }

        if let Some(n) = weeks {
            println!();
            header(format!("Last {n} weeks"));
            for w in weekly_totals(&entries, ctx.today, *n) {
                println!("{:<18} {:>6.1}h", w.label, w.total_hours);
            }
        }

        if let Some(offset) = month {
            let block = month_summary(&entries, ctx.today, *offset);
            println!();
            header(format!("{} (4 weeks)", block.month_label));
            for w in &block.week_summaries {
                println!("{:<18} {:>6.1}h", w.label, w.total_hours);
            }
        }
    }
    Ok(())
}
