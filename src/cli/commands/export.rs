use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Export {
        what,
        format,
        file,
        days,
        force,
    } = cmd
    {
        let entries = ctx.load_entries()?;
        let engine = ctx.engine()?;
        ExportLogic::export(
            &engine,
            &entries,
            ctx.today,
            *what,
            *format,
            file,
            ctx.future_days(*days),
            *force,
        )?;
    }
    Ok(())
}
