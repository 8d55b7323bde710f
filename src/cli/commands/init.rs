use crate::cli::context::Context;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty entries file, unless one already exists
pub fn handle(cli: &Cli, ctx: &Context) -> AppResult<()> {
    info("Initializing rTimecast…");

    let entries_override = cli.entries.as_ref().map(|_| ctx.entries_path.as_path());
    Config::init_all(&ctx.config_path, entries_override, ctx.test)?;

    success("rTimecast initialization completed!");
    Ok(())
}
