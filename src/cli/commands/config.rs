use crate::cli::context::Context;
use crate::cli::parser::Commands;
use crate::config::migrate::{fill_missing_keys, missing_keys};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, ctx: &Context) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
    } = cmd
    {
        let path = &ctx.config_path;

        if *print_config {
            info(format!("Current configuration ({}):\n", path.display()));
            println!("{}", serde_yaml::to_string(&ctx.cfg)?);
        }

        if (*check || *migrate) && !path.exists() {
            warning(format!(
                "No configuration file at {}; defaults are in use (run `rtimecast init`).",
                path.display()
            ));
            return Ok(());
        }

        if *check {
            let missing = missing_keys(path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
            }
            // Validate tuning values as well
            ctx.cfg.forecast_params()?;
        }

        if *migrate {
            let added = fill_missing_keys(path)?;
            if added.is_empty() {
                info("Configuration already up to date.");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
            }
        }
    }

    Ok(())
}
