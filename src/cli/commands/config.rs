use crate::cli::commands::Context;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;

/// Handle the `config` subcommand
pub fn handle(
    ctx: &Context,
    print_config: bool,
    edit_config: bool,
    editor: &Option<String>,
) -> AppResult<()> {
    if print_config {
        println!("📄 Current configuration:\n");
        println!("{}", ctx.cfg.to_yaml()?);
    }

    if edit_config {
        ConfigLogic::edit(&Config::config_file(), editor)?;
    }

    Ok(())
}
