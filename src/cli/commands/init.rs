use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(force: bool) -> AppResult<()> {
    let path = Config::init(force)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
