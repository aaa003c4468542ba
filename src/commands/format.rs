//! Format command - render a log template the way the helpers log it

use elfproef::config::Config;
use elfproef::logging::{Level, LogHelper, RuntimeContext};
use elfproef::output::{OperationResult, OutputMode};

/// Render `template` with positional `args` behind the configured prefix
pub fn format(template: &str, args: &[String], caller: &str, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load()?;
    let helper = LogHelper::new(&config.logging, caller, &RuntimeContext::default());

    helper.debug(template, args);

    OperationResult {
        success: true,
        message: helper.line(Level::Info, template, args),
    }
    .render(mode);
    Ok(())
}
