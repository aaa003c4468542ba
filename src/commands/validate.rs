//! Validate command - check candidates against the eleven-test

use log::debug;

use elfproef::output::{OutputMode, ValidateResult, Verdict};

/// Check every candidate and exit with status 1 if any is invalid
pub fn validate(candidates: &[String], mode: OutputMode) -> anyhow::Result<()> {
    let verdicts: Vec<Verdict> = candidates.iter().map(|c| Verdict::check(c)).collect();
    debug!(
        "{} of {} candidate(s) valid",
        verdicts.iter().filter(|v| v.valid).count(),
        verdicts.len()
    );

    let result = ValidateResult::new(verdicts);
    result.render(mode);

    if !result.all_valid {
        std::process::exit(1);
    }
    Ok(())
}
