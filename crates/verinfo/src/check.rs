use crate::prelude::{println, *};
use colored::Colorize;
use serde::Serialize;
use verinfo_core::tag::{is_up_to_date, strip_tag_prefix};
use verinfo_core::version::{parse, VersionRecord};

#[derive(Debug, clap::Args, Clone)]
pub struct CheckOptions {
    /// The version in use
    pub current: String,

    /// The version to compare against
    pub latest: String,

    /// Strip a leading 'v' (as in "v1.2.3") before parsing
    #[arg(long, env = "VERINFO_STRIP_PREFIX", default_value = "false")]
    pub strip_prefix: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct CheckOutput {
    pub current: VersionRecord,
    pub latest: VersionRecord,
    pub up_to_date: bool,
}

/// Module entry point
///
/// Exits through the error path when `current` is older than `latest`, so
/// scripts can rely on the exit status.
pub fn run(options: CheckOptions, global: crate::Global) -> Result<()> {
    let output = check_data(&options);

    if global.verbose {
        println!("Current version: {}", output.current);
        println!("Latest version: {}", output.latest);
    }

    if options.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output)
                .map_err(|e| eyre!("JSON serialization failed: {}", e))?
        );
    } else if output.up_to_date {
        println!("{}", format!("{} is up to date", output.current).green());
    }

    ensure_up_to_date(&output)
}

/// Turn an out-of-date comparison into an error
pub fn ensure_up_to_date(output: &CheckOutput) -> Result<()> {
    if !output.up_to_date {
        return Err(Error::OutOfDate {
            current: output.current.to_string(),
            latest: output.latest.to_string(),
        }
        .into());
    }

    Ok(())
}

/// Parse both versions and compare them
pub fn check_data(options: &CheckOptions) -> CheckOutput {
    let prepare = |version: &str| {
        if options.strip_prefix {
            parse(strip_tag_prefix(version))
        } else {
            parse(version)
        }
    };

    let current = prepare(&options.current);
    let latest = prepare(&options.latest);
    let up_to_date = is_up_to_date(&current, &latest);
    log::debug!("{current} >= {latest}: {up_to_date}");

    CheckOutput {
        current,
        latest,
        up_to_date,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(current: &str, latest: &str, strip_prefix: bool) -> CheckOptions {
        CheckOptions {
            current: current.to_string(),
            latest: latest.to_string(),
            strip_prefix,
            json: false,
        }
    }

    #[test]
    fn test_check_data_up_to_date() {
        assert!(check_data(&options("1.2.3", "1.2.3", false)).up_to_date);
        assert!(check_data(&options("1.3", "1.2.9", false)).up_to_date);
    }

    #[test]
    fn test_check_data_out_of_date() {
        let output = check_data(&options("1.2.3", "1.2.3-1", false));
        assert!(!output.up_to_date);
        assert_eq!(output.latest.build_number(), 1);
    }

    #[test]
    fn test_check_data_strip_prefix() {
        // Without stripping, "v2.0.0" has no numeric prefix and compares as 0.0.0
        assert!(check_data(&options("1.0.0", "v2.0.0", false)).up_to_date);
        assert!(!check_data(&options("1.0.0", "v2.0.0", true)).up_to_date);
    }

    #[test]
    fn test_ensure_up_to_date_passes() {
        let output = check_data(&options("1.2.4", "1.2.3", false));
        assert!(ensure_up_to_date(&output).is_ok());
    }

    #[test]
    fn test_ensure_up_to_date_out_of_date() {
        let output = check_data(&options("1.2.3", "1.2.4", false));
        let err = ensure_up_to_date(&output).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::OutOfDate { current, latest }) if current == "1.2.3" && latest == "1.2.4"
        ));
        assert_eq!(err.to_string(), "1.2.3 is older than 1.2.4");
    }

    #[test]
    fn test_ensure_up_to_date_reports_inputs_without_numeric_prefix() {
        let output = check_data(&options("nightly", "0.0.1", false));
        let err = ensure_up_to_date(&output).unwrap_err();
        assert_eq!(err.to_string(), "nightly is older than 0.0.1");
    }
}
