use crate::prelude::{eprintln, print, *};
use verinfo_core::properties::{render_properties, to_properties, PropertyPrefix, DEFAULT_PREFIX};
use verinfo_core::tag::strip_tag_prefix;
use verinfo_core::version::parse;

#[derive(Debug, clap::Args, Clone)]
pub struct PropertiesOptions {
    /// Version string to render
    pub version: String,

    /// Prefix for every property key
    #[arg(long, env = "VERINFO_PROPERTY_PREFIX", default_value = DEFAULT_PREFIX)]
    pub prefix: String,

    /// Strip a leading 'v' (as in "v1.2.3") before parsing
    #[arg(long, env = "VERINFO_STRIP_PREFIX", default_value = "false")]
    pub strip_prefix: bool,
}

pub fn run(options: PropertiesOptions, global: crate::Global) -> Result<()> {
    let output = properties_data(&options)?;

    if global.verbose {
        eprintln!("Properties for {:?}:", options.version);
    }

    print!("{output}");

    Ok(())
}

/// Parse the requested version and render it as `key=value` lines
pub fn properties_data(options: &PropertiesOptions) -> Result<String> {
    let prefix = PropertyPrefix::new(options.prefix.as_str())
        .map_err(|e| eyre!("Invalid --prefix {:?}: {}", options.prefix, e))?;

    let source = if options.strip_prefix {
        strip_tag_prefix(&options.version)
    } else {
        options.version.as_str()
    };

    let version = parse(source);
    log::debug!("{:?} parsed as {version}", options.version);

    Ok(render_properties(&to_properties(&version, &prefix)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(version: &str, prefix: &str) -> PropertiesOptions {
        PropertiesOptions {
            version: version.to_string(),
            prefix: prefix.to_string(),
            strip_prefix: false,
        }
    }

    #[test]
    fn test_properties_data_default_prefix() {
        let output = properties_data(&options("1.2.3-SNAPSHOT", DEFAULT_PREFIX)).unwrap();

        assert!(output.starts_with("parsedVersion.majorVersion=1\n"));
        assert!(output.contains("parsedVersion.qualifier=SNAPSHOT\n"));
        assert!(output.contains("parsedVersion.nextIncrementalVersion=4\n"));
        assert_eq!(output.lines().count(), 9);
    }

    #[test]
    fn test_properties_data_strip_prefix() {
        let mut opts = options("v2.1", "release");
        opts.strip_prefix = true;

        let output = properties_data(&opts).unwrap();
        assert!(output.contains("release.majorVersion=2\n"));
        assert!(output.contains("release.minorVersion=1\n"));
    }

    #[test]
    fn test_properties_data_invalid_prefix() {
        let err = properties_data(&options("1.0", "bad prefix")).unwrap_err();
        assert!(err.to_string().contains("Invalid --prefix"));
    }
}
