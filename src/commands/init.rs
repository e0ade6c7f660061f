use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# cmdcov configuration

# Target executable or jar; jars are launched with `java -jar`
artifact = "fcli-core/fcli-app/build/libs/fcli.jar"

# Directory scanned for invocation strings
source_root = "fcli-other/fcli-functional-test/src"

# Report destination and format (html, json, markdown)
output = "build/reports/commandCoverage/functional-test-command-coverage.html"
format = "html"

# Aliases starting with this prefix also match without it
invocation_prefix = "fcli "

# Fail when coverage drops below this percentage
# min_coverage = 60.0

# List aliases next to each uncovered command
show_aliases = false

skip = false

[invocation]
# java = "/usr/lib/jvm/default/bin/java"
args = ["util", "all-commands", "ls", "-q", "runnable && !hidden", "-o", "csv=command,fullAliasesString"]
"#;

pub fn init_config(force: bool) -> Result<()> {
    let path = init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", path.display());
    Ok(())
}

pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG)?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_config;
    use crate::inventory::DEFAULT_LIST_ARGS;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_parses() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        let args = config.invocation.unwrap().args.unwrap();
        assert_eq!(args, DEFAULT_LIST_ARGS);
        assert_eq!(config.invocation_prefix.as_deref(), Some("fcli "));
    }

    #[test]
    fn test_init_refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        init_config_in(dir.path(), false).unwrap();
        assert!(init_config_in(dir.path(), false).is_err());
        assert!(init_config_in(dir.path(), true).is_ok());
    }
}
