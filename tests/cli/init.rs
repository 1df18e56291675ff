use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run_json, texts};

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("init").output()?;
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Created .i18nrc.json"));

    let content = test.read_file(".i18nrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;
    assert_eq!(parsed["pattern"], "**/*.php");
    assert_eq!(parsed["minBytes"], 2);
    assert_eq!(parsed["contextLines"], 5);
    assert!(parsed.get("checkedAttributes").is_some());
    assert!(content.contains("\n  \""), "Config should use 2-space indentation");

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".i18nrc.json", "{}")?;

    let output = test.command().arg("init").output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));
    assert_eq!(test.read_file(".i18nrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("resources/views/home.blade.php", "<h1>Welcome</h1>\n")?;

    let (output, records) = run_json(&mut test.extract_command())?;
    assert!(output.status.success());
    assert_eq!(texts(&records), vec!["Welcome"]);

    Ok(())
}
