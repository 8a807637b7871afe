use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed.get("inputDir").is_some_and(Value::is_null),
        "Config should have a null 'inputDir' field"
    );
    assert_eq!(parsed["outputPath"], "./");
    assert_eq!(parsed["outputFileName"], "translations.d.ts");
    assert_eq!(parsed["localeFilesExtension"], ".json");
    assert_eq!(parsed["generateDocs"], true);
    assert_eq!(parsed["generateOnChange"], false);

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(test.command().arg("init"))?;
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Created translation-config.json"));

    assert!(test.root().join("translation-config.json").exists());
    let content = test.read_file("translation-config.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::with_file("translation-config.json", "{}")?;

    let result = run(test.command().arg("init"))?;
    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains("translation-config.json already exists"));
    assert_eq!(test.read_file("translation-config.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;
    test.command().arg("init").output()?;
    test.write_file("locales/en.json", r#"{ "hello": "Hello {name}" }"#)?;

    let result = run(test.generate_command().arg("locales"))?;
    assert_eq!(
        result.code,
        Some(0),
        "generate should work with the initialized config. stderr: {}",
        result.stderr
    );
    assert!(test.root().join("translations.d.ts").exists());

    Ok(())
}
