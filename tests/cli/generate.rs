use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, run};

fn cart_project() -> Result<CliTest> {
    let test = CliTest::with_file(
        "locales/en.json",
        r#"{ "cart": { "items": "{count} items", "empty": "Empty" } }"#,
    )?;
    test.write_file("locales/ru.json", r#"{ "cart": { "items": "{count} товаров" } }"#)?;
    Ok(test)
}

#[test]
fn test_generate_writes_declarations() -> Result<()> {
    let test = cart_project()?;

    let result = run(test.generate_command().arg("locales"))?;
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(
        result
            .stdout
            .contains("(2 keys, 2 languages from 2 locale files)")
    );

    let expected = [
        "export type TranslationKeys =",
        "  | \"cart.items\"",
        "  | \"cart.empty\";",
        "",
        "export type TranslationParamsMap = {",
        "  \"cart.items\": { count: string | number | Date };",
        "  \"cart.empty\": undefined;",
        "};",
        "",
        "export interface TranslationDocs {",
        "  /**",
        "   * {{count}} items / {{count}} товаров",
        "   *",
        "   * | lang | translation       |",
        "   * | ---- | ----------------- |",
        "   * | en   | {{count}} items   |",
        "   * | ru   | {{count}} товаров |",
        "   */",
        "  \"cart.items\": (params: { count: string | number | Date }) => string;",
        "  /**",
        "   * Empty",
        "   *",
        "   * | lang | translation |",
        "   * | ---- | ----------- |",
        "   * | en   | Empty       |",
        "   */",
        "  \"cart.empty\": () => string;",
        "}",
        "",
    ]
    .join("\n");
    assert_eq!(test.read_file("translations.d.ts")?, expected);

    Ok(())
}

#[test]
fn test_generate_reports_missing_translations() -> Result<()> {
    let test = cart_project()?;

    let result = run(test.generate_command().arg("locales"))?;
    assert_eq!(result.code, Some(0));
    assert!(
        result
            .stderr
            .contains("warning: 1 key is missing translations (use -v for details)")
    );

    let result = run(test.generate_command().args(["locales", "-v"]))?;
    assert!(
        result
            .stderr
            .contains("warning: \"cart.empty\" has no translation in: ru")
    );
    assert!(result.stdout.contains("locales/en.json"));
    assert!(result.stdout.contains("locales/ru.json"));

    Ok(())
}

#[test]
fn test_generate_strict_fails_on_missing_translations() -> Result<()> {
    let test = cart_project()?;

    let result = run(test.generate_command().args(["locales", "--strict"]))?;
    assert_eq!(result.code, Some(1));
    // The declarations are still written.
    assert!(test.root().join("translations.d.ts").exists());

    Ok(())
}

#[test]
fn test_generate_strict_passes_with_full_coverage() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", r#"{ "hello": "Hello" }"#)?;
    test.write_file("locales/de.json", r#"{ "hello": "Hallo" }"#)?;

    let result = run(test.generate_command().args(["locales", "--strict"]))?;
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(result.stderr.is_empty());

    Ok(())
}

#[test]
fn test_generate_strict_conflicts_with_generate_on_change() -> Result<()> {
    let test = CliTest::with_file(
        "translation-config.json",
        r#"{ "inputDir": "locales", "generateOnChange": true }"#,
    )?;
    test.write_file("locales/en.json", r#"{ "hello": "Hello" }"#)?;

    let result = run(test.generate_command().arg("--strict"))?;
    assert_eq!(result.code, Some(2));
    assert!(
        result
            .stderr
            .contains("'--strict' cannot be combined with 'generateOnChange'")
    );
    assert!(!test.root().join("translations.d.ts").exists());

    Ok(())
}

#[test]
fn test_generate_without_keys_is_an_error() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", "{}")?;

    let result = run(test.generate_command().arg("locales"))?;
    assert_eq!(result.code, Some(2));
    assert!(
        result
            .stderr
            .contains("error: No translation keys found in the locale files")
    );
    assert!(!test.root().join("translations.d.ts").exists());

    Ok(())
}

#[test]
fn test_generate_with_broken_locale_file_is_an_error() -> Result<()> {
    let test = CliTest::with_file("locales/en.json", r#"{ "hello": "Hello" }"#)?;
    test.write_file("locales/de.json", r#"{ "hello": "Hallo", }"#)?;

    let result = run(test.generate_command().arg("locales"))?;
    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Failed to parse locale file"));
    assert!(result.stderr.contains("de.json"));
    assert!(!test.root().join("translations.d.ts").exists());

    Ok(())
}

#[test]
fn test_generate_without_input_dir_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(&mut test.generate_command())?;
    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Specify the locale directory"));

    let result = run(test.generate_command().arg("missing"))?;
    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("does not exist or is not a directory"));

    Ok(())
}

#[test]
fn test_generate_uses_config_file() -> Result<()> {
    let test = CliTest::with_file(
        "translation-config.json",
        r#"{
  "inputDir": "i18n",
  "outputPath": "src/types",
  "outputFileName": "i18n.d.ts",
  "generateDocs": false
}"#,
    )?;
    test.write_file("i18n/en.json", r#"{ "title": "Title" }"#)?;
    test.write_file("src/app/.keep", "")?;

    // Relative paths in the config file are resolved against its directory.
    let result = run(test.generate_command().current_dir(test.root().join("src/app")))?;
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);

    insta::assert_snapshot!(test.read_file("src/types/i18n.d.ts")?, @r#"
export type TranslationKeys = "title";

export type TranslationParamsMap = {
  "title": undefined;
};
"#);

    Ok(())
}

#[test]
fn test_generate_cli_flags_override_config_file() -> Result<()> {
    let test = CliTest::with_file(
        "translation-config.json",
        r#"{ "inputDir": "i18n", "outputFileName": "i18n.d.ts" }"#,
    )?;
    test.write_file("i18n/en.json", r#"{ "title": "Title" }"#)?;

    let result = run(test.generate_command().args([
        "--output-file-name",
        "keys.d.ts",
        "--no-params",
        "--no-docs",
    ]))?;
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);

    assert!(!test.root().join("i18n.d.ts").exists());
    assert_eq!(
        test.read_file("keys.d.ts")?,
        "export type TranslationKeys = \"title\";\n"
    );

    Ok(())
}

#[test]
fn test_generate_merges_language_directories() -> Result<()> {
    let test = CliTest::with_file("locales/de/common.json", r#"{ "ok": "OK" }"#)?;
    test.write_file("locales/de/errors.json", r#"{ "error": { "fatal": "{code}" } }"#)?;
    test.write_file("locales/en/common.json", r#"{ "ok": "OK" }"#)?;
    test.write_file("locales/en/errors.json", r#"{ "error": { "fatal": "{code}" } }"#)?;
    test.write_file("locales/en/notes.txt", "ignored")?;

    let result = run(test.generate_command().args(["locales", "--no-docs", "--strict"]))?;
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);
    assert!(
        result
            .stdout
            .contains("(2 keys, 2 languages from 4 locale files)")
    );

    let content = test.read_file("translations.d.ts")?;
    assert!(content.contains("  | \"ok\"\n  | \"error.fatal\";"));
    assert!(content.contains("  \"error.fatal\": { code: string | number | Date };"));

    Ok(())
}

#[test]
fn test_generate_orders_docs_by_preferred_languages() -> Result<()> {
    let test = CliTest::new()?;
    let greetings = [
        ("de", "Hallo"),
        ("en", "Hello"),
        ("fr", "Bonjour"),
        ("ru", "Привет"),
    ];
    for (lang, text) in greetings {
        test.write_file(
            &format!("locales/{lang}.json"),
            &format!(r#"{{ "greeting": "{text}" }}"#),
        )?;
    }

    let result = run(test.generate_command().args(["locales", "--prefer", "fr,de"]))?;
    assert_eq!(result.code, Some(0), "stderr: {}", result.stderr);

    let content = test.read_file("translations.d.ts")?;
    assert!(content.contains("   * Bonjour / Hallo / Hello / Привет\n"));

    let rows: Vec<&str> = content
        .lines()
        .filter_map(|line| line.strip_prefix("   * | "))
        .map(|row| row.split_whitespace().next().unwrap_or_default())
        .collect();
    assert_eq!(rows, vec!["lang", "----", "fr", "de", "en", "ru"]);

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let result = run(&mut test.command())?;
    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("generate"));
    assert!(result.stdout.contains("watch"));

    Ok(())
}
