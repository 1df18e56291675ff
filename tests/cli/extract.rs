use anyhow::Result;
use serde_json::Value;

use crate::{CliTest, run_json, texts};

#[test]
fn test_template_text_and_translation_call() -> Result<()> {
    let test = CliTest::with_file(
        "resources/views/welcome.blade.php",
        "<div>\n  <h1>Welcome</h1>\n  <p>{{ __('messages.intro') }}</p>\n</div>\n",
    )?;

    let (output, records) = run_json(&mut test.extract_command())?;

    assert!(output.status.success());
    assert_eq!(texts(&records), vec!["Welcome"]);

    let occurrence = &records[0]["occurrences"][0];
    assert_eq!(
        occurrence["file"],
        test.path_of("resources/views/welcome.blade.php")
    );
    let position = &occurrence["positions"][0];
    assert_eq!(position["line"], 2);
    assert_eq!(position["column"], 6);
    assert_eq!(position["length"], 7);
    assert_eq!(position["context"].as_array().map(Vec::len), Some(4));

    Ok(())
}

#[test]
fn test_scripts_are_opt_in() -> Result<()> {
    let test = CliTest::with_file(
        "app/Http/Controllers/UserController.php",
        "<?php\n$user = ['name' => 'John'];\nLog::info('User created');\n",
    )?;

    let (_, records) = run_json(&mut test.extract_command())?;
    assert!(records.is_empty());

    let (output, records) = run_json(test.extract_command().arg("--scripts"))?;
    assert!(output.status.success());
    assert_eq!(texts(&records), vec!["John"]);

    Ok(())
}

#[test]
fn test_records_sorted_and_consolidated() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("resources/views/a.blade.php", "<p>Zebra</p>\n<p>Apple</p>\n")?;
    test.write_file("resources/views/b.blade.php", "<p>Apple</p>\n")?;

    let (_, records) = run_json(&mut test.extract_command())?;

    assert_eq!(texts(&records), vec!["Apple", "Zebra"]);
    let files: Vec<&str> = records[0]["occurrences"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|o| o["file"].as_str())
        .collect();
    assert_eq!(
        files,
        vec![
            test.path_of("resources/views/a.blade.php"),
            test.path_of("resources/views/b.blade.php"),
        ]
    );

    Ok(())
}

#[test]
fn test_exclusion_dictionary_with_negation() -> Result<()> {
    let test = CliTest::with_file(
        "resources/views/form.blade.php",
        "<p>data-foo</p>\n<p>data-important</p>\n<p>Submit</p>\n",
    )?;
    test.write_file("i18n-ignore.txt", "# attribute-like\ndata-*\n!data-important\n")?;

    let (output, records) =
        run_json(test.extract_command().args(["-d", "i18n-ignore.txt"]))?;

    assert!(output.status.success());
    assert_eq!(texts(&records), vec!["Submit", "data-important"]);

    Ok(())
}

#[test]
fn test_min_bytes_and_symbol_filter() -> Result<()> {
    let test = CliTest::with_file(
        "resources/views/list.blade.php",
        "<span>OK</span>\n<span>Yes</span>\n<span>123</span>\n<span>春123</span>\n",
    )?;

    let (_, records) = run_json(test.extract_command().args(["--min-bytes", "3"]))?;

    assert_eq!(texts(&records), vec!["Yes", "春123"]);

    Ok(())
}

#[test]
fn test_context_disabled() -> Result<()> {
    let test = CliTest::with_file("resources/views/a.blade.php", "<p>Hello</p>\n")?;

    let (_, records) = run_json(test.extract_command().args(["--context-lines", "0"]))?;

    let position = &records[0]["occurrences"][0]["positions"][0];
    assert!(position.get("context").is_none());

    Ok(())
}

#[test]
fn test_even_context_is_a_config_error() -> Result<()> {
    let test = CliTest::with_file("resources/views/a.blade.php", "<p>Hello</p>\n")?;
    test.write_file(".i18nrc.json", r#"{ "contextLines": 4 }"#)?;

    let output = test.extract_command().output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("contextLines"));

    Ok(())
}

#[test]
fn test_missing_dictionary_is_an_error() -> Result<()> {
    let test = CliTest::with_file("resources/views/a.blade.php", "<p>Hello</p>\n")?;

    let output = test
        .extract_command()
        .args(["-d", "missing.txt"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing.txt"));

    Ok(())
}

#[test]
fn test_default_ignores_and_exclude_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("vendor/laravel/views/x.blade.php", "<p>Vendor text</p>\n")?;
    test.write_file("resources/views/legacy/old.blade.php", "<p>Old text</p>\n")?;
    test.write_file("resources/views/new.blade.php", "<p>New text</p>\n")?;

    let (_, records) = run_json(test.extract_command().args(["-e", "legacy"]))?;

    assert_eq!(texts(&records), vec!["New text"]);

    Ok(())
}

#[test]
fn test_output_file_split() -> Result<()> {
    let test = CliTest::with_file(
        "resources/views/a.blade.php",
        "<p>Alpha</p>\n<p>Bravo</p>\n<p>Charlie</p>\n",
    )?;

    let output = test
        .extract_command()
        .args(["-o", "out/strings.json", "--split-threshold", "2"])
        .output()?;

    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let first: Value = serde_json::from_str(&test.read_file("out/strings.json")?)?;
    let second: Value = serde_json::from_str(&test.read_file("out/strings-2.json")?)?;
    assert_eq!(texts(first.as_array().unwrap()), vec!["Alpha", "Bravo"]);
    assert_eq!(texts(second.as_array().unwrap()), vec!["Charlie"]);

    Ok(())
}

#[test]
fn test_output_with_text_format_rejected() -> Result<()> {
    let test = CliTest::new()?;

    let output = test
        .extract_command()
        .args(["-o", "out.json", "--format", "text"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(!test.root().join("out.json").exists());

    Ok(())
}

#[test]
fn test_text_report() -> Result<()> {
    let test = CliTest::with_file(
        "resources/views/a.blade.php",
        "<div>\n  <h1>Welcome</h1>\n</div>\n",
    )?;

    let output = test
        .extract_command()
        .args(["--format", "text", "--context-lines", "3"])
        .output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("string: \"Welcome\""));
    assert!(stdout.contains(&format!(
        "--> {}:2:7",
        test.path_of("resources/views/a.blade.php")
    )));
    assert!(stdout.contains("2 |   <h1>Welcome</h1>\n  |       ^\n"));

    Ok(())
}

#[test]
fn test_summary_on_stderr() -> Result<()> {
    let test = CliTest::with_file("resources/views/a.blade.php", "<p>Hello</p>\n<p>Hello</p>\n")?;

    let (output, _) = run_json(&mut test.extract_command())?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(stderr.contains("Processed 1 file: 1 unique string, 2 occurrences"));

    Ok(())
}

#[test]
fn test_idempotent_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("resources/views/a.blade.php", "<p>One</p>\n<p title=\"Two\">Three</p>\n")?;
    test.write_file("resources/views/b.blade.php", "<p>Three</p>\n")?;

    let first = test.extract_command().output()?;
    let second = test.extract_command().output()?;

    assert_eq!(first.stdout, second.stdout);

    Ok(())
}
