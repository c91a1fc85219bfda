use anyhow::Result;

use crate::CliTest;

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_value_diff_is_reported_with_exit_code_one() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.js", "user_pref(\"browser.startup.page\", 0);\n")?;
    test.write_file("b.js", "user_pref(\"browser.startup.page\", 1);\n")?;

    let output = test
        .command()
        .args(["a.js", "b.js", "-o", "report.log"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout_of(&output).contains("1 of 1 prefs differ"));

    let report = test.read_file("report.log")?;
    assert!(report.contains("Prefs with different values (1)"));
    assert!(report.contains("browser.startup.page"));
    assert!(report.contains("a.js"));
    assert!(report.contains("b.js"));
    Ok(())
}

#[test]
fn test_identical_files_exit_zero() -> Result<()> {
    let test = CliTest::new()?;
    let content = "user_pref(\"app.update.auto\", false);\n";
    test.write_file("a.js", content)?;
    test.write_file("b.js", content)?;

    let output = test
        .command()
        .args(["a.js", "b.js", "-o", "report.log"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("no differences found"));
    Ok(())
}

#[test]
fn test_commented_declaration_is_classified_inactive() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.js", "user_pref(\"dom.webaudio.enabled\", false);\n")?;
    test.write_file("b.js", "// user_pref(\"dom.webaudio.enabled\", false);\n")?;

    let output = test
        .command()
        .args(["a.js", "b.js", "-o", "report.log"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let report = test.read_file("report.log")?;
    assert!(report.contains("Prefs with matching values but inactive in b.js (1)"));
    assert!(report.contains("[i] dom.webaudio.enabled"));
    Ok(())
}

#[test]
fn test_no_comments_flag_treats_comments_as_active() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.js", "user_pref(\"dom.webaudio.enabled\", false);\n")?;
    test.write_file("b.js", "// user_pref(\"dom.webaudio.enabled\", false);\n")?;

    let output = test
        .command()
        .args(["a.js", "b.js", "-o", "report.log", "--no-comments-b"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    Ok(())
}

#[test]
fn test_hide_section_keeps_summary_count() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.js", "user_pref(\"a\", 0);\n")?;
    test.write_file("b.js", "user_pref(\"a\", 1);\n")?;

    let output = test
        .command()
        .args(["a.js", "b.js", "-o", "report.log", "--hide", "diffs"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let report = test.read_file("report.log")?;
    assert!(report.contains("1 prefs with different values"));
    assert!(!report.contains("Prefs with different values (1)"));
    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "a.js",
        "user_pref(\"shared\", true);\nuser_pref(\"only.a\", 1);\n",
    )?;
    test.write_file("b.js", "user_pref(\"shared\", true);\n")?;

    let output = test.command().args(["a.js", "b.js", "--json"]).output()?;

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_str(&stdout_of(&output))?;
    assert_eq!(value["fileA"], "a.js");
    assert_eq!(value["uniqueTotal"], 2);
    assert_eq!(value["counts"]["match"], 1);
    assert_eq!(value["counts"]["missing-in-b"], 1);
    assert_eq!(value["prefs"][0]["name"], "only.a");
    assert_eq!(value["prefs"][0]["a"]["value"], "1");
    assert_eq!(value["prefs"][0]["b"], serde_json::Value::Null);
    // No report file is written in JSON mode.
    assert!(!test.has_file("prefdiff.log"));
    Ok(())
}

#[test]
fn test_append_keeps_previous_report() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.js", "user_pref(\"a\", 1);\n")?;
    test.write_file("b.js", "user_pref(\"a\", 1);\n")?;

    for _ in 0..2 {
        let output = test
            .command()
            .args(["a.js", "b.js", "-o", "report.log", "--append"])
            .output()?;
        assert_eq!(output.status.code(), Some(0));
    }

    let report = test.read_file("report.log")?;
    assert_eq!(report.matches("prefdiff report").count(), 2);
    Ok(())
}

#[test]
fn test_broken_syntax_is_a_warning_not_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.js", "user_pref(\"beacon.enabled\", ture);\n")?;
    test.write_file("b.js", "user_pref(\"beacon.enabled\", true);\n")?;

    let output = test
        .command()
        .args(["a.js", "b.js", "-o", "report.log"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("broken syntax"));
    let report = test.read_file("report.log")?;
    assert!(report.contains("Broken syntax in a.js (1)"));
    Ok(())
}

#[test]
fn test_missing_input_exits_two() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.js", "user_pref(\"a\", 1);\n")?;

    let output = test
        .command()
        .args(["a.js", "missing.js", "-o", "report.log"])
        .output()?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_of(&output).contains("Error:"));
    Ok(())
}

#[test]
fn test_dash_output_prints_report_to_stdout() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.js", "user_pref(\"a\", 1);\n")?;
    test.write_file("b.js", "user_pref(\"a\", 1);\n")?;

    let output = test.command().args(["a.js", "b.js", "-o", "-"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("prefdiff report"));
    assert!(stdout.contains("matching prefs, same state"));
    Ok(())
}

#[test]
fn test_config_file_supplies_output_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".prefdiffrc.json", r#"{ "output": "custom.log" }"#)?;
    test.write_file("a.js", "user_pref(\"a\", 1);\n")?;
    test.write_file("b.js", "user_pref(\"a\", 1);\n")?;

    let output = test.command().args(["a.js", "b.js"]).output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(test.has_file("custom.log"));
    Ok(())
}

#[test]
fn test_directory_sides_are_concatenated() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("left/one.js", "user_pref(\"a\", 1);\n")?;
    test.write_file("left/two.js", "user_pref(\"b\", 2);\n")?;
    test.write_file("right/all.js", "user_pref(\"a\", 1);\nuser_pref(\"b\", 2);\n")?;

    let output = test
        .command()
        .args(["left", "right", "-o", "report.log"])
        .output()?;

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout_of(&output).contains("Compared 2 prefs"));
    Ok(())
}

#[test]
fn test_help_mentions_both_sources() -> Result<()> {
    let test = CliTest::new()?;
    let output = test.command().arg("--help").output()?;

    assert_eq!(output.status.code(), Some(0));
    let stdout = stdout_of(&output);
    assert!(stdout.contains("FILE_A"));
    assert!(stdout.contains("FILE_B"));
    Ok(())
}
