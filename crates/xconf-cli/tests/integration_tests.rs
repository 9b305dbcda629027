use assert_cmd::Command;
use xconf_test::{create_file, defer, temp_path};

const CATALOG_XML: &str = "<catalog>\
    <constant name=\"a\">10</constant>\
    <constant name=\"b\">20</constant>\
    <calc>@{ a b + }</calc>\
</catalog>";

const CATALOG_CONFIG: &str =
    "catalog = dict(\n    constant --> 10,\n    constant --> 20,\n    calc = 30\n)";

#[test]
fn test_cli_converts_stdin_to_output_file() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = temp_path("xconf_cli_stdin.conf");
    defer! {
        if output_path.exists() {
            std::fs::remove_file(&output_path).expect("Failed to delete temp file");
        }
    }

    let mut cmd = Command::cargo_bin("xconf")?;
    cmd.arg("--output")
        .arg(&output_path)
        .write_stdin(format!("{}\n\n", CATALOG_XML))
        .assert()
        .success()
        .code(0);

    assert_eq!(std::fs::read_to_string(&output_path)?, CATALOG_CONFIG);

    Ok(())
}

#[test]
fn test_cli_converts_input_file() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = create_file("xconf_cli_input.xml", CATALOG_XML);
    let output_path = temp_path("xconf_cli_file.conf");
    defer! {
        for path in [&input_path, &output_path] {
            if path.exists() {
                std::fs::remove_file(path).expect("Failed to delete temp file");
            }
        }
    }

    let mut cmd = Command::cargo_bin("xconf")?;
    cmd.arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&output_path)?, CATALOG_CONFIG);

    Ok(())
}

#[test]
fn test_cli_overwrites_existing_output_file() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = create_file("xconf_cli_overwrite.xml", "<note>hello</note>");
    let output_path = create_file("xconf_cli_overwrite.conf", "stale content");
    defer! {
        for path in [&input_path, &output_path] {
            if path.exists() {
                std::fs::remove_file(path).expect("Failed to delete temp file");
            }
        }
    }

    let mut cmd = Command::cargo_bin("xconf")?;
    cmd.arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success();

    assert_eq!(std::fs::read_to_string(&output_path)?, "note = [[hello]]");

    Ok(())
}

#[test]
fn test_cli_honors_indent_width() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = create_file("xconf_cli_indent.xml", "<root><item>1</item></root>");
    let output_path = temp_path("xconf_cli_indent.conf");
    defer! {
        for path in [&input_path, &output_path] {
            if path.exists() {
                std::fs::remove_file(path).expect("Failed to delete temp file");
            }
        }
    }

    let mut cmd = Command::cargo_bin("xconf")?;
    cmd.arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .arg("--indent-width")
        .arg("2")
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(&output_path)?,
        "root = dict(\n  item = 1\n)"
    );

    Ok(())
}

#[test]
fn test_cli_malformed_expression_writes_no_output() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = create_file(
        "xconf_cli_bad_expr.xml",
        "<catalog><constant name=\"a\">10</constant><calc>@{ a + }</calc></catalog>",
    );
    let output_path = temp_path("xconf_cli_bad_expr.conf");
    defer! {
        if input_path.exists() {
            std::fs::remove_file(&input_path).expect("Failed to delete temp file");
        }
    }

    let mut cmd = Command::cargo_bin("xconf")?;
    cmd.arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .assert()
        .failure();

    assert!(!output_path.exists());

    Ok(())
}

#[test]
fn test_cli_malformed_xml_fails() -> Result<(), Box<dyn std::error::Error>> {
    let input_path = create_file("xconf_cli_bad_xml.xml", "<catalog><open></catalog>");
    let output_path = temp_path("xconf_cli_bad_xml.conf");
    defer! {
        if input_path.exists() {
            std::fs::remove_file(&input_path).expect("Failed to delete temp file");
        }
    }

    let mut cmd = Command::cargo_bin("xconf")?;
    cmd.arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .assert()
        .failure();

    assert!(!output_path.exists());

    Ok(())
}

#[test]
fn test_cli_missing_input_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("xconf")?;
    cmd.arg("--input")
        .arg("/nonexistent/xconf_input.xml")
        .arg("--output")
        .arg(temp_path("xconf_cli_missing.conf"))
        .assert()
        .failure();

    Ok(())
}
