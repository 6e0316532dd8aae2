use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use rstest::*;

macro_rules! cargo_run {
    ($cmd:expr, $($args:expr),*) => {
        {
            let mut cmd = Command::cargo_bin($cmd)?;
            $(cmd.arg($args);)*
            cmd.assert()
        }
    };
}

const DATA: &str = "tests/images.json";

fn query_ids(args: &[&str]) -> Result<Vec<String>> {
    let output = Command::cargo_bin("imquery")?.args(["-d", DATA, "query"]).args(args).output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    Ok(value
        .as_array()
        .unwrap()
        .iter()
        .map(|image| image["id"].as_str().unwrap().to_string())
        .collect())
}

#[test]
fn query_image_by_id() -> Result<()> {
    cargo_run!("imquery", "-d", DATA, "query", "image", "DSC_0002")
        .success()
        .stdout(predicate::str::contains(r#""title": "Wall""#))
        .stdout(predicate::str::contains(r#""imageWidth": 2000"#));
    Ok(())
}

#[rstest]
#[case::missing(&["image", "nope"])]
#[case::absent(&["image"])]
fn query_image_default(#[case] args: &[&str]) -> Result<()> {
    let output = Command::cargo_bin("imquery")?.args(["-d", DATA, "query"]).args(args).output()?;
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["id"], "");
    assert_eq!(value["iso"], 0);
    Ok(())
}

#[rstest]
#[case::all(&["list"], &["DSC_0001", "DSC_0002", "DSC_0003"])]
#[case::tag(&["list", "--tag", "city"], &["DSC_0002", "DSC_0003"])]
#[case::tag_exact(&["list", "--tag", "abs"], &[])]
#[case::tag_contains(&["list", "--tag-contains", "str"], &["DSC_0001", "DSC_0003"])]
#[case::both(&["list", "--tag", "city", "--tag-contains", "fog"], &["DSC_0001"])]
fn query_list(#[case] args: &[&str], #[case] expected: &[&str]) -> Result<()> {
    assert_eq!(query_ids(args)?, expected);
    Ok(())
}

#[test]
fn query_list_table() -> Result<()> {
    cargo_run!("imquery", "-d", DATA, "query", "--output-format", "table", "list", "--tag", "fog")
        .success()
        .stdout("DSC_0001\tFog\tabstract,water,fog\n");
    Ok(())
}

#[test]
fn tags_table() -> Result<()> {
    cargo_run!("imquery", "-d", DATA, "tags")
        .success()
        .stdout(predicate::str::contains("2\tabstract\n"))
        .stdout(predicate::str::contains("1\tabstraction\n"))
        .stdout(predicate::str::contains("2\tcity\n"));
    Ok(())
}

#[test]
fn missing_data_file_aborts() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    cargo_run!("imquery", "-d", dir.path().join("images.json"), "query", "list")
        .failure()
        .stdout(predicate::str::is_empty());
    Ok(())
}

#[test]
fn malformed_data_file_aborts() -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    let data = dir.child("images.json");
    data.write_str(r#"[{"id": "a", "keywords": "not a list"}]"#)?;
    cargo_run!("imquery", "-d", data.path(), "query", "image", "a")
        .failure()
        .stderr(predicate::str::contains("图片数据格式错误"));
    Ok(())
}

#[rstest]
#[case::missing(None, "无法读取图片数据文件")]
#[case::malformed(Some(r#"[{"id": "a", "iso": "high"}]"#), "图片数据格式错误")]
fn server_aborts_before_listening(
    #[case] content: Option<&str>,
    #[case] message: &str,
) -> Result<()> {
    let dir = assert_fs::TempDir::new()?;
    let data = dir.child("images.json");
    if let Some(content) = content {
        data.write_str(content)?;
    }
    cargo_run!("imquery", "-d", data.path(), "server", "--addr", "127.0.0.1:0")
        .failure()
        .stderr(predicate::str::contains(message))
        .stderr(predicate::str::contains("服务器启动").not());
    Ok(())
}
