use std::fs;

use assert_cmd::Command;
use assert_fs::prelude::*;
use predicates::prelude::*;

const OUTPUT_FILE: &str = "memora_eva_icon.svg";

fn icon_emitter() -> Command {
    Command::cargo_bin("icon-emitter").expect("binary built")
}

#[test]
fn writes_icon_into_empty_working_directory() {
    let temp = assert_fs::TempDir::new().expect("temp dir");

    icon_emitter()
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ EVA 主题图标已生成！"))
        .stdout(predicate::str::contains(OUTPUT_FILE))
        .stdout(predicate::str::contains("icon_1024.png"))
        .stdout(predicate::str::contains("./fix_appicon.sh"));

    let icon = temp.child(OUTPUT_FILE);
    let text = fs::read_to_string(icon.path()).expect("read icon");
    assert!(text.contains(r#"width="1024""#));
    assert!(text.contains("#6E2C90"));
}

#[test]
fn second_run_leaves_identical_file() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    let icon = temp.child(OUTPUT_FILE);

    icon_emitter().current_dir(temp.path()).assert().success();
    let first = fs::read(icon.path()).expect("read first");
    icon_emitter().current_dir(temp.path()).assert().success();
    let second = fs::read(icon.path()).expect("read second");

    assert_eq!(first, second);
}

#[test]
fn fails_when_target_directory_is_missing() {
    let temp = assert_fs::TempDir::new().expect("temp dir");
    let icon = temp.child("missing").child(OUTPUT_FILE);

    icon_emitter()
        .current_dir(temp.path())
        .arg("--output")
        .arg(icon.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to write icon"));

    assert!(!icon.path().exists());
    assert!(!temp.child(OUTPUT_FILE).path().exists());
}
