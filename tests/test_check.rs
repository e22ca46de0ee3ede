use assert_cmd::Command;
use assert_fs::{prelude::FileWriteStr, NamedTempFile};
use predicates::prelude::predicate;

fn check_command(instance: &str) -> (Command, NamedTempFile) {
    let file = NamedTempFile::new("instance.apx").unwrap();
    file.write_str(instance).unwrap();
    let mut cmd = Command::cargo_bin("labtrack").unwrap();
    cmd.arg("check").arg("-f").arg(file.path());
    (cmd, file)
}

#[test]
fn test_check_ok() {
    let (mut cmd, file) = check_command("arg(a).\narg(b).\natt(a,b).\n");
    cmd.assert().success().stdout(predicate::str::is_empty());
    file.close().unwrap();
}

#[test]
fn test_check_print_normalizes() {
    let (mut cmd, file) =
        check_command("# comment\narg(a).\natt(a,a).\n  arg(b).  \natt(b,a).\natt(a,a).\n");
    cmd.arg("--print");
    cmd.assert()
        .success()
        .stdout(predicate::eq("arg(a).\narg(b).\natt(a,a).\natt(b,a).\n"));
    file.close().unwrap();
}

#[test]
fn test_check_error() {
    let (mut cmd, file) = check_command("arg(a).\natt(a,b).\n");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("line 2"));
    file.close().unwrap();
}
