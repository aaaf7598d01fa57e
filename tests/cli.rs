use std::{
    fs,
    io::Write,
    process::{Command, Stdio},
};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sha256"))
}

#[test]
fn hashes_files_in_sha256sum_layout() {
    let path = std::env::temp_dir().join(format!("sha256-cli-{}.txt", std::process::id()));
    fs::write(&path, b"hello\n").unwrap();

    let out = bin().arg(&path).output().unwrap();
    fs::remove_file(&path).unwrap();

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        format!(
            "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03  {}\n",
            path.display()
        )
    );
}

#[test]
fn reads_stdin_without_arguments() {
    let mut child = bin()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"abc").unwrap();
    let out = child.wait_with_output().unwrap();

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad  -\n"
    );
}

#[test]
fn missing_file_fails_but_other_inputs_are_still_hashed() {
    let out = bin()
        .args(["/definitely/not/a/real/path/input.bin", "-"])
        .stdin(Stdio::null())
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855  -\n"
    );
    let stderr = String::from_utf8(out.stderr).unwrap();
    let line = stderr
        .lines()
        .find(|l| l.starts_with("sha256: "))
        .expect("error line on stderr");
    assert!(line.starts_with("sha256: unable to read input: /definitely/not/a/real/path/input.bin: "));
    // The input is named once
    assert_eq!(line.matches("input.bin").count(), 1);
}
