//! End-to-end checks of the `mpack` binary: printing, --test mode, exit
//! codes, and stdin input.

use std::io::Write;
use std::process::{Command, Stdio};

use mpack::{encode_array, encode_str, encode_uint, mp_format};

fn mpack_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mpack"))
}

fn write_temp(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(bytes).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

#[test]
fn prints_each_top_level_value_on_its_own_line() {
    let mut buf = [0u8; 64];
    let w = encode_uint(&mut buf, 7);
    let w = encode_array(w, 2);
    let w = encode_uint(w, 10);
    let w = encode_uint(w, 15);
    let w = encode_str(w, b"done");
    let len = 64 - w.len();

    let file = write_temp(&buf[..len]);
    let out = mpack_bin().arg(file.path()).output().expect("run mpack");

    assert!(out.status.success(), "stderr: {:?}", out.stderr);
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "7\n[10, 15]\n\"done\"\n"
    );
}

#[test]
fn test_mode_reports_counts_and_prints_nothing() {
    let mut buf = [0u8; 64];
    let need = mp_format!(&mut buf, "[%d %s NIL]", 1, "x");

    let file = write_temp(&buf[..need]);
    let out = mpack_bin()
        .arg("--test")
        .arg(file.path())
        .output()
        .expect("run mpack");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains(&format!("1 values, {need} bytes OK")),
        "unexpected summary: {stdout:?}"
    );
}

#[test]
fn corrupt_input_fails_with_nonzero_exit() {
    // str8 announcing 5 payload bytes but carrying only 2
    let file = write_temp(&[0xd9, 0x05, 0x61, 0x62]);
    let out = mpack_bin().arg(file.path()).output().expect("run mpack");

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("truncated or malformed"),
        "unexpected stderr: {stderr:?}"
    );
}

#[test]
fn quiet_flag_silences_the_error_message() {
    let file = write_temp(&[0xd9, 0x05]);
    let out = mpack_bin()
        .arg("-qq")
        .arg(file.path())
        .output()
        .expect("run mpack");

    assert_eq!(out.status.code(), Some(1));
    assert!(out.stderr.is_empty(), "stderr: {:?}", out.stderr);
}

#[test]
fn reads_stdin_when_no_files_given() {
    let mut child = mpack_bin()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn mpack");

    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(&[0x92, 0x0a, 0x0f])
        .expect("write to child stdin");

    let out = child.wait_with_output().expect("wait for mpack");
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "[10, 15]\n");
}

#[test]
fn missing_file_fails() {
    let out = mpack_bin()
        .arg("/nonexistent/path/to/values.mp")
        .output()
        .expect("run mpack");

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("cannot read"));
}
