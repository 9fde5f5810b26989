//! End-to-end tests for the `set-file-times` and `fix-rotations` binaries.
//!
//! The external tools are replaced by small shell scripts selected through
//! the `MEDIAFIX_*` environment variables.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Test utilities for driving the binaries
mod test_utils {
    use super::*;

    const MEDIAFIX_VARS: [&str; 9] = [
        "MEDIAFIX_CONFIG",
        "MEDIAFIX_EXIFTOOL",
        "MEDIAFIX_FFPROBE",
        "MEDIAFIX_FFMPEG",
        "MEDIAFIX_CRF",
        "MEDIAFIX_PRESET",
        "MEDIAFIX_LOG_LEVEL",
        "MEDIAFIX_ON_ERROR",
        "MEDIAFIX_REPLACE",
    ];

    /// A command with a clean environment running inside `dir`
    pub fn command(bin: &str, dir: &Path) -> Command {
        let mut cmd = Command::cargo_bin(bin).unwrap();
        cmd.current_dir(dir).env_remove("RUST_LOG");
        for var in MEDIAFIX_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Rotated by 90 degrees according to the stream tag
    #[cfg(unix)]
    pub fn rotated_probe(dir: &Path) -> PathBuf {
        fake_tool(dir, "ffprobe", r#"echo '{"streams":[{"tags":{"rotate":"90"}}]}'"#)
    }

    /// Write an executable shell script standing in for an external tool
    #[cfg(unix)]
    pub fn fake_tool(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        let mut permissions = fs::metadata(&path).unwrap().permissions();
        permissions.set_mode(0o755);
        fs::set_permissions(&path, permissions).unwrap();
        path
    }

    /// A tool that only records that it was started
    #[cfg(unix)]
    pub fn marker_tool(dir: &Path, name: &str) -> (PathBuf, PathBuf) {
        let marker = dir.join(format!("{}.called", name));
        let tool = fake_tool(dir, name, &format!("echo called >> '{}'", marker.display()));
        (tool, marker)
    }

    pub fn stdout_of(output: &std::process::Output) -> String {
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn stderr_of(output: &std::process::Output) -> String {
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn listing(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}

use test_utils::*;

#[test]
fn test_set_file_times_without_arguments_is_usage_error() {
    let work = TempDir::new().unwrap();
    command("set-file-times", work.path()).assert().code(1);
}

#[test]
fn test_set_file_times_with_two_arguments_is_usage_error() {
    let work = TempDir::new().unwrap();
    command("set-file-times", work.path())
        .args(["a", "b"])
        .assert()
        .code(1);
}

#[test]
fn test_help_exits_successfully() {
    let work = TempDir::new().unwrap();
    command("set-file-times", work.path())
        .arg("--help")
        .assert()
        .success();
    command("fix-rotations", work.path())
        .arg("--help")
        .assert()
        .success();
}

#[cfg(unix)]
#[test]
fn test_set_file_times_missing_path_does_not_run_exiftool() {
    let tools = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let (exiftool, marker) = marker_tool(tools.path(), "exiftool");

    let assert = command("set-file-times", work.path())
        .env("MEDIAFIX_EXIFTOOL", &exiftool)
        .arg("no-such-folder")
        .assert()
        .code(1);

    assert!(stderr_of(assert.get_output()).contains("Path not found"));
    assert!(!marker.exists());
}

#[cfg(unix)]
#[test]
fn test_set_file_times_prints_tool_output() {
    let tools = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::create_dir(work.path().join("photos")).unwrap();
    let exiftool = fake_tool(tools.path(), "exiftool", "echo \"args: $*\"");

    let assert = command("set-file-times", work.path())
        .env("MEDIAFIX_EXIFTOOL", &exiftool)
        .arg("photos")
        .assert()
        .success();

    let stdout = stdout_of(assert.get_output());
    assert!(stdout.contains("Operation completed successfully"));
    assert!(stdout.contains(
        "args: -FileCreateDate<DateTimeOriginal -FileModifyDate<DateTimeOriginal -v2 -r photos"
    ));
}

#[cfg(unix)]
#[test]
fn test_set_file_times_reports_tool_stderr() {
    let tools = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let exiftool = fake_tool(
        tools.path(),
        "exiftool",
        "echo 'Warning: no DateTimeOriginal' >&2; exit 1",
    );

    let assert = command("set-file-times", work.path())
        .env("MEDIAFIX_EXIFTOOL", &exiftool)
        .arg(".")
        .assert()
        .code(1);

    assert!(stderr_of(assert.get_output()).contains("Warning: no DateTimeOriginal"));
}

#[test]
fn test_set_file_times_missing_tool_fails() {
    let work = TempDir::new().unwrap();
    command("set-file-times", work.path())
        .env("MEDIAFIX_EXIFTOOL", "/nonexistent/exiftool")
        .arg(".")
        .assert()
        .code(1);
}

#[cfg(unix)]
#[test]
fn test_fix_rotations_without_videos_runs_no_tools() {
    let tools = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("notes.txt"), b"hello").unwrap();
    fs::write(work.path().join("photo.jpg"), b"jpeg").unwrap();
    let (ffprobe, probe_marker) = marker_tool(tools.path(), "ffprobe");
    let (ffmpeg, encode_marker) = marker_tool(tools.path(), "ffmpeg");

    let assert = command("fix-rotations", work.path())
        .env("MEDIAFIX_FFPROBE", &ffprobe)
        .env("MEDIAFIX_FFMPEG", &ffmpeg)
        .assert()
        .success();

    assert!(stdout_of(assert.get_output()).contains("No video files found"));
    assert!(!probe_marker.exists());
    assert!(!encode_marker.exists());
}

#[cfg(unix)]
#[test]
fn test_fix_rotations_replaces_rotated_clip() {
    let tools = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let videos = work.path().join("videos");
    fs::create_dir(&videos).unwrap();
    fs::write(videos.join("clip.mp4"), b"rotated").unwrap();

    let ffprobe = fake_tool(
        tools.path(),
        "ffprobe",
        r#"case "$*" in
  *stream_tags=rotate*) echo '{"streams":[{}]}' ;;
  *) echo '{"streams":[{"side_data_list":[{"side_data_type":"Display Matrix","rotation":180}]}]}' ;;
esac"#,
    );
    let ffmpeg = fake_tool(
        tools.path(),
        "ffmpeg",
        r#"for last; do :; done
echo "encoded" > "$last""#,
    );

    let assert = command("fix-rotations", work.path())
        .env("MEDIAFIX_FFPROBE", &ffprobe)
        .env("MEDIAFIX_FFMPEG", &ffmpeg)
        .arg("videos")
        .assert()
        .success();

    let stdout = stdout_of(assert.get_output());
    assert!(stdout.contains("Checking:"));
    assert!(stdout.contains("clip_trans.mp4"));
    assert_eq!(listing(&videos), vec!["clip.mp4"]);
    assert_eq!(fs::read_to_string(videos.join("clip.mp4")).unwrap().trim(), "encoded");
}

#[cfg(unix)]
#[test]
fn test_fix_rotations_encode_failure_keeps_original() {
    let tools = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("clip.mov"), b"rotated").unwrap();

    let ffprobe = rotated_probe(tools.path());
    let ffmpeg = fake_tool(tools.path(), "ffmpeg", "echo 'encoder exploded' >&2; exit 1");

    let assert = command("fix-rotations", work.path())
        .env("MEDIAFIX_FFPROBE", &ffprobe)
        .env("MEDIAFIX_FFMPEG", &ffmpeg)
        .assert()
        .code(1);

    let output = assert.get_output();
    assert!(stdout_of(output).contains("Transcode failed"));
    let stderr = stderr_of(output);
    assert_eq!(stderr.matches("encoder exploded").count(), 1);
    assert!(!stderr.contains('\u{1b}'));
    assert_eq!(fs::read(work.path().join("clip.mov")).unwrap(), b"rotated");
}

#[cfg(unix)]
#[test]
fn test_fix_rotations_probe_failures_mean_no_rotation() {
    let tools = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("clip.mkv"), b"original").unwrap();

    let ffprobe = fake_tool(tools.path(), "ffprobe", "echo 'not json'");
    let (ffmpeg, encode_marker) = marker_tool(tools.path(), "ffmpeg");

    command("fix-rotations", work.path())
        .env("MEDIAFIX_FFPROBE", &ffprobe)
        .env("MEDIAFIX_FFMPEG", &ffmpeg)
        .assert()
        .success();

    assert!(!encode_marker.exists());
    assert_eq!(fs::read(work.path().join("clip.mkv")).unwrap(), b"original");
}

#[cfg(unix)]
#[test]
fn test_fix_rotations_continue_still_exits_nonzero() {
    let tools = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    for file in ["a.mp4", "b.mp4", "c.mp4"] {
        fs::write(work.path().join(file), b"rotated").unwrap();
    }

    let ffprobe = rotated_probe(tools.path());
    let ffmpeg = fake_tool(
        tools.path(),
        "ffmpeg",
        r#"case "$*" in
  *b.mp4*) echo 'broken input' >&2; exit 1 ;;
esac
for last; do :; done
echo "encoded" > "$last""#,
    );

    let assert = command("fix-rotations", work.path())
        .env("MEDIAFIX_FFPROBE", &ffprobe)
        .env("MEDIAFIX_FFMPEG", &ffmpeg)
        .args(["--on-error", "continue"])
        .assert()
        .code(1);

    assert!(stderr_of(assert.get_output()).contains("1 of 3 rotated files could not be fixed"));
    assert_eq!(listing(work.path()), vec!["a.mp4", "b.mp4", "c.mp4"]);
    assert_eq!(fs::read_to_string(work.path().join("a.mp4")).unwrap().trim(), "encoded");
    assert_eq!(fs::read_to_string(work.path().join("c.mp4")).unwrap().trim(), "encoded");
    assert_eq!(fs::read(work.path().join("b.mp4")).unwrap(), b"rotated");
}

#[cfg(unix)]
#[test]
fn test_config_file_in_working_directory_is_used() {
    let tools = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let (exiftool, exiftool_marker) = marker_tool(tools.path(), "exiftool");
    let (ffprobe, probe_marker) = marker_tool(tools.path(), "ffprobe");
    fs::write(work.path().join("clip.mp4"), b"original").unwrap();
    fs::write(
        work.path().join("mediafix.toml"),
        format!(
            "[tools]\nexiftool = '{}'\nffprobe = '{}'\n",
            exiftool.display(),
            ffprobe.display()
        ),
    )
    .unwrap();

    command("set-file-times", work.path())
        .arg(".")
        .assert()
        .success();
    assert!(exiftool_marker.exists());

    // Marker output is not JSON, so the clip counts as unrotated
    command("fix-rotations", work.path()).assert().success();
    assert!(probe_marker.exists());
    assert_eq!(fs::read(work.path().join("clip.mp4")).unwrap(), b"original");
}

#[test]
fn test_fix_rotations_missing_directory_fails() {
    let work = TempDir::new().unwrap();
    command("fix-rotations", work.path())
        .arg("does-not-exist")
        .assert()
        .code(1);
}

#[test]
fn test_pretty_logs_show_source_location() {
    let work = TempDir::new().unwrap();

    let assert = command("fix-rotations", work.path())
        .args(["--log-level", "info", "--log-format", "pretty"])
        .assert()
        .success();

    let stderr = stderr_of(assert.get_output());
    assert!(stderr.contains("Scanning"));
    assert!(stderr.contains("src/app/rotation_interactor/mod.rs:"));
    assert!(!stderr.contains('\u{1b}'));
}

#[test]
fn test_invalid_config_file_fails() {
    let work = TempDir::new().unwrap();
    fs::write(work.path().join("bad.toml"), "[encode]\ncrf = \"high\"\n").unwrap();

    command("fix-rotations", work.path())
        .args(["--config", "bad.toml"])
        .assert()
        .code(1);
}
