use predicates::prelude::*;
use std::path::PathBuf;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/Bookmarks.plist")
}

/// A temporary home with `Library/Safari/` and a separate working directory.
struct Sandbox {
    _dir: tempfile::TempDir,
    home: PathBuf,
    work: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let home = dir.path().join("home");
        let work = dir.path().join("work");
        std::fs::create_dir_all(home.join("Library/Safari")).expect("create Safari dir");
        std::fs::create_dir_all(&work).expect("create work dir");
        Self {
            _dir: dir,
            home,
            work,
        }
    }

    fn bookmarks(&self) -> PathBuf {
        self.home.join("Library/Safari/Bookmarks.plist")
    }

    fn output(&self) -> PathBuf {
        self.work.join("Bookmarks.md")
    }

    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo_bin_cmd!("reading-list-md");
        cmd.env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .current_dir(&self.work);
        cmd
    }
}

#[test]
fn help_describes_the_tool() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reading List"));
}

#[test]
fn rejects_arguments() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("somewhere.md")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
    assert!(!sandbox.output().exists());
}

#[cfg(not(target_os = "macos"))]
#[test]
fn fails_fast_off_macos() {
    let sandbox = Sandbox::new();
    std::fs::copy(fixture_path(), sandbox.bookmarks()).expect("copy fixture");

    sandbox
        .cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("only runs on macOS"));
    assert!(!sandbox.output().exists());
}

#[cfg(target_os = "macos")]
mod macos {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn exports_reading_list_to_working_directory() {
        let sandbox = Sandbox::new();
        std::fs::copy(fixture_path(), sandbox.bookmarks()).expect("copy fixture");

        sandbox.cmd().assert().success().stdout("");

        let md = std::fs::read_to_string(sandbox.output()).expect("read Bookmarks.md");
        assert_snapshot!(md, @r"
        # Bookmarks

        ## Rust Programming Language

        ### https://www.rust-lang.org/

        > A language empowering everyone to build reliable and efficient software.

        ## The Cargo Book

        ### https://doc.rust-lang.org/cargo/
        ");
    }

    #[test]
    fn second_run_overwrites_with_identical_output() {
        let sandbox = Sandbox::new();
        std::fs::copy(fixture_path(), sandbox.bookmarks()).expect("copy fixture");

        sandbox.cmd().assert().success();
        let first = std::fs::read(sandbox.output()).expect("read first run");
        sandbox.cmd().assert().success();
        assert_eq!(first, std::fs::read(sandbox.output()).expect("read second run"));
    }

    #[test]
    fn missing_bookmarks_fails() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .assert()
            .failure()
            .stderr(predicate::str::contains("open bookmarks"));
    }

    #[test]
    fn corrupt_bookmarks_reports_decode_failure() {
        let sandbox = Sandbox::new();
        let bytes = std::fs::read(fixture_path()).expect("read fixture");
        std::fs::write(sandbox.bookmarks(), &bytes[..bytes.len() / 2]).expect("write corrupt");

        sandbox
            .cmd()
            .assert()
            .failure()
            .stderr(predicate::str::contains("decode"));
        assert!(!sandbox.output().exists());
    }

    #[test]
    fn unset_home_is_an_environment_error() {
        let sandbox = Sandbox::new();
        sandbox
            .cmd()
            .env_remove("HOME")
            .assert()
            .failure()
            .stderr(predicate::str::contains("HOME not set"));
    }
}
