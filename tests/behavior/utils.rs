use assert_cmd::Command;
use libtest_mimic::{Failed, Trial};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub type TestResult = std::result::Result<(), Failed>;

/// A temporary folder to rename plus an empty settings file, so runs never
/// pick up the invoking user's configuration.
pub struct Fixture {
    root: TempDir,
}

impl Fixture {
    /// Create the target folder holding `names`; each file contains its own
    /// original name so renames can be traced afterwards.
    pub fn with_files(names: &[&str]) -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let fixture = Self { root };
        fs::create_dir(fixture.folder()).expect("create target folder");
        fs::write(fixture.settings_path(), "").expect("write settings file");
        for name in names {
            fs::write(fixture.folder().join(name), name).expect("write fixture file");
        }
        fixture
    }

    pub fn folder(&self) -> PathBuf {
        self.root.path().join("target")
    }

    pub fn folder_str(&self) -> String {
        self.folder().to_string_lossy().to_string()
    }

    pub fn settings_path(&self) -> PathBuf {
        self.root.path().join("seqrename.toml")
    }

    /// Sorted entry names of the target folder.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.folder())
            .expect("list target folder")
            .map(|entry| {
                entry
                    .expect("read entry")
                    .file_name()
                    .to_string_lossy()
                    .to_string()
            })
            .collect();
        names.sort();
        names
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.folder().join(name)).expect("read fixture file")
    }

    /// The binary with isolated settings.
    pub fn cmd(&self) -> Command {
        let mut cmd = seqrename_cmd();
        cmd.env("SEQRENAME_CONFIG", self.settings_path())
            .env_remove("SEQRENAME_START_INDEX")
            .env_remove("SEQRENAME_SORT")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Stdin answering the four prompts in order.
    pub fn answers(&self, base: &str, ext: &str, confirm: &str) -> String {
        format!("{}\n{base}\n{ext}\n{confirm}\n", self.folder_str())
    }
}

pub fn seqrename_cmd() -> Command {
    Command::cargo_bin("seqrename").expect("seqrename binary is built")
}

pub fn build_trial(name: &str, f: fn() -> TestResult) -> Trial {
    Trial::test(format!("behavior::{name}"), f)
}

#[macro_export]
macro_rules! trials {
    ($($test:ident),* $(,)?) => {
        vec![$(
            build_trial(stringify!($test), $test),
        )*]
    };
}
