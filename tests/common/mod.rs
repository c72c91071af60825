use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

pub fn run_splitter(args: &[&str]) -> Output {
    TestEnv::new().run(args, None)
}

pub struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temporary work dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file into the scratch dir and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("write fixture file");
        path
    }

    pub fn run(&self, args: &[&str], stdin: Option<&str>) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_transcript-splitter"))
            .args(args)
            .current_dir(self.dir.path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to execute transcript-splitter binary");

        {
            let mut pipe = child.stdin.take().expect("stdin is piped");
            if let Some(input) = stdin {
                // The binary may exit before reading, e.g. on a rejected flag
                pipe.write_all(input.as_bytes()).ok();
            }
        }

        child
            .wait_with_output()
            .expect("failed to wait for transcript-splitter binary")
    }
}

/// A transcript long enough to need several parts at the minimum budget
#[allow(dead_code)]
pub fn long_transcript() -> String {
    let sentence = "(0:01:15) Le patient présente une fièvre élevée depuis trois jours,   \
                    associée à une toux productive et une dyspnée d'effort.\n";
    sentence.repeat(60)
}
