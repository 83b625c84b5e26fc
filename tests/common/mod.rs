// tests/common/mod.rs
//! Shared helpers for driving the binary against a throwaway store.
#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;

pub const RAW_SAMPLE: &str = "\
id,name,neighbourhood_group,price,minimum_nights,last_review
2539,\"Clean & quiet apt, home by the park\",Brooklyn,149,1,2018-10-19
2595,Skylit Midtown Castle,Manhattan,225,1,2019-05-21
3647,THE VILLAGE OF HARLEM,Manhattan,150,3,
3831,Cozy Entire Floor,Brooklyn,89,1,2019-07-05
5022,Entire Apt: Spacious Studio,Manhattan,,10,2018-11-19
5099,Large Cozy 1 BR,Manhattan,9,3,2019-06-22
5121,BlissArtsSpace!,Brooklyn,6000,45,2017-10-05
";

pub struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().expect("tempdir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn store_dir(&self) -> PathBuf {
        self.path().join("store")
    }

    pub fn work_dir(&self) -> PathBuf {
        self.path().join("work")
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    /// The binary with store and work dirs pointed into this workspace.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_price_clean"));
        cmd.env_remove("RUST_LOG")
            .env_remove("PRICE_CLEAN_FIELD")
            .arg("--store-dir")
            .arg(self.store_dir())
            .arg("--work-dir")
            .arg(self.work_dir());
        cmd
    }

    /// `command()` plus the six required flags.
    pub fn clean(&self, input: &str, min: &str, max: &str) -> Command {
        let mut cmd = self.command();
        cmd.args([
            "--input_artifact",
            input,
            "--output_artifact",
            "clean_sample.csv",
            "--output_type",
            "clean_sample",
            "--output_description",
            "Data with outliers and null values removed",
            "--min_price",
            min,
            "--max_price",
            max,
        ]);
        cmd
    }

    pub fn stored(&self, name: &str, file: &str) -> String {
        fs::read_to_string(self.store_dir().join(name).join("data").join(file)).expect("stored artifact")
    }

    pub fn run_records(&self) -> Vec<serde_json::Value> {
        let Ok(entries) = fs::read_dir(self.store_dir().join(".runs")) else {
            return Vec::new();
        };
        entries
            .filter_map(Result::ok)
            .map(|e| serde_json::from_str(&fs::read_to_string(e.path()).unwrap()).unwrap())
            .collect()
    }
}
