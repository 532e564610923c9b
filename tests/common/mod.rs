#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use questionnaire::cli::output::{set_preferences, OutputPreferences};
use tempfile::TempDir;

pub const NESTED_CATEGORIES: &str = "
Category:
  - food
  - transport:
      - public
      - taxi
      - train
  - entertainment:
      - magazine:
          - Linux Format
          - PC World
      - movie
      - concert
  - utilities
Account:
  - savings
  - checking
  - cash
  - crypto wallet
";

/// Scratch directory with helpers for the files a run touches.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        plain_output();
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        fs::write(&path, contents).expect("write fixture");
        path
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).expect("read file")
    }
}

pub fn plain_output() {
    set_preferences(OutputPreferences {
        plain_mode: true,
        quiet_mode: false,
    });
}

pub fn instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 16)
        .unwrap()
        .and_hms_opt(13, 0, 0)
        .unwrap()
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
