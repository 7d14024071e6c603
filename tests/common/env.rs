//! Test environment builder for isolated Componentry testing.
//!
//! Provides `TestEnv` - a temp project directory and a temp on-disk
//! registry, plus helpers to run the CLI against them.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::{write_registry, GLOBALS_CSS, PROJECT_CONFIG};

/// Result of running a Componentry CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Check if command succeeded
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// stdout parsed as NDJSON, one value per line
    pub fn json_lines(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", l, e))
            })
            .collect()
    }
}

/// Isolated project and registry directories.
pub struct TestEnv {
    pub project_root: TempDir,
    pub registry_root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Fixture registry, project config and a starter stylesheet.
    pub fn new() -> Self {
        let env = Self::bare();
        env.write_project_file("components.toml", PROJECT_CONFIG);
        env.write_project_file("app/globals.css", GLOBALS_CSS);
        env
    }

    /// Fixture registry and an empty project.
    pub fn bare() -> Self {
        let project_root = TempDir::new().expect("Failed to create project dir");
        let registry_root = TempDir::new().expect("Failed to create registry dir");
        write_registry(registry_root.path());
        Self {
            project_root,
            registry_root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_componentry")),
        }
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn registry_path(&self) -> &Path {
        self.registry_root.path()
    }

    /// Run the CLI from the project root against the fixture registry
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI from the project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .env("COMPONENTRY_REGISTRY_URL", self.registry_root.path())
            .env_remove("REGISTRY_URL")
            .env_remove("COMPONENTRY_STYLE")
            .env_remove("RUST_LOG")
            .env("NO_COLOR", "1");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute componentry");
        output_to_result(output)
    }

    /// Read a project file's content
    pub fn read_project_file(&self, relative_path: &str) -> String {
        let full_path = self.project_path(relative_path);
        std::fs::read_to_string(&full_path)
            .unwrap_or_else(|e| panic!("Failed to read project file {}: {}", relative_path, e))
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) {
        let full_path = self.project_path(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
    }
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
