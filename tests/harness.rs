//! Test harness for stitch integration tests

use std::path::Path;
use std::process::Command;

pub use stitch::test_utils::TestTree;

/// Run the stitch binary in `dir` and capture (stdout, stderr, success).
pub fn run_stitch(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_stitch");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run stitch");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Table of contents lines (`- [path](#anchor)`) of a generated document.
#[allow(dead_code)]
pub fn toc_entries(document: &str) -> Vec<String> {
    let Some(start) = document.find("## Table of Contents") else {
        return Vec::new();
    };
    let toc = &document[start..];
    let end = toc.find("\n---\n").unwrap_or(toc.len());
    toc[..end]
        .lines()
        .filter(|l| l.starts_with("- ["))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_add_file() {
        let tree = TestTree::new();
        let file_path = tree.add_file("nested/test.rs", "fn main() {}");
        assert!(file_path.exists());
    }

    #[test]
    fn test_toc_entries() {
        let doc = "# x\n\n## Table of Contents\n\n- [a](#a)\n- [b](#b)\n\n---\n\n- [not toc](#n)\n";
        assert_eq!(toc_entries(doc), vec!["- [a](#a)", "- [b](#b)"]);
    }
}
