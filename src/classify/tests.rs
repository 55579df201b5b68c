//! Tests for name-based classification.

use super::patterns::{RISKY_FILE_PATTERNS, SAFE_DIRS, SAFE_FILE_PATTERNS};
use super::{Classifier, ClassifierRules, classify};
use crate::entry::Tier;

#[test]
fn built_in_patterns_compile() {
    assert!(Classifier::from_rules(&ClassifierRules::STANDARD).is_ok());
    assert!(Classifier::with_case_rules(&ClassifierRules::STANDARD, true).is_ok());
}

#[test]
fn temp_and_log_files_are_safe() {
    for name in [
        "a.tmp",
        "session.temp",
        "build.log",
        "old.bak",
        "draft.txt~",
        ".DS_Store",
        "Thumbs.db",
        "desktop.ini",
    ] {
        assert_eq!(classify(name, false), Some(Tier::Safe), "{name}");
    }
}

#[test]
fn source_and_config_files_are_risky() {
    for name in [
        "main.py",
        "analysis.ipynb",
        "index.js",
        "app.ts",
        "settings.json",
        "compose.yaml",
        "ci.yml",
        "requirements.txt",
        "package.json",
        "Dockerfile",
        ".env",
        "Makefile",
    ] {
        assert_eq!(classify(name, false), Some(Tier::Risky), "{name}");
    }
}

#[test]
fn unmatched_files_are_unclassified() {
    for name in ["photo.jpg", "README.md", "notes.txt", "Cargo.toml", "main.rs"] {
        assert_eq!(classify(name, false), None, "{name}");
    }
}

#[test]
fn backup_of_source_file_is_safe() {
    // The trailing-tilde rule applies even though the stem looks like source.
    assert_eq!(classify("main.py~", false), Some(Tier::Safe));
    assert_eq!(classify("settings.json.bak", false), Some(Tier::Safe));
}

#[test]
fn safe_wins_when_both_tables_match() {
    let rules = ClassifierRules {
        safe_dirs: &[],
        safe_files: &["*.log"],
        risky_files: &["*.log", "*.py"],
    };
    let classifier = Classifier::from_rules(&rules).unwrap();

    assert_eq!(classifier.classify("debug.log", false), Some(Tier::Safe));
    assert_eq!(classifier.classify("main.py", false), Some(Tier::Risky));
}

#[test]
fn safe_directory_names_are_safe() {
    for name in SAFE_DIRS {
        assert_eq!(classify(name, true), Some(Tier::Safe), "{name}");
    }
}

#[test]
fn other_directories_are_never_classified() {
    // Directory names that would match file globs must stay unclassified.
    for name in [
        "src",
        "logs.log",
        "cache.tmp",
        "scripts.py",
        "node_modules",
        "Dockerfile",
        ".git",
        "__pycache__2",
    ] {
        assert_eq!(classify(name, true), None, "{name}");
    }
}

#[test]
fn safe_directory_name_as_file_is_not_safe() {
    assert_eq!(classify("__pycache__", false), None);
}

#[test]
fn glob_tables_cover_expected_counts() {
    assert_eq!(SAFE_FILE_PATTERNS.len(), 8);
    assert_eq!(RISKY_FILE_PATTERNS.len(), 12);
}

#[test]
fn case_insensitive_rules_match_mixed_case() {
    let classifier = Classifier::with_case_rules(&ClassifierRules::STANDARD, true).unwrap();

    assert_eq!(classifier.classify("ERROR.LOG", false), Some(Tier::Safe));
    assert_eq!(classifier.classify("thumbs.DB", false), Some(Tier::Safe));
    assert_eq!(classifier.classify("Main.PY", false), Some(Tier::Risky));
    assert_eq!(classifier.classify("__PYCACHE__", true), Some(Tier::Safe));
}

#[test]
fn case_sensitive_rules_reject_mixed_case() {
    let classifier = Classifier::with_case_rules(&ClassifierRules::STANDARD, false).unwrap();

    assert_eq!(classifier.classify("ERROR.LOG", false), None);
    assert_eq!(classifier.classify("__PYCACHE__", true), None);
}

#[test]
fn invalid_glob_is_reported() {
    let rules = ClassifierRules {
        safe_dirs: &[],
        safe_files: &["[unclosed"],
        risky_files: &[],
    };
    let err = Classifier::from_rules(&rules).unwrap_err();
    assert!(err.to_string().contains("safe_files"));
}
