//! Built-in classification tables.

/// Directory names that are always disposable.
///
/// These are also the only dot-prefixed directories the scanner looks at.
pub const SAFE_DIRS: &[&str] = &["__pycache__", ".pytest_cache", ".mypy_cache"];

/// File globs for disposable files: temp files, logs, backups, OS metadata.
pub const SAFE_FILE_PATTERNS: &[&str] = &[
    "*.tmp",
    "*.temp",
    "*.log",
    "*.bak",
    "*~",
    ".DS_Store",
    "Thumbs.db",
    "desktop.ini",
];

/// File globs for source code and project configuration.
pub const RISKY_FILE_PATTERNS: &[&str] = &[
    "*.py",
    "*.ipynb",
    "*.js",
    "*.ts",
    "*.json",
    "*.yaml",
    "*.yml",
    "requirements.txt",
    "package.json",
    "Dockerfile",
    ".env",
    "Makefile",
];
