//! Path-level exclusion data

/// Directory names that are never descended into.
///
/// Entries containing `/` match a run of consecutive path segments, so
/// `public/build` skips `public/build/app.js` but not `build/app.js`.
pub const EXCLUDED_DIRECTORIES: &[&str] = &[
    // Version control and CI metadata
    ".git",
    ".github",
    // Dependencies
    "vendor",
    "node_modules",
    // Runtime data and generated output
    "storage",
    "reports",
    "release",
    "public/build",
    "bootstrap/cache",
    "docs/build",
    "docker",
    // Test caches and coverage
    ".phpunit.cache",
    "coverage-html",
];

/// Extensions (lower-case, with the leading dot) of binary, media and compiled files.
pub const SKIPPED_EXTENSIONS: &[&str] = &[
    // Images
    ".png", ".jpg", ".jpeg", ".gif", ".bmp", ".ico", ".svg",
    // Documents and archives
    ".pdf", ".zip", ".tar", ".gz", ".7z", ".rar",
    // Executables and libraries
    ".exe", ".dll", ".so", ".dylib",
    // Fonts
    ".ttf", ".woff", ".woff2", ".eot",
    // Media
    ".mp3", ".mp4", ".avi", ".mov", ".webm",
    // JVM artifacts
    ".class", ".jar", ".war",
];

/// Hidden files that are still scanned.
pub const HIDDEN_FILE_ALLOW_LIST: &[&str] = &[".env.example", ".gitignore", ".htaccess"];

/// Older sweeper scripts this tool replaces. They are full of marker keywords.
pub const SUPERSEDED_SCANNERS: &[&str] = &["todo-sweeper.php", "todo_sweeper.py"];
