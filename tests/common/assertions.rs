//! Custom assertion macros for CLI tests.
//!
//! These macros provide descriptive failure messages to aid debugging.

/// Assert that output (stdout or stderr) contains expected pattern.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "deployed to");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern) || $result.stderr.contains($pattern),
            "Expected output to contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert that output does NOT contain a pattern.
#[macro_export]
macro_rules! assert_output_not_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            !$result.stdout.contains($pattern) && !$result.stderr.contains($pattern),
            "Expected output to NOT contain '{}'\n\
             stdout:\n{}\n\
             stderr:\n{}",
            $pattern,
            $result.stdout,
            $result.stderr
        );
    };
}

/// Assert the exit code, printing both streams on mismatch.
#[macro_export]
macro_rules! assert_exit_code {
    ($result:expr, $code:expr) => {
        assert_eq!(
            $result.exit_code, $code,
            "unexpected exit code\nstdout:\n{}\nstderr:\n{}",
            $result.stdout, $result.stderr
        );
    };
}

/// Assert that stdout alone contains a pattern.
#[macro_export]
macro_rules! assert_stdout_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stdout.contains($pattern),
            "Expected stdout to contain '{}'\nstdout:\n{}",
            $pattern,
            $result.stdout
        );
    };
}

/// Assert that stderr alone contains a pattern.
#[macro_export]
macro_rules! assert_stderr_contains {
    ($result:expr, $pattern:expr) => {
        assert!(
            $result.stderr.contains($pattern),
            "Expected stderr to contain '{}'\nstderr:\n{}",
            $pattern,
            $result.stderr
        );
    };
}
