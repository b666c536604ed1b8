/// Prints a line to stdout in a single write and flushes it.
///
/// Returns an [`std::io::Result`], so callers decide whether a closed pipe is fatal.
#[macro_export]
macro_rules! sh_println {
    () => {
        $crate::io::shell::println(::core::format_args!(""))
    };
    ($($t:tt)*) => {
        $crate::io::shell::println(::core::format_args!($($t)*))
    };
}

/// Prints a styled `Warning:` line to stderr.
#[macro_export]
macro_rules! sh_warn {
    ($($t:tt)*) => {
        $crate::io::shell::warn(::core::format_args!($($t)*))
    };
}

/// Prints a styled `Error:` line to stderr.
#[macro_export]
macro_rules! sh_err {
    ($($t:tt)*) => {
        $crate::io::shell::error(::core::format_args!($($t)*))
    };
}
