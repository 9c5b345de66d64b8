/// Logs an error together with the call site.
///
/// Usage: `log_err!("Failed to read courses", err);`
#[macro_export]
macro_rules! log_err {
    ($context:expr, $err:expr) => {{
        let location = format!("{}:{}", file!(), line!());
        ::log::error!("{} at {}: {}", $context, location, $err);
    }};
}
