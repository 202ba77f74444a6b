/// Logs the error of a `Result` without propagating it, for failures the
/// main loop recovers from by reprompting.
macro_rules! log_if_err {
    ($result:expr, $($arg:tt)*) => {{
        if let Err(ref e) = $result {
            log::error!("{}: {}", format_args!($($arg)*), e);
        }
    }};
}
