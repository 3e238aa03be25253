/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a startup result, logging the error and exiting on failure.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        }
    };
}
