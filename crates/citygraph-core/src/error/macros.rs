//! Error macros for citygraph

/// Macro for returning usage errors
#[macro_export]
macro_rules! bail_usage {
    ($msg:expr) => {
        return Err($crate::error::GraphError::BadArguments($msg.to_string()))
    };
}
