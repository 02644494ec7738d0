pub mod compile_time {
    pub mod tokenizer {
        /// Maximum input size accepted by a single tokenize call (10MB)
        /// SECURITY: Prevents DoS attacks via enormous inputs
        pub const MAX_INPUT_LENGTH: usize = 10 * 1024 * 1024;

        /// Maximum number of tokens produced from a single input
        /// SECURITY: Prevents DoS via token explosion attacks
        pub const MAX_TOKEN_COUNT: usize = 1_000_000;

        /// Maximum unescaped section interior size (1MB)
        /// SECURITY: Prevents DoS attacks via enormous delimited sections
        pub const MAX_SECTION_LENGTH: usize = 1_048_576;
    }

    pub mod logging {
        /// Log buffer size for memory-backed loggers
        /// RESOURCE: Controls memory usage for captured log events
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum log message length
        /// RESOURCE: Prevents memory attacks via huge messages
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 10_000;

        /// Minimum log level for error events (cannot be changed at runtime)
        /// Errors are always logged regardless of user preference
        pub const ERROR_MIN_LOG_LEVEL: u8 = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::compile_time::*;

    #[test]
    fn test_limits_are_sane() {
        assert!(tokenizer::MAX_SECTION_LENGTH < tokenizer::MAX_INPUT_LENGTH);
        assert!(tokenizer::MAX_TOKEN_COUNT > 0);
        assert!(logging::LOG_BUFFER_SIZE >= 100);
    }
}
