//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and
//! classification functions.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Tokenization error codes
pub mod tokenizer {
    use super::Code;

    pub const NO_MATCHING_RULE: Code = Code::new("E020");
    pub const UNTERMINATED_SECTION: Code = Code::new("E021");
    pub const TOO_MANY_TOKENS: Code = Code::new("E022");
    pub const SECTION_TOO_LARGE: Code = Code::new("E023");
    pub const INPUT_TOO_LARGE: Code = Code::new("E024");
}

/// Token-list algebra error codes
pub mod token_list {
    use super::Code;

    pub const UNEXPECTED_TOKEN: Code = Code::new("E050");
    pub const UNEXPECTED_END: Code = Code::new("E051");
}

/// Consumer parser error codes
pub mod parsers {
    use super::Code;

    pub const MALFORMED_ENTRY: Code = Code::new("E060");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const OPERATION_COMPLETED_SUCCESSFULLY: Code = Code::new("I001");
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");

    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");

    pub const ROWS_PARSED: Code = Code::new("I030");
    pub const CONFIG_PARSED: Code = Code::new("I031");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        // System errors
        registry.insert(
            "ERR001",
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Critical internal system error",
                "File a bug report",
            ),
        );
        registry.insert(
            "ERR002",
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "System initialization failure",
                "Check configuration and dependencies",
            ),
        );

        // Tokenization errors
        registry.insert(
            "E020",
            ErrorMetadata::new(
                "E020",
                "Tokenizer",
                Severity::Medium,
                true,
                false,
                "No rule in the grammar matched at the current position",
                "Add a catch-all rule or remove the offending character",
            ),
        );
        registry.insert(
            "E021",
            ErrorMetadata::new(
                "E021",
                "Tokenizer",
                Severity::Medium,
                true,
                false,
                "Section not terminated before end of input",
                "Add the closing delimiter to the section",
            ),
        );
        registry.insert(
            "E022",
            ErrorMetadata::new(
                "E022",
                "Tokenizer",
                Severity::High,
                false,
                true,
                "Input produces too many tokens, possible DoS attack",
                "Reduce input complexity or split the input",
            ),
        );
        registry.insert(
            "E023",
            ErrorMetadata::new(
                "E023",
                "Tokenizer",
                Severity::Medium,
                false,
                true,
                "Section interior exceeds maximum size limit",
                "Reduce section size or break into smaller parts",
            ),
        );
        registry.insert(
            "E024",
            ErrorMetadata::new(
                "E024",
                "Tokenizer",
                Severity::Medium,
                false,
                true,
                "Input exceeds maximum size limit",
                "Reduce input size or process in smaller pieces",
            ),
        );

        // Token-list algebra errors
        registry.insert(
            "E050",
            ErrorMetadata::new(
                "E050",
                "TokenList",
                Severity::Medium,
                true,
                false,
                "Unexpected token kind at the front of the list",
                "Check the token sequence against the expected shape",
            ),
        );
        registry.insert(
            "E051",
            ErrorMetadata::new(
                "E051",
                "TokenList",
                Severity::Medium,
                true,
                false,
                "Token list ended while a token was still expected",
                "Check for truncated input",
            ),
        );

        // Consumer parser errors
        registry.insert(
            "E060",
            ErrorMetadata::new(
                "E060",
                "Parsers",
                Severity::Medium,
                true,
                false,
                "Configuration entry does not have key=value shape",
                "Fix the entry to use key=value form",
            ),
        );

        // Success codes that carry metadata
        registry.insert(
            "I004",
            ErrorMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                false,
                "System initialization completed successfully",
                "Continue normal operation",
            ),
        );
        registry.insert(
            "I020",
            ErrorMetadata::new(
                "I020",
                "Tokenizer",
                Severity::Low,
                true,
                false,
                "Tokenization completed successfully",
                "Continue to token-list shaping",
            ),
        );

        registry
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for error code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for error code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get error category from error code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenizer_codes_have_metadata() {
        for code in [
            tokenizer::NO_MATCHING_RULE,
            tokenizer::UNTERMINATED_SECTION,
            tokenizer::TOO_MANY_TOKENS,
            tokenizer::SECTION_TOO_LARGE,
            tokenizer::INPUT_TOO_LARGE,
        ] {
            assert_ne!(get_description(code.as_str()), "Unknown error");
            assert_eq!(get_category(code.as_str()), "Tokenizer");
        }
    }

    #[test]
    fn test_limit_errors_require_halt() {
        assert!(requires_halt(tokenizer::TOO_MANY_TOKENS.as_str()));
        assert!(requires_halt(tokenizer::SECTION_TOO_LARGE.as_str()));
        assert!(!requires_halt(tokenizer::NO_MATCHING_RULE.as_str()));
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_severity("E999"), Severity::Medium);
        assert_eq!(get_description("E999"), "Unknown error");
        assert_eq!(get_category("E999"), "Unknown");
        assert!(is_recoverable("E999"));
    }
}
