//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use hexfloor::GenerationError;
    use hexfloor::io::error::invalid_palette;
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = GenerationError::FileSystem {
            path: "/tmp/floor.json".into(),
            operation: "write",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/floor.json"));
    }

    // Tests generation precondition errors carry no source
    // Verified by returning a source for every variant
    #[test]
    fn test_precondition_errors_have_no_source() {
        let errors = [
            GenerationError::EmptyPalette,
            GenerationError::NonPositiveWeight { total: 0.0 },
            GenerationError::InvalidSeed {
                key: "3-4".to_string(),
            },
            GenerationError::CellAlreadyAssigned {
                key: "0-0".to_string(),
            },
        ];

        for error in &errors {
            assert!(error.source().is_none(), "{error}");
        }
    }

    // Tests messages name the offending cell or total
    // Verified by omitting the key from the message
    #[test]
    fn test_precondition_messages() {
        let seed = GenerationError::InvalidSeed {
            key: "3-4".to_string(),
        };
        let weight = GenerationError::NonPositiveWeight { total: -1.5 };

        assert!(seed.to_string().contains("3-4"));
        assert!(weight.to_string().contains("-1.5"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = GenerationError::InvalidParameter {
            parameter: "rows",
            value: "31".to_string(),
            reason: "must be between 5 and 30".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("rows"));
        assert!(message.contains("31"));
        assert!(message.contains("between 5 and 30"));
    }

    // Tests palette helper wraps the reason
    // Verified by dropping the reason from the message
    #[test]
    fn test_invalid_palette_helper() {
        let error = invalid_palette(&"palette has no entries");

        assert!(matches!(error, GenerationError::InvalidPalette { .. }));
        assert!(error.to_string().contains("no entries"));
    }
}
