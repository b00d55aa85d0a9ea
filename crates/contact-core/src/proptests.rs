//! Property-based tests for submission validation.
