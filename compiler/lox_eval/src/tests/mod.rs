//! Operator test suites, kept out of the implementation files.
