//! Edge case tests for arxsm-lex
