// Test module for lexer
//
// Unit tests for the whitespace lexer, grouped by category.

mod edge_cases;
