// Test module for quoter
//
// Tests are organized by category: core quoting, configuration,
// boundaries, splitting and diagnostics.

mod quote_tests;
