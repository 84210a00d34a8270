// Test modules for Fetchlist
// Each module holds the unit tests for the corresponding source file

mod tui_tests;
