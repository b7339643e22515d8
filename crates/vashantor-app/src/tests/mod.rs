mod config_tests;
mod ui_tests;
