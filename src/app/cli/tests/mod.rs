//! Test modules for the command line interface

mod args_tests;
