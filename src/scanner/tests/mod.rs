//! Test modules for the scan source
