pub mod app;
pub mod controller;
pub mod core;
pub mod lookup;
pub mod presentation;
pub mod scanner;
