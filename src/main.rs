use nutriscan::app;
use std::process::ExitCode;

fn main() -> ExitCode {
    app::startup::startup()
}
