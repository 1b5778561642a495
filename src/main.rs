use dependency_analyzer::app;
use std::process::ExitCode;

fn main() -> ExitCode {
    app::run()
}
