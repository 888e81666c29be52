use std::process::ExitCode;

fn main() -> ExitCode {
    brewguide_cli::run()
}
