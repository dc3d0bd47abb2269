mod sample;

use std::process::ExitCode;

fn main() -> ExitCode {
    marktest::cli::main::<sample::SampleSuite>()
}
