use std::process::ExitCode;

fn main() -> ExitCode {
    match prompt_extract::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error processing the conversations file: {:#}", e);
            eprintln!("Try running with --debug to inspect the file structure:");
            eprintln!("  prompt-extract path/to/conversations.json --debug");
            ExitCode::FAILURE
        }
    }
}
