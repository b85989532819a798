use std::env::args_os;
use std::process::ExitCode;

use huffman_zipper::{generate_reports, CLIParser};

fn main() -> ExitCode {
    let mut cli_parser = CLIParser::default();
    let arguments = cli_parser.parse(args_os());
    match generate_reports(&arguments) {
        Ok(reports) => {
            for report in reports {
                println!("{}", report);
            }
            println!("All round trips succeeded");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Report failed because of: {}", e);
            ExitCode::FAILURE
        }
    }
}
