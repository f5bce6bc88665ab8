use std::process::ExitCode;

use httpfields::{HttpParser, ParserConfig};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage: httpfields <message-file> [config.toml]";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(message_path) = args.next() else {
        eprintln!("{USAGE}");
        return ExitCode::FAILURE;
    };
    let config = args
        .next()
        .map(ParserConfig::from_file)
        .unwrap_or_default();

    let raw = match std::fs::read_to_string(&message_path) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("Fail to read {}: {err}", message_path);
            return ExitCode::FAILURE;
        }
    };

    let mut parser = HttpParser::with_config(config);
    if let Err(err) = parser.parse(&raw) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match parser.header() {
        Some(header) => println!("{header}"),
        None => println!("(no start-line)"),
    }
    for (_, entry) in parser.fields().iter() {
        for field in entry.fields() {
            println!("{field}");
        }
    }

    ExitCode::SUCCESS
}
