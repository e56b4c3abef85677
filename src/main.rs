mod cli;

use std::{path::Path, process, time::Instant};

use batman::{
    error::{CliResult, ErrorKind},
    syntax::{Lexer, Precedence, Token},
};
use clap::Parser;
use cli::{Cli, Command, OutputFormat};

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let now = Instant::now();

    if let Err(why) = run(cli.command) {
        eprintln!("{why}");
        process::exit(1);
    }

    let duration = now.elapsed();
    log::info!("Finished in {duration:.2?}");
}

fn run(command: Command) -> CliResult<()> {
    match command {
        Command::Tokens {
            source,
            file,
            limit,
            format,
        } => {
            let src = match file {
                Some(path) => read_source(&path)?,
                None => source,
            };
            log::debug!("tokenizing {src:?}");
            for line in token_lines(&src, limit, format) {
                println!("{line}");
            }
        }
        Command::Precedence => {
            for line in precedence_lines() {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn read_source(file_path: &Path) -> CliResult<String> {
    if !file_path.exists() {
        return Err(ErrorKind::MissingFile(format!("{file_path:?}")));
    }

    std::fs::read_to_string(file_path)
        .map_err(|why| ErrorKind::IoError(format!("Failed to read {file_path:?}: {why}")))
}

fn format_token(token: &Token, format: OutputFormat) -> String {
    match format {
        OutputFormat::Debug => format!("{token:?}"),
        OutputFormat::Display => token.to_string(),
    }
}

fn token_lines(src: &str, limit: Option<usize>, format: OutputFormat) -> Vec<String> {
    let mut lexer = Lexer::new(src);

    match limit {
        // Keeps calling past exhaustion, so trailing `None`s are expected.
        Some(n) => (0..n)
            .map(|_| match lexer.next() {
                Some(token) => format!("Some({})", format_token(&token, format)),
                None => "None".to_string(),
            })
            .collect(),
        None => lexer.map(|token| format_token(&token, format)).collect(),
    }
}

fn precedence_lines() -> Vec<String> {
    Precedence::ALL
        .into_iter()
        .map(|level| {
            let ops: Vec<String> = level.punctuators().iter().map(|p| p.to_string()).collect();
            format!("{} {:<12} {}", level.rank(), level, ops.join(" "))
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::{precedence_lines, token_lines};
    use crate::cli::OutputFormat;

    #[test]
    fn limited_calls_show_exhaustion() {
        let lines = token_lines("b + a", Some(5), OutputFormat::Debug);
        let expected = &[
            "Some(Name(\"b\"))",
            "Some(Punctuator(Plus))",
            "Some(Name(\"a\"))",
            "None",
            "None",
        ];

        assert_eq!(lines, expected);
    }

    #[test]
    fn unlimited_display_tokens() {
        let lines = token_lines("x1 + 2y", None, OutputFormat::Display);
        assert_eq!(lines, &["x", "+", "y"]);

        assert!(token_lines("", None, OutputFormat::Debug).is_empty());

        let lines = token_lines("", Some(2), OutputFormat::Debug);
        assert_eq!(lines, &["None", "None"]);
    }

    #[test]
    fn precedence_table_rows() {
        let lines = precedence_lines();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "1 assignment   =");
        assert_eq!(lines[2], "3 sum          + -");
        assert_eq!(lines[5], "6 prefix       + - ~ !");
        assert_eq!(lines[7], "8 call         (");
    }
}
