use std::io::Read;

use cipher_strategies::{transform, Algorithm, Config, Mode};
use clap::Parser;

/// Command-line arguments for the encrypt/decrypt program.
#[derive(Parser, Debug)]
struct Cli {
    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: Mode,

    /// Integer key for the cipher, any sign
    #[arg(
        short,
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        help = "Key for the cipher"
    )]
    key: i32,

    /// Cipher algorithm to apply
    #[arg(
        short,
        long,
        default_value = "shift",
        help = "Algorithm to use (shift/unicode)"
    )]
    algorithm: Algorithm,

    /// Message given directly on the command line
    #[arg(short, long, help = "Message to transform")]
    data: Option<String>,

    /// File to read the message from when --data is absent
    #[arg(short, long = "in", help = "Path to the input file")]
    input: Option<String>,

    /// File to write the result to instead of stdout
    #[arg(short, long = "out", help = "Path to the output file")]
    output: Option<String>,
}

fn main() {
    let cli: Cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let message = resolve_message(cli.data, cli.input.as_deref())?;

    let config = Config::new(cli.mode, cli.key, cli.algorithm, message);
    let result = transform(&config);

    match cli.output {
        Some(path) => std::fs::write(&path, result)?,
        None => println!("{}", result),
    }

    Ok(())
}

/// Resolves the message with the precedence data > input file > stdin.
fn resolve_message(data: Option<String>, input: Option<&str>) -> std::io::Result<String> {
    if let Some(message) = data {
        return Ok(message);
    }

    if let Some(path) = input {
        return Ok(std::fs::read_to_string(path)?.trim().to_string());
    }

    // Neither --data nor --in given: take the whole of stdin.
    let mut message = String::new();
    std::io::stdin().read_to_string(&mut message)?;
    Ok(message.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_takes_precedence_over_input_file() {
        let message = resolve_message(Some("direct".to_string()), Some("nonexistent.txt")).unwrap();
        assert_eq!(message, "direct");
    }

    #[test]
    fn test_message_read_from_file_is_trimmed() {
        let path = std::env::temp_dir().join("encrypt_decrypt_test_in.txt");
        std::fs::write(&path, "we found a treasure\n").unwrap();

        let message = resolve_message(None, Some(path.to_str().unwrap())).unwrap();
        assert_eq!(message, "we found a treasure");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_input_file_is_an_error() {
        let result = resolve_message(None, Some("no/such/file.txt"));
        assert!(result.is_err());
    }
}
