// Vigenère cipher command-line front end
// Encrypts, decrypts or shows the letter-by-letter alignment of a text

use std::io::{self, IsTerminal, Read, Write};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::debug;

use vigenere::{Direction, Vigenere};

/// Vigenère cipher tool
#[derive(Parser, Debug)]
#[command(name = "vigenere")]
#[command(version)]
#[command(about = "Encrypt and decrypt text with the Vigenère cipher", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt plaintext
    Encrypt(TextArgs),
    /// Decrypt ciphertext
    Decrypt(TextArgs),
    /// Show how each key letter lines up with the text
    Align {
        #[command(flatten)]
        input: TextArgs,

        /// Direction of the transform to visualise
        #[arg(short, long, default_value_t = Direction::Encrypt)]
        direction: Direction,

        /// Emit the alignment as JSON instead of a text grid
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
struct TextArgs {
    /// Keyword; only its ASCII letters are used
    #[arg(short, long, env = "VIGENERE_KEY", hide_env_values = true)]
    key: String,

    /// Text to process; read from stdin when omitted
    text: Option<String>,
}

impl TextArgs {
    /// Returns the text argument, falling back to stdin.
    fn read_text(&self) -> Result<String> {
        if self.text.is_none() && io::stdin().is_terminal() {
            bail!("No text given; pass it as an argument or pipe it on stdin");
        }
        self.read_text_from(io::stdin().lock())
    }

    /// Returns the text argument, falling back to `reader`.
    fn read_text_from(&self, mut reader: impl Read) -> Result<String> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        let mut buf = String::new();
        reader
            .read_to_string(&mut buf)
            .context("Failed to read text from stdin")?;
        trim_trailing_newline(&mut buf);
        Ok(buf)
    }
}

/// Drops the single trailing `\n` or `\r\n` shells add to piped input.
fn trim_trailing_newline(buf: &mut String) {
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let (input, direction, align_json) = match &cli.command {
        Command::Encrypt(input) => (input, Direction::Encrypt, None),
        Command::Decrypt(input) => (input, Direction::Decrypt, None),
        Command::Align {
            input,
            direction,
            json,
        } => (input, *direction, Some(*json)),
    };

    let text = input.read_text()?;
    let cipher = Vigenere::new(&input.key).context("Invalid keyword")?;
    debug!("running {} over {} chars", direction, text.chars().count());

    match align_json {
        None => {
            let output = cipher
                .transform(&text, direction)
                .with_context(|| format!("Failed to {}", direction))?;
            writeln!(out, "{}", output)?;
        }
        Some(json) => {
            let alignment = cipher
                .align(&text, direction)
                .context("Failed to build alignment")?;
            if json {
                let rendered = serde_json::to_string_pretty(&alignment)
                    .context("Failed to serialize alignment")?;
                writeln!(out, "{}", rendered)?;
            } else {
                writeln!(out, "{}", alignment)?;
            }
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    if let Err(e) = run(&cli, &mut stdout.lock()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
