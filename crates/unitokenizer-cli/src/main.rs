//! # unitokenizer CLI

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use unitokenizer::{
    EncodeOptions,
    SpecialToken,
    TokenId,
    TokenizerOptions,
    TruncationSide,
    UniTokenizer,
};

/// Unicode code point tokenizer.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Which end loses ids under truncation: "left" or "right".
    ///
    /// Falls back to `UNITOKENIZER_TRUNCATION_SIDE`, then "left".
    #[arg(long, global = true)]
    pub truncation_side: Option<TruncationSide>,

    /// Fallback max length for truncation and padding.
    ///
    /// Falls back to `UNITOKENIZER_MODEL_MAX_LENGTH`.
    #[arg(long, global = true)]
    pub model_max_length: Option<usize>,

    /// Increase log verbosity; repeatable.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence all logging.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode text to ids; one line of ids per input.
    Encode(EncodeArgs),

    /// Decode ids to text; one line of text per input line.
    Decode(DecodeArgs),

    /// Print the vocabulary size and the special token table.
    Info,
}

/// Arguments for `encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Texts to encode; reads stdin lines when empty.
    pub texts: Vec<String>,

    /// Do not wrap sequences in sequence start / end ids.
    #[arg(long)]
    pub no_special_tokens: bool,

    /// Truncate sequences longer than the max length.
    #[arg(long)]
    pub truncation: bool,

    /// The max length for truncation and padding.
    #[arg(long)]
    pub max_length: Option<usize>,

    /// Right-pad sequences to the max length.
    #[arg(long)]
    pub pad: bool,
}

impl EncodeArgs {
    fn encode_options(&self) -> EncodeOptions {
        EncodeOptions::default()
            .with_add_special_tokens(!self.no_special_tokens)
            .with_truncation(self.truncation)
            .with_max_length(self.max_length)
            .with_pad_to_max_length(self.pad)
    }
}

/// Arguments for `decode`.
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Ids to decode, space or comma separated; reads stdin lines when empty.
    pub ids: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    stderrlog::new()
        .module(module_path!())
        .module("unitokenizer")
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 1)
        .init()
        .context("failed to initialize logging")?;

    let mut options = TokenizerOptions::default().with_model_max_length(cli.model_max_length);
    if let Some(side) = cli.truncation_side {
        options = options.with_truncation_side(side);
    }
    let tokenizer = UniTokenizer::from_options(options).context("invalid tokenizer options")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Command::Encode(args) => run_encode(&tokenizer, args, &mut out)?,
        Command::Decode(args) => run_decode(&tokenizer, args, &mut out)?,
        Command::Info => run_info(&tokenizer, &mut out)?,
    }

    Ok(())
}

fn read_stdin_lines() -> anyhow::Result<Vec<String>> {
    io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .context("failed to read stdin")
}

fn run_encode<W: Write>(
    tokenizer: &UniTokenizer,
    args: &EncodeArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let texts = if args.texts.is_empty() {
        read_stdin_lines()?
    } else {
        args.texts.clone()
    };
    log::info!("encoding {} text(s)", texts.len());

    let batch = tokenizer
        .encode_batch(&texts, &args.encode_options())
        .context("encode failed")?;

    for ids in batch {
        writeln!(out, "{}", format_ids(&ids))?;
    }
    Ok(())
}

fn run_decode<W: Write>(
    tokenizer: &UniTokenizer,
    args: &DecodeArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let lines = if args.ids.is_empty() {
        read_stdin_lines()?
    } else {
        vec![args.ids.join(" ")]
    };
    log::info!("decoding {} line(s)", lines.len());

    let batch = lines
        .iter()
        .map(|line| parse_ids(line))
        .collect::<anyhow::Result<Vec<_>>>()?;

    for text in tokenizer.batch_decode(&batch).context("decode failed")? {
        writeln!(out, "{text}")?;
    }
    Ok(())
}

fn run_info<W: Write>(
    tokenizer: &UniTokenizer,
    out: &mut W,
) -> anyhow::Result<()> {
    writeln!(out, "vocab_size: {}", tokenizer.vocab_size())?;
    writeln!(out, "truncation_side: {}", tokenizer.truncation_side())?;
    match tokenizer.model_max_length() {
        Some(max_length) => writeln!(out, "model_max_length: {max_length}")?,
        None => writeln!(out, "model_max_length: none")?,
    }
    writeln!(out, "special_tokens:")?;
    for special in SpecialToken::all() {
        writeln!(
            out,
            "  {:<5} {:<7} {:#06x}",
            special.role(),
            special.marker(),
            special.id()
        )?;
    }
    Ok(())
}

fn format_ids(ids: &[TokenId]) -> String {
    ids.iter()
        .map(TokenId::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse space or comma separated ids; accepts decimal and `0x` hex.
fn parse_ids(line: &str) -> anyhow::Result<Vec<TokenId>> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| {
            let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                Some(hex) => TokenId::from_str_radix(hex, 16),
                None => s.parse(),
            };
            parsed.with_context(|| format!("invalid token id {s:?}"))
        })
        .collect()
}
