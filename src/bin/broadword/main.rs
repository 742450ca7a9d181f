//! Broadword CLI tool for inspecting 64-bit words.

use anyhow::{ensure, Context, Result};
use broadword::Word;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "broadword")]
#[command(about = "Popcount, rank and select on 64-bit words", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the binary form, counts and set positions of a word
    Inspect(InspectArgs),
    /// Count ones (or zeros) in positions 0..=I
    Rank(RankArgs),
    /// Find the position of the K-th one (or zero), 0-indexed
    Select(SelectArgs),
    /// Generate seeded random words, one binary string per line
    Generate(GenerateArgs),
}

/// Show the binary form, counts and set positions of a word
#[derive(Debug, Parser)]
struct InspectArgs {
    /// Word as binary digits, or with a 0b/0x prefix
    #[arg(value_parser = parse_word_arg)]
    word: Word,

    /// Emit JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Parser)]
struct RankArgs {
    /// Word as binary digits, or with a 0b/0x prefix
    #[arg(value_parser = parse_word_arg)]
    word: Word,

    /// Last position included in the count (0-63)
    index: usize,

    /// Count zeros instead of ones
    #[arg(long)]
    zeros: bool,
}

#[derive(Debug, Parser)]
struct SelectArgs {
    /// Word as binary digits, or with a 0b/0x prefix
    #[arg(value_parser = parse_word_arg)]
    word: Word,

    /// Rank of the bit to find (0-indexed)
    k: usize,

    /// Select zeros instead of ones
    #[arg(long)]
    zeros: bool,
}

#[derive(Debug, Parser)]
struct GenerateArgs {
    /// Number of words to generate
    count: usize,

    /// Bit distribution
    #[arg(short, long, default_value = "uniform")]
    pattern: PatternArg,

    /// Probability of a set bit for the uniform pattern (0.0-1.0)
    #[arg(long, default_value = "0.5")]
    density: f64,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value = "42")]
    seed: u64,
}

#[derive(Debug, Clone, ValueEnum)]
enum PatternArg {
    /// Each bit set independently with --density probability (default)
    Uniform,
    /// About one set bit per word
    Sparse,
    /// About one clear bit per word
    Dense,
    /// Alternating runs of ones and zeros
    Runs,
}

impl From<PatternArg> for word_generators::WordPattern {
    fn from(arg: PatternArg) -> Self {
        match arg {
            PatternArg::Uniform => word_generators::WordPattern::Uniform,
            PatternArg::Sparse => word_generators::WordPattern::Sparse,
            PatternArg::Dense => word_generators::WordPattern::Dense,
            PatternArg::Runs => word_generators::WordPattern::Runs,
        }
    }
}

/// Parse a word argument: plain or `0b`-prefixed binary, or `0x`-prefixed hex.
fn parse_word_arg(s: &str) -> Result<Word, String> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u64::from_str_radix(hex, 16)
            .map(Word::new)
            .map_err(|e| format!("Invalid hex word '{}': {}", s, e));
    }
    let digits = s.strip_prefix("0b").unwrap_or(s);
    Word::parse(digits).map_err(|e| e.to_string())
}

fn inspect(args: InspectArgs) -> Result<()> {
    let w = args.word;
    let positions: Vec<usize> = w.ones().collect();

    if args.json {
        let report = serde_json::json!({
            "word": w.to_string(),
            "value": w,
            "ones": w.count_ones(),
            "zeros": w.count_zeros(),
            "least_set_bit": w.least_set_bit_index(),
            "positions": positions,
        });
        let out = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{}", out);
        return Ok(());
    }

    println!("word:          {}", w);
    println!("hex:           {:#018x}", w.value());
    println!("ones:          {}", w.count_ones());
    println!("zeros:         {}", w.count_zeros());
    match w.least_set_bit_index() {
        Some(i) => println!("least set bit: {}", i),
        None => println!("least set bit: none"),
    }
    println!("positions:     {:?}", positions);
    Ok(())
}

fn rank(args: RankArgs) -> Result<()> {
    ensure!(
        args.index < Word::BITS,
        "Index {} out of range (0-{})",
        args.index,
        Word::BITS - 1
    );
    let r = if args.zeros {
        args.word.rank0(args.index)
    } else {
        args.word.rank1(args.index)
    };
    println!("{}", r);
    Ok(())
}

fn select(args: SelectArgs) -> Result<()> {
    let pos = if args.zeros {
        args.word.select0(args.k)
    } else {
        args.word.select1(args.k)
    };
    match pos {
        Some(p) => println!("{}", p),
        None => {
            println!("none");
            eprintln!(
                "✗ word has only {} {}",
                args.word.count(!args.zeros),
                if args.zeros { "zeros" } else { "ones" }
            );
        }
    }
    Ok(())
}

fn generate(args: GenerateArgs) -> Result<()> {
    ensure!(
        (0.0..=1.0).contains(&args.density),
        "Density {} must be between 0.0 and 1.0",
        args.density
    );
    let words =
        word_generators::generate_words(args.count, args.pattern.into(), args.density, args.seed);
    for w in &words {
        println!("{}", w);
    }
    eprintln!("✓ Generated {} words (seed {})", words.len(), args.seed);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Inspect(args) => inspect(args),
        Command::Rank(args) => rank(args),
        Command::Select(args) => select(args),
        Command::Generate(args) => generate(args),
    }
}

mod word_generators;
