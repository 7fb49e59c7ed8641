use std::io;
use std::process;

use alphabet::Alphabet;
use clap::Parser;
use config::{Config, Strategy, DEFAULT_COUNT, DEFAULT_MAX_LENGTH};
use runner::Runner;

mod alphabet;
mod config;
mod emitter;
mod error;
mod generator;
mod random;
pub mod runner;
mod sequential;
mod stat;

const USAGE: &str = "usage: generate_entries [<nb_entries>] [<max_entry_length>] [--random]";

#[derive(Parser, Debug)]
#[command(name = "generate_entries", version, about, long_about = None, disable_help_flag = true)]
struct Args {
    /// Number of entries to generate
    #[arg(default_value_t = DEFAULT_COUNT)]
    count: usize,

    /// Maximum key length
    #[arg(default_value_t = DEFAULT_MAX_LENGTH)]
    max_length: usize,

    /// Draw random keys instead of enumerating them
    #[arg(long)]
    random: bool,

    /// Only emit the put pass
    #[arg(long)]
    put_only: bool,

    /// Text written at the start of every line
    #[arg(long, default_value = "")]
    prefix: String,

    #[arg(long, value_enum, default_value_t = Alphabet::Lowercase)]
    alphabet: Alphabet,

    /// Seed for --random
    #[arg(long)]
    seed: Option<u64>,
}

// help wins over every other argument, parseable or not
fn wants_help<I, S>(args: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .skip(1)
        .any(|arg| matches!(arg.as_ref(), "-h" | "--help"))
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            strategy: if args.random {
                Strategy::Random
            } else {
                Strategy::Sequential
            },
            alphabet: args.alphabet,
            count: args.count,
            max_length: args.max_length,
            prefix: args.prefix,
            put_only: args.put_only,
            seed: args.seed,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if wants_help(std::env::args()) {
        eprintln!("{}", USAGE);
        return;
    }

    // parse the command args
    let args = Args::parse();

    let result = Config::from(args).validate().and_then(|config| {
        let runner = Runner::new(config);
        runner.install_interrupt_handler()?;
        runner.run(io::stdout().lock())
    });

    if let Err(e) = result {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}
