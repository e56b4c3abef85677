#[derive(clap::Parser, Debug)]
#[clap(about, long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OutputFormat {
    /// `Name("b")`, `Punctuator(Plus)`
    Debug,
    /// The literal token text
    Display,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Command {
    /// Tokenize an expression and print the tokens
    Tokens {
        /// Source text to tokenize
        #[arg(default_value = "b + a", conflicts_with = "file")]
        source: String,

        /// Read the source text from a file instead
        #[arg(short, long)]
        file: Option<std::path::PathBuf>,

        /// Call the tokenizer exactly this many times, printing each raw result
        #[arg(short, long)]
        limit: Option<usize>,

        /// Specifies how tokens are printed
        #[arg(long)]
        #[clap(value_enum, default_value_t = OutputFormat::Debug)]
        format: OutputFormat,
    },

    /// Print the operator precedence table
    Precedence,
}
