//! the args for running esper

use esper_cli_common::LoggingArgs;
use esper_parsing::ParserConfig;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// What to print after processing the input
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Emit {
    /// The token sequence
    Tokens,
    /// The syntax tree
    Ast,
    /// Both the token sequence and the syntax tree
    #[default]
    All,
}

impl Emit {
    pub fn tokens(&self) -> bool {
        matches!(self, Emit::Tokens | Emit::All)
    }

    pub fn ast(&self) -> bool {
        matches!(self, Emit::Ast | Emit::All)
    }
}

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Tokenizes and parses esper source")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// The source file to read, or `-` for stdin
    #[clap(value_name = "source file", value_hint = clap::ValueHint::FilePath, conflicts_with = "eval")]
    file: Option<PathBuf>,
    /// Use CODE as the source instead of reading a file
    #[clap(short = 'e', long = "eval", value_name = "CODE")]
    pub eval: Option<String>,
    /// What to print
    #[clap(long, value_enum, default_value_t = Emit::All)]
    pub emit: Emit,
    /// Fail when the program has more than this many statements
    #[clap(long)]
    statement_limit: Option<usize>,
}

impl Args {
    /// The file to read source from, `None` when source comes from stdin
    pub fn file(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|path| *path != Path::new("-"))
    }

    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            statement_limit: self.statement_limit,
        }
    }
}

impl Deref for Args {
    type Target = LoggingArgs;

    fn deref(&self) -> &Self::Target {
        &self.logging
    }
}
