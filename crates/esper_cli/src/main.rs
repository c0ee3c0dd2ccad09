use crate::args::Args;
use clap::Parser;
use esper_parsing::{parse_with_config, tokenize};
use eyre::WrapErr;
use std::io;
use std::io::{stderr, stdout, Read, Stderr, StderrLock, Stdout, StdoutLock, Write};
use tracing::metadata::LevelFilter;
use tracing::{debug, trace, Level, Metadata};
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

mod args;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.log_level_filter())?;
    trace!("starting esper with args: {args:?}");
    debug!("esper version: {}", env!("CARGO_PKG_VERSION"));

    let source = read_source(&args)?;
    let tokens = tokenize(&source)?;
    if args.emit.tokens() {
        println!("{tokens:#?}");
    }
    if args.emit.ast() {
        let program = parse_with_config(&tokens, args.parser_config())?;
        debug!("parsed {} statements", program.body.len());
        println!("{program:#?}");
    }

    Ok(())
}

/// Reads the source named by the args: the `-e` snippet, a file, or stdin
fn read_source(args: &Args) -> eyre::Result<String> {
    if let Some(code) = &args.eval {
        return Ok(code.clone());
    }
    match args.file() {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("could not read {}", path.display())),
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .wrap_err("could not read stdin")?;
            Ok(source)
        }
    }
}

struct StdioWriter {
    stdout: Stdout,
    stderr: Stderr,
}

enum StdioLock<'a> {
    Stdout(StdoutLock<'a>),
    Stderr(StderrLock<'a>),
}

impl<'a> Write for StdioLock<'a> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            StdioLock::Stdout(stdout) => stdout.write(buf),
            StdioLock::Stderr(stderr) => stderr.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            StdioLock::Stdout(stdout) => stdout.flush(),
            StdioLock::Stderr(stderr) => stderr.flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for StdioWriter {
    type Writer = StdioLock<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        StdioLock::Stdout(self.stdout.lock())
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        // warnings and errors compare as the least verbose levels
        if meta.level() <= &Level::WARN {
            StdioLock::Stderr(self.stderr.lock())
        } else {
            StdioLock::Stdout(self.stdout.lock())
        }
    }
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(StdioWriter {
                    stdout: stdout(),
                    stderr: stderr(),
                })
                .with_filter(level_filter),
        )
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}
