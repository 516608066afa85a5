mod compile;
mod demo_engine;
mod derivation_io;
mod generate;
mod serialize;
mod unparse;

use anyhow::Context;
use compile::CompileCommand;
use generate::GenerateCommand;
use serialize::SerializeCommand;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use unparse::UnparseCommand;

#[derive(Debug, clap::Parser)]
#[command(version, about, styles = clap::builder::Styles::styled())]
pub struct Cli {
    #[clap(flatten)]
    global_options: GlobalOptions,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        setup_logger(&self.global_options).context("setting up logger")?;
        match self.command {
            Command::Compile(cmd) => cmd.run(self.global_options),
            Command::Generate(cmd) => cmd.run(self.global_options),
            Command::Serialize(cmd) => cmd.run(self.global_options),
            Command::Unparse(cmd) => cmd.run(self.global_options),
        }
    }
}

#[derive(Debug, clap::Parser)]
pub(crate) struct GlobalOptions {
    /// Log level used when `RUST_LOG` doesn't override it.
    #[clap(long, default_value = "info")]
    default_log_level: LevelFilter,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Compile a grammar IR (JSON) into a self-contained Rust engine source module.
    Compile(CompileCommand),
    /// Smoke-test a bundled demo grammar's generator/mutator.
    Generate(GenerateCommand),
    /// Render a derivation file to bytes, the AFL `main.c` print-loop path.
    Serialize(SerializeCommand),
    /// Reconstruct a derivation from a byte string against a bundled demo grammar.
    Unparse(UnparseCommand),
}

fn setup_logger(global_options: &GlobalOptions) -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_timer(fmt::time::ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_owned())))
        .with(
            EnvFilter::builder()
                .with_default_directive(global_options.default_log_level.into())
                .from_env()
                .context("constructing log filter from env")?,
        )
        .init();
    Ok(())
}
