use clap::Parser;
use nhflib::{
    convert::convert,
    error::{NhfError, Result},
};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "nhf",
    version,
    about = "Convert a NiceHash mining report into an accounting ledger CSV",
    override_usage = "nhf -i report.csv -o output.csv"
)]
struct Cli {
    /// NiceHash report csv file path
    #[arg(short = 'i', long = "input")]
    input: PathBuf,

    /// output report file path
    #[arg(short = 'o', long = "output")]
    output: PathBuf,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Журнал содержит финансовые данные: новый файл получает права 0600.
fn create_private(path: &Path) -> std::io::Result<File> {
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(0o600);
    }
    opts.open(path)
}

fn run(cli: &Cli) -> Result<()> {
    let input = File::open(&cli.input).map_err(|source| NhfError::OpenInput {
        path: cli.input.clone(),
        source,
    })?;

    // выходной файл создаём только после успешной конвертации
    let mut ledger = Vec::new();
    convert(BufReader::new(input), &mut ledger)?;

    let mut out = create_private(&cli.output).map_err(|source| NhfError::CreateOutput {
        path: cli.output.clone(),
        source,
    })?;
    out.write_all(&ledger)?;
    out.flush()?;
    debug!(path = %cli.output.display(), bytes = ledger.len(), "output written");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
