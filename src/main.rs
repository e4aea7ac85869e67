use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use pk::config::{excludes_from_env, ConfigManager, Overrides, Settings};
use pk::error::PkError;
use pk::logging;
use pk::runner::{open_input, Runner};

#[derive(Parser)]
#[command(name = "pk")]
#[command(version)]
#[command(about = "A field extraction utility", long_about = None)]
#[command(after_help = concat!(
    "FIELDS:\n",
    "  N        the N-th input field, counting from 1\n",
    "  N..M     fields N through M\n",
    "  N..      field N through the last field\n",
    "  ..M      the first field through field M\n",
    "  ..       every field\n",
    "  TEXT     anything else is printed as given\n\n",
    "EXAMPLES:\n",
    "  $ echo 1 2 | pk ..\n",
    "  1 2\n",
    "  $ pk -d : -f /etc/passwd 1 7\n\n",
    "ENVIRONMENT:\n",
    "  PK_EXCLUDES   default for --excludes (FIELDX_EXCLUDES is also read)\n",
    "  PK_CONFIG     path of the JSON defaults file",
))]
struct Cli {
    #[arg(short, long, help = "Backslash escapes delimiters")]
    backslash: bool,

    #[arg(
        short,
        long,
        value_name = "STRING",
        help = "Characters used as input delimiters"
    )]
    delimiters: Option<String>,

    #[arg(short, long, help = "Allow empty fields")]
    empty: bool,

    #[arg(
        short = 'E',
        long,
        value_name = "STRINGS",
        num_args = 0..=1,
        require_equals = true,
        help = "Strings excluded from output (separated by :)"
    )]
    excludes: Option<Option<String>>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Read input from file instead of stdin"
    )]
    file: Option<PathBuf>,

    #[arg(
        short,
        long,
        value_name = "STRING",
        num_args = 0..=1,
        require_equals = true,
        help = "Change output text used for empty fields"
    )]
    null: Option<Option<String>>,

    #[arg(
        short,
        long,
        value_name = "STRING",
        help = "Separator used in output text"
    )]
    separator: Option<String>,

    #[arg(
        short,
        long,
        help = "Trim non-alphanumeric characters before printing"
    )]
    trim: bool,

    #[arg(short, long, help = "Enable verbose output on stderr")]
    verbose: bool,

    #[arg(
        required = true,
        trailing_var_arg = true,
        value_name = "FIELD",
        help = "Fields to print"
    )]
    fields: Vec<String>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            delimiters: self.delimiters.clone(),
            separator: self.separator.clone(),
            null_text: self.null.clone(),
            excludes: self.excludes.clone(),
            allow_empty_tokens: self.empty,
            strip_escapes: self.backslash,
            trim: self.trim,
            input: self.file.clone(),
            fields: self.fields.clone(),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<PkError>() {
                Some(pk_err) => eprint!("{pk_err}"),
                None => eprintln!("pk: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("pk: {e}");
    }

    let started = Instant::now();
    let file = ConfigManager::new().load()?;
    let settings = Settings::resolve(file.as_ref(), excludes_from_env(), &cli.overrides())?;
    logging::log_settings(&settings);

    let input = open_input(settings.input.as_deref())?;
    logging::log_input_source(settings.input.as_deref());

    let summary = Runner::from_settings(&settings).run(input, io::stdout().lock())?;
    logging::log_run_summary(&summary);
    logging::log_performance(
        "run",
        u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
    );

    Ok(())
}
