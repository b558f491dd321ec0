use clap::{Parser, Subcommand};
use otrs_import::cli::{self, DumpFormat, ImportOptions};
use otrs_import::console::{ConsoleConfig, DEFAULT_CONSOLE, DEFAULT_INTERPRETER};
use otrs_import::types::Selection;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "otrs-import")]
#[command(about = "Import agents, customers, customer users and config items from a workbook into OTRS")]
#[command(long_about = "otrs-import - workbook → otrs.Console.pl

Each worksheet holds one entity kind, named after it:
  agent            → Admin::User::Add
  customer         → Admin::CustomerCompany::Add
  customer_user    → Admin::CustomerUser::Add
  ci - <Class>     → Admin::ITSM::ConfigItem::Add --class <Class>

Row 1 is the header; every following row becomes one command.

COMMANDS:
  import   - Run one console command per row
  dump     - Print the mapped entities and exit

EXAMPLES:
  otrs-import import assets.xlsx --dry-run     # Show commands only
  otrs-import import assets.xlsx --ci          # Config items only
  otrs-import dump assets.xlsx --format json")]
#[command(version)]
struct Cli {
    /// Debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(long_about = "Import a workbook through otrs.Console.pl.

Without kind flags every kind is imported, in the order
agent, customer, customer_user, ci. With any kind flag only
the flagged kinds are imported.

CONFIG ITEM ATTRIBUTES:
  attr-<Name>          → --attribute <Name>=<value>
  attrDate-<Name>      → --attribute <Name>=YYYY-MM-DD
  attrDateTime-<Name>  → --attribute <Name>=YYYY-MM-DD HH:MM:SS

  Date cells accept text such as '2024-06-01', 'June 1 2024',
  '01.06.2024', 'yesterday' or '3 days ago'. An unreadable date
  stops the import at that row.

A failing console command is reported and the import continues.")]
    /// Run one console command per workbook row
    Import {
        /// Path to the workbook (.xlsx, .xls, .ods)
        workbook: PathBuf,

        /// Import agents
        #[arg(long)]
        agent: bool,

        /// Import customers
        #[arg(long)]
        customer: bool,

        /// Import customer users
        #[arg(long)]
        customer_user: bool,

        /// Import config items
        #[arg(long)]
        ci: bool,

        /// Print commands without executing them
        #[arg(short = 'n', long)]
        dry_run: bool,

        /// Format of the entity dump printed before the commands
        #[arg(long, value_enum, default_value_t = DumpFormat::Yaml)]
        dump_format: DumpFormat,

        /// Interpreter used to run the console script
        #[arg(long, env = "OTRS_IMPORT_PERL", default_value = DEFAULT_INTERPRETER)]
        perl: PathBuf,

        /// Path to otrs.Console.pl
        #[arg(long, env = "OTRS_IMPORT_CONSOLE", default_value = DEFAULT_CONSOLE)]
        console: PathBuf,
    },

    /// Print the mapped entities and exit
    Dump {
        /// Path to the workbook (.xlsx, .xls, .ods)
        workbook: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = DumpFormat::Yaml)]
        format: DumpFormat,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "otrs_import=debug"
    } else {
        "otrs_import=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Import {
            workbook,
            agent,
            customer,
            customer_user,
            ci,
            dry_run,
            dump_format,
            perl,
            console,
        } => {
            let options = ImportOptions {
                workbook,
                selection: Selection {
                    agent,
                    customer,
                    customer_user,
                    ci,
                },
                dry_run,
                dump_format,
                console: ConsoleConfig {
                    interpreter: perl,
                    script: console,
                },
            };
            cli::import(options)?;
        }

        Commands::Dump { workbook, format } => cli::dump(workbook, format)?,
    }

    Ok(())
}
