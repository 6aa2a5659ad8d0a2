use clap::{Parser, Subcommand};
use poster_room::controls::ControlEvent;
use poster_room::generate::{self, DEFAULT_MOUNT_ID, GenerateOptions};
use poster_room::types::{SetDimension, TextDimension};
use poster_room::{config, output};
use std::path::PathBuf;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "poster-room")]
#[command(about = "Filterable gallery page for conference posters")]
#[command(long_about = "\
Filterable gallery page for conference posters

The configuration lists the posters and the filter bar layout. Several
configuration files can be given; later files override earlier ones key by
key, and all of them override the stock defaults.

Minimal configuration (JSON or TOML, chosen by extension):

  {
    \"poster_show\": true,
    \"lang\": \"en\",
    \"posters\": [
      {\"number\": \"7\", \"title\": \"Graphs\", \"authors\": {\"Ada\": 1},
       \"categories\": {\"stat\": 1}, \"display\": true}
    ]
  }

A closed room (poster_show = false) renders only the closed message, unless
the page query carries poster_bypass.

Filter events given to 'render' are applied in this order: --master-off,
--uncheck, --select, --search.

Run 'poster-room gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args, Clone)]
struct ConfigArgs {
    /// Configuration file, may be repeated (later files win)
    #[arg(long = "config", short = 'c', required = true)]
    configs: Vec<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the poster room page
    Render {
        #[command(flatten)]
        config: ConfigArgs,

        /// Output HTML file
        #[arg(long, default_value = "dist/index.html")]
        output: PathBuf,

        /// Id of the mount container
        #[arg(long, default_value = DEFAULT_MOUNT_ID)]
        mount: String,

        /// Page query string, e.g. "?poster_bypass"
        #[arg(long, default_value = "")]
        query: String,

        /// Override the configured language
        #[arg(long)]
        lang: Option<String>,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Stylesheet href linked from the page head
        #[arg(long)]
        stylesheet: Option<String>,

        /// Clear the master checkbox of a dimension
        #[arg(long, value_name = "DIM")]
        master_off: Vec<SetDimension>,

        /// Uncheck one value of a checkbox dimension
        #[arg(long, value_name = "DIM=VALUE", value_parser = parse_assignment::<SetDimension>)]
        uncheck: Vec<(SetDimension, String)>,

        /// Select one value of a dropdown dimension (empty value selects "-")
        #[arg(long, value_name = "DIM=VALUE", value_parser = parse_assignment::<SetDimension>)]
        select: Vec<(SetDimension, String)>,

        /// Type a query into a text filter
        #[arg(long, value_name = "DIM=TEXT", value_parser = parse_assignment::<TextDimension>)]
        search: Vec<(TextDimension, String)>,
    },
    /// Validate configuration and list posters and filter values
    Check {
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

/// Parse `dim=value`, splitting on the first `=`.
fn parse_assignment<D>(s: &str) -> Result<(D, String), String>
where
    D: FromStr<Err = String>,
{
    let (dimension, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected DIM=VALUE, got '{s}'"))?;
    Ok((dimension.parse()?, value.to_string()))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            config: args,
            output,
            mount,
            query,
            lang,
            title,
            stylesheet,
            master_off,
            uncheck,
            select,
            search,
        } => {
            let events = master_off
                .into_iter()
                .map(|dimension| ControlEvent::MasterCheckbox {
                    dimension,
                    checked: false,
                })
                .chain(
                    uncheck
                        .into_iter()
                        .map(|(dimension, value)| ControlEvent::Checkbox {
                            dimension,
                            value,
                            checked: false,
                        }),
                )
                .chain(
                    select
                        .into_iter()
                        .map(|(dimension, value)| ControlEvent::Dropdown {
                            dimension,
                            value: (!value.is_empty()).then_some(value),
                        }),
                )
                .chain(
                    search
                        .into_iter()
                        .map(|(dimension, query)| ControlEvent::Text { dimension, query }),
                )
                .collect();
            let options = GenerateOptions {
                config_paths: args.configs,
                output,
                mount_id: mount,
                query,
                lang,
                title,
                stylesheet,
                events,
            };
            let report = generate::generate(&options)?;
            output::print_generate_output(&report);
        }
        Command::Check { config: args } => {
            let room_config = config::load_config(&args.configs)?;
            output::print_check_output(&room_config);
            println!("==> Configuration is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
