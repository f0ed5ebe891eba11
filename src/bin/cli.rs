//! TourDesk CLI
//!
//! Command-line interface for managing the tour catalogue.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::{Args as ClapArgs, Parser, Subcommand};
use tourdesk::form::FormController;
use tourdesk::{App, Config, Result};
use tracing_subscriber::{fmt, EnvFilter};

/// TourDesk CLI
#[derive(Parser, Debug)]
#[command(name = "tourdesk")]
#[command(about = "Manage a searchable, paginated list of tours")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./tourdesk_data")]
    data_dir: String,

    /// Rows shown per page
    #[arg(short, long, default_value = "5")]
    rows_per_page: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show one page of tours
    List {
        /// Only show tours containing this text in any field
        #[arg(short, long, default_value = "")]
        search: String,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },

    /// Add a new tour
    Add {
        /// Tour ID (generated when omitted)
        #[arg(long)]
        id: Option<String>,

        #[command(flatten)]
        fields: RequiredFields,
    },

    /// Edit an existing tour
    Edit {
        /// The tour to edit
        tour_id: String,

        #[command(flatten)]
        fields: OptionalFields,
    },

    /// Delete a tour
    Delete {
        /// The tour to delete
        tour_id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Print the ID the next added tour would get
    NextId,
}

#[derive(ClapArgs, Debug)]
struct RequiredFields {
    #[arg(long)]
    name: String,
    #[arg(long)]
    destination: String,
    #[arg(long)]
    start_date: String,
    #[arg(long)]
    end_date: String,
    #[arg(long)]
    price: String,
    #[arg(long)]
    guide: String,
}

#[derive(ClapArgs, Debug)]
struct OptionalFields {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    destination: Option<String>,
    #[arg(long)]
    start_date: Option<String>,
    #[arg(long)]
    end_date: Option<String>,
    #[arg(long)]
    price: Option<String>,
    #[arg(long)]
    guide: Option<String>,
}

impl RequiredFields {
    fn fill(self, form: &mut FormController) {
        form.set_name(self.name);
        form.set_destination(self.destination);
        form.set_start_date(self.start_date);
        form.set_end_date(self.end_date);
        form.set_price(self.price);
        form.set_tour_guide(self.guide);
    }
}

impl OptionalFields {
    fn fill(self, form: &mut FormController) {
        if let Some(v) = self.name {
            form.set_name(v);
        }
        if let Some(v) = self.destination {
            form.set_destination(v);
        }
        if let Some(v) = self.start_date {
            form.set_start_date(v);
        }
        if let Some(v) = self.end_date {
            form.set_end_date(v);
        }
        if let Some(v) = self.price {
            form.set_price(v);
        }
        if let Some(v) = self.guide {
            form.set_tour_guide(v);
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,tourdesk=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    tracing::debug!("TourDesk v{}", tourdesk::VERSION);
    tracing::debug!("Data directory: {}", args.data_dir);

    // Build config from args
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .rows_per_page(args.rows_per_page)
        .build();

    match run(config, args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: Config, command: Commands) -> Result<()> {
    let mut app = App::open(config)?;

    match command {
        Commands::List { search, page } => {
            app.search(search);
            println!("{}", app.go_to_page(page));
        }
        Commands::Add { id, fields } => {
            let form = app.open_add()?;
            if let Some(id) = id {
                form.set_tour_id(id)?;
            }
            fields.fill(form);
            app.submit()?;
            print_toast(&app);
        }
        Commands::Edit { tour_id, fields } => {
            let form = app.open_edit(&tour_id)?;
            fields.fill(form);
            app.submit()?;
            print_toast(&app);
        }
        Commands::Delete { tour_id, yes } => {
            let removed = if yes {
                app.delete(&tour_id, &mut |_: &str| true)?
            } else {
                app.delete(&tour_id, &mut prompt_yes_no)?
            };
            match removed {
                Some(_) => print_toast(&app),
                None => println!("Delete cancelled"),
            }
        }
        Commands::NextId => {
            let form = app.open_add()?;
            println!("{}", form.fields().tour_id);
            app.cancel();
        }
    }

    Ok(())
}

fn print_toast<S: tourdesk::storage::KeyValueStorage>(app: &App<S>) {
    if let Some(toast) = app.notifier().visible() {
        println!("{}", toast.message);
    }
}

/// Ask on stdin; anything but y/yes declines
fn prompt_yes_no(prompt: &str) -> bool {
    print!("{prompt} [y/N] ");
    if io::stdout().flush().is_err() {
        return false;
    }

    let mut answer = String::new();
    if io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
