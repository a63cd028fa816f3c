//! Command line front end for the dairy supply client
//!
//! Each subcommand drives one screen of [`App`]: it resolves the stored
//! session, navigates, fills the form, runs the action and prints the result.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use shared::{Role, SupplyKind, SupplyRecord};

use dairy_client::app::{AppState, FormStatus, Screen};
use dairy_client::debug::{self, LogConfig};
use dairy_client::{App, AppConfig, Result, RouteState};

#[derive(Parser)]
#[command(name = "dairy-client")]
#[command(about = "Dairy supply management client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show whether a session is stored
    Status,
    /// Log in and store the session token
    Login {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the current milk rates
    Rate,
    /// Update the milk rates
    SetRate {
        #[arg(long)]
        rate: String,
        /// Left unchanged when omitted
        #[arg(long)]
        special_rate: Option<String>,
    },
    /// Register a seller
    Register {
        #[arg(long = "seller")]
        seller_id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        admin: bool,
    },
    /// List sellers
    Users,
    /// Supply list and totals
    Dashboard,
    /// Record a supply entry
    Supply {
        #[arg(long)]
        seller: String,
        #[arg(long)]
        quantity: String,
        #[arg(long)]
        fat: String,
        /// Bill at the special rate
        #[arg(long)]
        special: bool,
    },
    /// Statement for a seller and date range (YYYY-MM-DD)
    Billing {
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Mark every entry of a seller in a date range as completed
    Complete {
        #[command(flatten)]
        range: RangeArgs,
    },
    /// Delete one supply entry
    Delete {
        #[arg(long)]
        id: String,
    },
}

#[derive(Args)]
struct RangeArgs {
    #[arg(long)]
    seller: String,
    #[arg(long)]
    from: String,
    #[arg(long)]
    to: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let _log_guard = debug::init_logger(&LogConfig::from_env());

    match run(cli.command).await {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Commands) -> Result<ExitCode> {
    let mut app = App::from_config(&AppConfig::from_env())?;
    app.start();
    app.settle().await;

    match command {
        Commands::Status => {
            match app.route() {
                RouteState::Authenticated => println!("Logged in"),
                _ => println!("Not logged in"),
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Login { phone, password } => {
            if app.route() == RouteState::Authenticated {
                println!("Already logged in. Run `dairy-client logout` first to switch accounts.");
                return Ok(ExitCode::SUCCESS);
            }
            app.handle_login_click(phone, password);
            app.settle().await;
            Ok(report(&app, |state| &state.login.status))
        }
        Commands::Logout => {
            app.handle_logout();
            app.settle().await;
            println!("Logged out");
            Ok(report(&app, |state| &state.login.status))
        }
        Commands::Rate => {
            if !enter(&mut app, Screen::Forms).await {
                return Ok(ExitCode::FAILURE);
            }
            let state = app.state.read();
            match (&state.rate.current, &state.rate.error) {
                (Some(rate), _) => {
                    println!("Rate:         {}", rate.snapshot.rate);
                    println!("Special rate: {}", rate.snapshot.special_rate);
                    Ok(ExitCode::SUCCESS)
                }
                (None, Some(error)) => {
                    eprintln!("{}", error);
                    Ok(ExitCode::FAILURE)
                }
                (None, None) => Ok(ExitCode::FAILURE),
            }
        }
        Commands::SetRate { rate, special_rate } => {
            if !enter(&mut app, Screen::Forms).await {
                return Ok(ExitCode::FAILURE);
            }
            {
                let mut state = app.state.write();
                state.rate.rate_input = rate;
                if let Some(special) = special_rate {
                    state.rate.special_rate_input = special;
                }
            }
            app.handle_rate_update();
            app.settle().await;
            Ok(report(&app, |state| &state.rate.status))
        }
        Commands::Register {
            seller_id,
            name,
            phone,
            password,
            admin,
        } => {
            if !enter(&mut app, Screen::Forms).await {
                return Ok(ExitCode::FAILURE);
            }
            {
                let mut state = app.state.write();
                state.register.seller_id = seller_id;
                state.register.name = name;
                state.register.password = password;
                state.register.role = if admin { Role::Admin } else { Role::Seller };
            }
            app.set_register_phone(&phone);
            app.handle_register_click();
            app.settle().await;
            Ok(report(&app, |state| &state.register.status))
        }
        Commands::Users => {
            if !enter(&mut app, Screen::Users).await {
                return Ok(ExitCode::FAILURE);
            }
            let state = app.state.read();
            if let Some(error) = &state.users.error {
                eprintln!("{}", error);
                return Ok(ExitCode::FAILURE);
            }
            for seller in &state.users.sellers {
                println!(
                    "{:>6}  {:<24} {:>12}  {}",
                    seller.seller_numeric_id,
                    seller.name,
                    seller.phone,
                    seller.role.label()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Dashboard => {
            if !enter(&mut app, Screen::Dashboard).await {
                return Ok(ExitCode::FAILURE);
            }
            let state = app.state.read();
            if let Some(error) = &state.dashboard.error {
                eprintln!("{}", error);
                return Ok(ExitCode::FAILURE);
            }
            if let Some(page) = &state.dashboard.page {
                print_records(&page.supplies);
                println!("Page {} of {}", page.current_page, page.total_pages);
            }
            let summary = &state.dashboard.summary;
            println!("Total milk:   {}", summary.total_milk);
            println!("Total amount: {}", summary.total_amount);
            println!("Average fat:  {}", summary.avg_fat_display());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Supply {
            seller,
            quantity,
            fat,
            special,
        } => {
            if !enter(&mut app, Screen::Sale).await {
                return Ok(ExitCode::FAILURE);
            }
            let kind = if special { SupplyKind::Special } else { SupplyKind::Normal };
            app.handle_supply_kind_change(kind);
            {
                let mut state = app.state.write();
                state.sale.seller_id = seller;
                state.sale.quantity = quantity;
                state.sale.fat = fat;
            }
            app.handle_sale_submit();
            app.settle().await;

            let amount = app.state.read().sale.recent.as_ref().and_then(|recent| recent.amount);
            if let Some(amount) = amount {
                println!("Amount: {}", amount);
            }
            Ok(report(&app, |state| &state.sale.status))
        }
        Commands::Billing { range } => {
            if !search(&mut app, range).await {
                return Ok(ExitCode::FAILURE);
            }
            print_statement(&app);
            Ok(report(&app, |state| &state.billing.status))
        }
        Commands::Complete { range } => {
            if !search(&mut app, range).await {
                return Ok(ExitCode::FAILURE);
            }
            app.handle_mark_completed();
            app.settle().await;
            print_statement(&app);
            Ok(report(&app, |state| &state.billing.status))
        }
        Commands::Delete { id } => {
            if !enter(&mut app, Screen::Billing).await {
                return Ok(ExitCode::FAILURE);
            }
            app.handle_delete_supply(id);
            app.settle().await;
            Ok(report(&app, |state| &state.billing.status))
        }
    }
}

/// Open Billing with the range filled in and run the search
async fn search(app: &mut App, range: RangeArgs) -> bool {
    if !enter(app, Screen::Billing).await {
        return false;
    }
    {
        let mut state = app.state.write();
        state.billing.seller_id = range.seller;
        state.billing.from = range.from;
        state.billing.to = range.to;
    }
    app.handle_billing_search();
    app.settle().await;
    true
}

fn print_statement(app: &App) {
    let state = app.state.read();
    if let Some(results) = &state.billing.results {
        print_records(&results.supplies);
        println!("Total amount: {}", results.total_amount);
    }
}

/// Navigate and wait for the screen's loads; false when the session is missing
async fn enter(app: &mut App, screen: Screen) -> bool {
    app.navigate(screen);
    app.settle().await;
    if app.current_screen() != screen {
        eprintln!("Not logged in. Run `dairy-client login` first.");
        return false;
    }
    true
}

/// Print a form's status line and map it to an exit code
fn report(app: &App, form: impl FnOnce(&AppState) -> &FormStatus) -> ExitCode {
    let state = app.state.read();
    match form(&*state) {
        FormStatus::Failed(message) => {
            eprintln!("{}", message);
            ExitCode::FAILURE
        }
        other => {
            if let Some(message) = other.message() {
                println!("{}", message);
            }
            ExitCode::SUCCESS
        }
    }
}

fn print_records(records: &[SupplyRecord]) {
    for record in records {
        println!(
            "{:<26} {:>6} {:>8} {:>5} {:>8} {:>10}  {:?}",
            record.id,
            record.seller_numeric_id,
            record.quantity,
            record.fat_percent,
            record.rate,
            record.amount,
            record.status
        );
    }
}
