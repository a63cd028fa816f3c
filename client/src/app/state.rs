//! # Application State Types
//!
//! All state-related types for the application: screens, the root router and the
//! per-screen form and result state.

use shared::{
    NewSupply, Rate, RateSnapshot, Role, Seller, SupplyKind, SupplyPage, SupplyRange,
    SupplyRangeResponse, SupplySummary,
};

use super::router::Router;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Phone + password login
    Login,
    /// Supply totals for the current page
    Dashboard,
    /// Per-seller date-range statement
    Billing,
    /// New supply entry
    Sale,
    /// Seller registration and rate editing
    Forms,
    /// Seller list
    Users,
}

impl Screen {
    /// Tabs of the authenticated shell, in display order
    pub fn tabs() -> &'static [Screen] {
        &[
            Screen::Dashboard,
            Screen::Billing,
            Screen::Sale,
            Screen::Forms,
            Screen::Users,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Dashboard => "Dashboard",
            Screen::Billing => "Billing",
            Screen::Sale => "Sale",
            Screen::Forms => "Forms",
            Screen::Users => "Users",
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Screen::Login)
    }
}

/// Outcome line shown under a form
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Pending(String),
    Failed(String),
    Succeeded(String),
}

impl FormStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, FormStatus::Pending(_))
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Pending(m) | FormStatus::Failed(m) | FormStatus::Succeeded(m) => Some(m),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginState {
    pub phone: String,
    pub password: String,
    pub status: FormStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterState {
    pub seller_id: String,
    pub name: String,
    pub phone: String,
    pub role: Role,
    pub password: String,
    pub status: FormStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateState {
    /// Last fetched rate document
    pub current: Option<Rate>,
    pub rate_input: String,
    pub special_rate_input: String,
    pub loading: bool,
    /// Fetch failure, shown instead of the form
    pub error: Option<String>,
    pub status: FormStatus,
}

/// A supply entry the server accepted during this visit
#[derive(Debug, Clone, PartialEq)]
pub struct RecentSupply {
    pub entry: NewSupply,
    pub kind: SupplyKind,
    /// `None` when no rate snapshot was loaded at submit time
    pub amount: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleState {
    pub seller_id: String,
    pub quantity: String,
    pub fat: String,
    pub kind: SupplyKind,
    pub rates: Option<RateSnapshot>,
    pub loading_sellers: bool,
    pub recent: Option<RecentSupply>,
    pub status: FormStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillingState {
    pub seller_id: String,
    pub from: String,
    pub to: String,
    /// Range of the last search, reused by refetches after completion or deletion
    pub last_range: Option<SupplyRange>,
    pub results: Option<SupplyRangeResponse>,
    pub loading: bool,
    pub status: FormStatus,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub page: Option<SupplyPage>,
    pub summary: SupplySummary,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsersState {
    pub sellers: Vec<Seller>,
    pub loading: bool,
    pub error: Option<String>,
}

/// One visit of one screen; bumps every time navigation happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    pub screen: Screen,
    pub id: u64,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_screen: Screen,
    pub visit_id: u64,
    pub router: Router,
    pub login: LoginState,
    pub register: RegisterState,
    pub rate: RateState,
    pub sale: SaleState,
    pub billing: BillingState,
    pub dashboard: DashboardState,
    pub users: UsersState,
}

impl AppState {
    pub fn new(auth_failure_threshold: u32) -> Self {
        Self {
            current_screen: Screen::Login,
            visit_id: 0,
            router: Router::new(auth_failure_threshold),
            login: LoginState::default(),
            register: RegisterState::default(),
            rate: RateState::default(),
            sale: SaleState::default(),
            billing: BillingState::default(),
            dashboard: DashboardState::default(),
            users: UsersState::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.router.is_authenticated()
    }

    pub fn visit(&self) -> Visit {
        Visit {
            screen: self.current_screen,
            id: self.visit_id,
        }
    }

    /// Drop everything a previous session saw, keeping the login status line
    pub fn reset_screens(&mut self) {
        self.register = RegisterState::default();
        self.rate = RateState::default();
        self.sale = SaleState::default();
        self.billing = BillingState::default();
        self.dashboard = DashboardState::default();
        self.users = UsersState::default();
    }
}
