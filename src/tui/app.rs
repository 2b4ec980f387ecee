//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::cart::{CartLine, SelectionLedger, cart_lines};
use crate::catalog::DataProvider;
use crate::config::AppConfig;
use crate::models::{ItemId, OrderStatus, PaymentMethod, VendorId};
use crate::notify::NotificationSink;

use super::input::TextInput;

/// How long a toast stays on screen.
const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Central application state container.
pub struct App {
    /// Mock data source for vendors, menus, and order history.
    pub catalog: Box<dyn DataProvider>,
    /// Runtime settings.
    pub config: AppConfig,

    // -- Navigation --
    /// The screen currently shown.
    pub screen: Screen,
    /// Current input mode.
    pub mode: Mode,

    // -- Cart State --
    /// The vendor whose menu populated the ledger.
    pub cart_vendor: Option<VendorId>,
    /// Selected quantities for the current browsing session.
    pub ledger: SelectionLedger,

    // -- Per-Screen UI State --
    pub home: HomeState,
    pub vendor: VendorState,
    pub cart: CartState,
    pub orders: OrdersState,
    pub account: AccountState,

    // -- UI Chrome --
    /// Confirmation message to display (clears after timeout).
    pub toast: Option<Toast>,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates a new App over the given data provider.
    pub fn new(config: AppConfig, catalog: impl DataProvider + 'static) -> Self {
        Self {
            catalog: Box::new(catalog),
            config,
            screen: Screen::Home,
            mode: Mode::Normal,
            cart_vendor: None,
            ledger: SelectionLedger::new(),
            home: HomeState::default(),
            vendor: VendorState::default(),
            cart: CartState::default(),
            orders: OrdersState::default(),
            account: AccountState::default(),
            toast: None,
            should_quit: false,
        }
    }

    /// Switches to the given screen and resets the input mode.
    pub fn go_to(&mut self, screen: Screen) {
        self.mode = Mode::Normal;
        self.screen = screen;
    }

    /// Opens a vendor's menu screen.
    ///
    /// The cart holds items from a single vendor; browsing a different
    /// vendor starts a fresh selection session.
    pub fn open_vendor(&mut self, id: VendorId) {
        if self.cart_vendor != Some(id) {
            self.ledger.clear();
            self.cart_vendor = Some(id);
        }
        self.vendor = VendorState::default();
        self.go_to(Screen::Vendor(id));
    }

    /// Adds one unit of a menu item to the cart.
    ///
    /// Identifiers unknown to the vendor's catalog are ignored.
    pub fn add_item(&mut self, item: ItemId) {
        let Some(vendor) = self.cart_vendor else {
            return;
        };
        if self.catalog.item(vendor, item).is_none() {
            return;
        }
        self.ledger.increment(item);
        tracing::debug!(item, total = self.ledger.total_selected(), "added to cart");
        self.notify("Added to cart", "Item has been added to your cart");
    }

    /// Removes one unit of a menu item from the cart.
    pub fn remove_item(&mut self, item: ItemId) {
        self.ledger.decrement(item);
        tracing::debug!(item, total = self.ledger.total_selected(), "removed from cart");
    }

    /// Cart lines derived from the ledger and the catalog.
    pub fn cart_lines(&self) -> Vec<CartLine> {
        match self.cart_vendor {
            Some(vendor) => cart_lines(self.catalog.as_ref(), vendor, &self.ledger),
            None => Vec::new(),
        }
    }

    /// Simulates checkout: confirmation toast, then the session is cleared.
    pub fn place_order(&mut self) {
        if self.ledger.is_empty() {
            self.notify("Your cart is empty", "Browse vendors to add items first");
            return;
        }
        let method = self.cart.payment;
        tracing::info!(
            method = method.label(),
            items = self.ledger.total_selected(),
            "placing simulated order"
        );
        let body = format!(
            "Your order has been placed with {}.",
            method.confirmation_phrase()
        );
        self.notify("Order placed successfully!", &body);
        self.ledger.clear();
        self.cart_vendor = None;
    }

    /// Simulates confirming pickup of the selected historical order.
    pub fn confirm_pickup(&mut self) {
        let ready = self
            .catalog
            .orders()
            .get(self.orders.selected)
            .is_some_and(|o| o.status == OrderStatus::Ready);
        if ready {
            self.notify("Pickup confirmed", "Enjoy your meal!");
        }
    }

    /// Simulates submitting the login or signup form.
    pub fn submit_account_form(&mut self) {
        match self.account.tab {
            AccountTab::Login => {
                tracing::info!("simulated login");
                self.notify("Login successful", "Welcome back to Campus Eats!");
            }
            AccountTab::Signup => {
                tracing::info!("simulated signup");
                self.notify(
                    "Account created",
                    "Your account has been created successfully!",
                );
            }
        }
    }

    /// Clears a toast older than its display duration.
    pub fn clear_stale_toast(&mut self) {
        if let Some(ref toast) = self.toast
            && toast.shown_at.elapsed() > TOAST_DURATION
        {
            self.toast = None;
        }
    }
}

impl NotificationSink for App {
    fn notify(&mut self, title: &str, body: &str) {
        self.toast = Some(Toast {
            title: title.to_string(),
            body: body.to_string(),
            shown_at: Instant::now(),
        });
    }
}

/// Screens in the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Vendor listing.
    Home,
    /// A vendor's menu with cart-quantity controls.
    Vendor(VendorId),
    /// Cart and checkout.
    Cart,
    /// Order history.
    Orders,
    /// Login / signup.
    Account,
}

/// Input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    /// Typing into the focused text field.
    Insert,
}

/// Transient confirmation message with a timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct Toast {
    pub title: String,
    pub body: String,
    pub shown_at: Instant,
}

/// UI state for the home screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct HomeState {
    /// Index of the highlighted vendor card.
    pub selected: usize,
}

/// UI state for a vendor menu screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct VendorState {
    /// Index of the active category tab.
    pub active_category: usize,
    /// Index of the highlighted item within the category.
    pub selected_item: usize,
}

/// Editable fields on the cart screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartField {
    Name,
    Phone,
    Location,
    Notes,
    CardNumber,
    Expiry,
    Cvv,
}

impl CartField {
    /// Returns the form label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            CartField::Name => "Full Name",
            CartField::Phone => "Phone Number",
            CartField::Location => "Pickup Location",
            CartField::Notes => "Special Instructions",
            CartField::CardNumber => "Card Number",
            CartField::Expiry => "Expiry Date",
            CartField::Cvv => "CVV",
        }
    }
}

/// Delivery fields always shown on the cart screen.
const DELIVERY_FIELDS: &[CartField] = &[
    CartField::Name,
    CartField::Phone,
    CartField::Location,
    CartField::Notes,
];

/// Card fields shown only for online payment.
const CARD_FIELDS: &[CartField] = &[
    CartField::Name,
    CartField::Phone,
    CartField::Location,
    CartField::Notes,
    CartField::CardNumber,
    CartField::Expiry,
    CartField::Cvv,
];

/// UI state for the cart/checkout screen.
#[derive(Clone, Debug)]
pub struct CartState {
    /// Selected payment method; controls whether card fields show.
    pub payment: PaymentMethod,
    /// Index of the focused field within [`CartState::fields`].
    pub focus: usize,
    pub name: TextInput,
    pub phone: TextInput,
    pub location: TextInput,
    pub notes: TextInput,
    pub card_number: TextInput,
    pub expiry: TextInput,
    pub cvv: TextInput,
}

impl Default for CartState {
    fn default() -> Self {
        Self {
            payment: PaymentMethod::default(),
            focus: 0,
            name: TextInput::new(),
            phone: TextInput::new(),
            location: TextInput::new(),
            notes: TextInput::new(),
            card_number: TextInput::new(),
            expiry: TextInput::new(),
            cvv: TextInput::masked(),
        }
    }
}

impl CartState {
    /// Fields visible under the current payment method.
    pub fn fields(&self) -> &'static [CartField] {
        match self.payment {
            PaymentMethod::Prepaid => CARD_FIELDS,
            PaymentMethod::PayOnDelivery => DELIVERY_FIELDS,
        }
    }

    /// The field currently holding focus.
    pub fn focused_field(&self) -> CartField {
        self.fields()[self.focus.min(self.fields().len() - 1)]
    }

    /// Mutable access to a field's input state.
    pub fn field_input(&mut self, field: CartField) -> &mut TextInput {
        match field {
            CartField::Name => &mut self.name,
            CartField::Phone => &mut self.phone,
            CartField::Location => &mut self.location,
            CartField::Notes => &mut self.notes,
            CartField::CardNumber => &mut self.card_number,
            CartField::Expiry => &mut self.expiry,
            CartField::Cvv => &mut self.cvv,
        }
    }

    /// Read access to a field's input state.
    pub fn field(&self, field: CartField) -> &TextInput {
        match field {
            CartField::Name => &self.name,
            CartField::Phone => &self.phone,
            CartField::Location => &self.location,
            CartField::Notes => &self.notes,
            CartField::CardNumber => &self.card_number,
            CartField::Expiry => &self.expiry,
            CartField::Cvv => &self.cvv,
        }
    }

    /// Flips the payment method and keeps the focus in range.
    pub fn toggle_payment(&mut self) {
        self.payment.toggle();
        self.focus = self.focus.min(self.fields().len() - 1);
    }
}

/// UI state for the order-history screen.
#[derive(Clone, Copy, Debug, Default)]
pub struct OrdersState {
    /// Index of the highlighted order.
    pub selected: usize,
}

/// Login / signup tab selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccountTab {
    #[default]
    Login,
    Signup,
}

impl AccountTab {
    /// Returns the display title for the tab.
    pub fn title(&self) -> &'static str {
        match self {
            AccountTab::Login => "Login",
            AccountTab::Signup => "Sign Up",
        }
    }

    /// Switches to the other tab.
    pub fn toggle(&mut self) {
        *self = match self {
            AccountTab::Login => AccountTab::Signup,
            AccountTab::Signup => AccountTab::Login,
        };
    }
}

/// Editable fields on the account screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountField {
    Name,
    StudentId,
    Email,
    Password,
}

impl AccountField {
    /// Returns the form label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            AccountField::Name => "Full Name",
            AccountField::StudentId => "Student ID",
            AccountField::Email => "Email",
            AccountField::Password => "Password",
        }
    }
}

const LOGIN_FIELDS: &[AccountField] = &[AccountField::Email, AccountField::Password];

const SIGNUP_FIELDS: &[AccountField] = &[
    AccountField::Name,
    AccountField::StudentId,
    AccountField::Email,
    AccountField::Password,
];

/// UI state for the account screen.
#[derive(Clone, Debug)]
pub struct AccountState {
    /// Active form tab.
    pub tab: AccountTab,
    /// Index of the focused field within [`AccountState::fields`].
    pub focus: usize,
    pub name: TextInput,
    pub student_id: TextInput,
    pub email: TextInput,
    pub password: TextInput,
}

impl Default for AccountState {
    fn default() -> Self {
        Self {
            tab: AccountTab::default(),
            focus: 0,
            name: TextInput::new(),
            student_id: TextInput::new(),
            email: TextInput::new(),
            password: TextInput::masked(),
        }
    }
}

impl AccountState {
    /// Fields visible under the active tab.
    pub fn fields(&self) -> &'static [AccountField] {
        match self.tab {
            AccountTab::Login => LOGIN_FIELDS,
            AccountTab::Signup => SIGNUP_FIELDS,
        }
    }

    /// The field currently holding focus.
    pub fn focused_field(&self) -> AccountField {
        self.fields()[self.focus.min(self.fields().len() - 1)]
    }

    /// Mutable access to a field's input state.
    pub fn field_input(&mut self, field: AccountField) -> &mut TextInput {
        match field {
            AccountField::Name => &mut self.name,
            AccountField::StudentId => &mut self.student_id,
            AccountField::Email => &mut self.email,
            AccountField::Password => &mut self.password,
        }
    }

    /// Read access to a field's input state.
    pub fn field(&self, field: AccountField) -> &TextInput {
        match field {
            AccountField::Name => &self.name,
            AccountField::StudentId => &self.student_id,
            AccountField::Email => &self.email,
            AccountField::Password => &self.password,
        }
    }

    /// Flips the form tab and keeps the focus in range.
    pub fn toggle_tab(&mut self) {
        self.tab.toggle();
        self.focus = self.focus.min(self.fields().len() - 1);
    }
}
