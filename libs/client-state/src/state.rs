//! Application state: route, session, and cart

use serde::{Deserialize, Serialize};

/// Client-side routes, storefront and back office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    ProductDetail,
    Checkout,
    Account,
    AdminDashboard,
    AdminProducts,
    AdminOrders,
    AdminSettings,
}

/// One cart entry; quantities merge per product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product_id: i32,
    pub quantity: u32,
}

/// User record mirrored from a login/registration response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    pub role: String,
}

impl StoredUser {
    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}

/// Authenticated session persisted across reloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub user: StoredUser,
    pub token: String,
}

/// The whole client application state, passed explicitly to the UI shell
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub route: Route,
    pub selected_product: Option<i32>,
    pub session: Option<StoredSession>,
    pub cart: Vec<CartItem>,
    pub loading: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigate to a route
    pub fn navigate(&mut self, route: Route) {
        self.route = route;
    }

    /// Open a product detail page
    pub fn select_product(&mut self, product_id: i32) {
        self.selected_product = Some(product_id);
        self.route = Route::ProductDetail;
    }

    /// Add a product to the cart, merging with an existing entry
    pub fn add_to_cart(&mut self, product_id: i32, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.cart.iter_mut().find(|i| i.product_id == product_id) {
            Some(item) => item.quantity += quantity,
            None => self.cart.push(CartItem {
                product_id,
                quantity,
            }),
        }
    }

    /// Set a cart entry's quantity; zero removes the entry
    pub fn set_quantity(&mut self, product_id: i32, quantity: u32) {
        if quantity == 0 {
            self.cart.retain(|i| i.product_id != product_id);
        } else if let Some(item) = self.cart.iter_mut().find(|i| i.product_id == product_id) {
            item.quantity = quantity;
        }
    }

    /// Total number of units across all cart entries
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|i| i.quantity).sum()
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Install a session after login or registration
    pub fn login(&mut self, session: StoredSession) {
        self.session = Some(session);
    }

    /// Drop the session and the cart, and return home
    pub fn logout(&mut self) {
        self.session = None;
        self.cart.clear();
        self.route = Route::Home;
    }
}
