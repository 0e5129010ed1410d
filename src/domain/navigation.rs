use serde::Serialize;

use crate::domain::role::Role;

// Screens the presentation layer knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    RoleSelection,
    Login { role: Role },
    Home { role: Role },
    ProductDetails { product_id: u64 },
    Checkout,
    SellProduct,
}

// Result of resolving a path against the route table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Route {
    Screen(Screen),
    Redirect { path: String },
    NotFound,
}

// Resolve a path the way the client router does: unknown sub-paths under a
// role prefix fall back to that role's login screen.
pub fn resolve(path: &str) -> Route {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return Route::Screen(Screen::RoleSelection);
    }

    let mut segments = trimmed.trim_start_matches('/').split('/');
    let role = match segments.next().map(str::parse::<Role>) {
        Some(Ok(role)) => role,
        _ => return Route::NotFound,
    };
    let rest: Vec<&str> = segments.collect();

    let screen = match (role, rest.as_slice()) {
        (_, ["login"]) => Some(Screen::Login { role }),
        (_, ["home"]) => Some(Screen::Home { role }),
        (Role::Buyer, ["product", id]) => id
            .parse::<u64>()
            .ok()
            .map(|product_id| Screen::ProductDetails { product_id }),
        (Role::Buyer, ["checkout"]) => Some(Screen::Checkout),
        (Role::Seller, ["sell"]) => Some(Screen::SellProduct),
        _ => None,
    };

    match screen {
        Some(screen) => Route::Screen(screen),
        None => Route::Redirect {
            path: role.login_path(),
        },
    }
}
