mod fixtures;
mod web_app;

pub use fixtures::{filter_orders, format_mxn, parse_orders, FixtureError, Order, OrderStatus};
pub use web_app::{SellerDashboard, SiteApp};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
