pub mod accounts_view;
pub mod app;
pub mod bottom_navigation;
pub mod categories_view;
pub mod confirmation_modal;
pub mod dashboard_card;
pub mod dashboard_view;
pub mod date_filter;
pub mod floating_action_button;
pub mod goals_view;
pub mod settings_view;
pub mod transaction_modal;
pub mod transactions_list;
pub mod transactions_view;

pub use app::App;
