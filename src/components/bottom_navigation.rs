use super::app::View;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BottomNavigationProps {
    pub active: View,
    pub on_navigate: Callback<View>,
}

#[function_component(BottomNavigation)]
pub fn bottom_navigation(props: &BottomNavigationProps) -> Html {
    let items = [
        (View::Dashboard, "📊", "Dashboard"),
        (View::Transactions, "➕", "Transactions"),
        (View::Accounts, "💳", "Accounts"),
        (View::Categories, "🏷", "Categories"),
        (View::Goals, "🎯", "Goals"),
        (View::Settings, "⚙", "Settings"),
    ];

    html! {<nav style="position:fixed; bottom:0; left:0; right:0; background:#fff; border-top:1px solid #e5e7eb; z-index:50;">
        <div style="max-width:960px; margin:0 auto; display:flex; justify-content:space-between; padding:0 12px;">
            { for items.iter().map(|(view, icon, label)| {
                let active = props.active == *view;
                let onclick = {
                    let cb = props.on_navigate.clone();
                    let view = view.clone();
                    Callback::from(move |_| cb.emit(view.clone()))
                };
                let color = if active { "#22c55e" } else { "#6b7280" };
                html! {<button {onclick} style={format!("display:flex; flex-direction:column; align-items:center; padding:10px 8px; border:0; background:none; cursor:pointer; color:{color};")}>
                    <span style="font-size:20px;">{ icon }</span>
                    <span style="font-size:11px; margin-top:2px;">{ label }</span>
                </button>}
            }) }
        </div>
    </nav>}
}
