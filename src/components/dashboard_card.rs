use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardCardProps {
    pub title: String,
    pub value: String,
    /// Small glyph shown in the colored badge.
    pub icon: String,
    pub color: String,
}

#[function_component(DashboardCard)]
pub fn dashboard_card(props: &DashboardCardProps) -> Html {
    html! {<div style="background:#fff; border-radius:8px; padding:16px; box-shadow:0 1px 3px rgba(0,0,0,0.15); display:flex; justify-content:space-between; align-items:center;">
        <div>
            <p style="margin:0; color:#6b7280; font-size:13px;">{ &props.title }</p>
            <p style="margin:4px 0 0; font-size:22px; font-weight:700;">{ &props.value }</p>
        </div>
        <div style={format!("padding:10px; border-radius:50%; color:#fff; background:{};", props.color)}>
            { &props.icon }
        </div>
    </div>}
}
