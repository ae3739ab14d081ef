use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct DateFilterProps {
    pub start_date: String,
    pub end_date: String,
    pub on_start_change: Callback<String>,
    pub on_end_change: Callback<String>,
}

/// Start/end date inputs for filtering the period shown on a page.
#[function_component(DateFilter)]
pub fn date_filter(props: &DateFilterProps) -> Html {
    let start_cb = {
        let cb = props.on_start_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let end_cb = {
        let cb = props.on_end_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };

    html! {<div style="background:rgba(255,255,255,0.6); border:1px solid #e5e7eb; border-radius:8px; padding:10px; margin-bottom:18px; display:flex; align-items:center; gap:10px;">
        <span style="color:#9ca3af;">{"📅"}</span>
        <input type="date" value={props.start_date.clone()} onchange={start_cb} style="border:0; background:transparent; color:#4b5563;" />
        <span style="color:#9ca3af;">{"→"}</span>
        <input type="date" value={props.end_date.clone()} onchange={end_cb} style="border:0; background:transparent; color:#4b5563;" />
    </div>}
}
