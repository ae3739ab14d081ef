use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmationModalProps {
    pub show: bool,
    pub title: String,
    pub message: String,
    pub on_confirm: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(ConfirmationModal)]
pub fn confirmation_modal(props: &ConfirmationModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let confirm_cb = {
        let cb = props.on_confirm.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {<div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:60;">
        <div style="background:#fff; border-radius:12px; padding:20px; min-width:300px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <h3 style="margin:0; font-size:18px;">{ &props.title }</h3>
            <p style="margin:0; color:#555; line-height:1.4;">{ &props.message }</p>
            <div style="display:flex; gap:8px; justify-content:flex-end;">
                <button onclick={close_cb} style="padding:6px 14px;">{"Cancel"}</button>
                <button onclick={confirm_cb} style="padding:6px 14px; background:#ef4444; border:1px solid #b62324; color:#fff;">{"Delete"}</button>
            </div>
        </div>
    </div>}
}
