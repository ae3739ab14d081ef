use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct FloatingActionButtonProps {
    pub on_click: Callback<()>,
}

#[function_component(FloatingActionButton)]
pub fn floating_action_button(props: &FloatingActionButtonProps) -> Html {
    let onclick = {
        let cb = props.on_click.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<button {onclick} style="position:fixed; bottom:76px; right:24px; width:56px; height:56px; border-radius:50%; background:#22c55e; color:#fff; font-size:28px; border:0; box-shadow:0 4px 10px rgba(0,0,0,0.25); cursor:pointer; z-index:50;">
        {"+"}
    </button>}
}
