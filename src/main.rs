mod components;
mod model;
mod state;
mod store;
mod util;

use components::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
