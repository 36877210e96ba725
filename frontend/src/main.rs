use crate::app::App;

mod app;
mod components;
mod remote;

fn main() {
    yew::Renderer::<App>::new().render();
}
