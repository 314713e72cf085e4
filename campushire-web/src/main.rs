mod api;
mod app;
mod components;
mod containers;
mod format;
mod guard;
mod models;
mod nav;
mod pages;
mod routes;
mod session;

#[cfg(test)]
mod guard_test;

use app::App;
use yew::{function_component, html, Html, Renderer};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Surface panic payloads in the browser console.
    std::panic::set_hook(Box::new(|info| {
        if let Some(s) = info.payload().downcast_ref::<String>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else if let Some(s) = info.payload().downcast_ref::<&str>() {
            web_sys::console::log_1(&format!("Panic: {}", s).into());
        } else {
            web_sys::console::log_1(&"Unknown panic".into());
        }
        if let Some(location) = info.location() {
            web_sys::console::log_1(
                &format!(
                    "  at {}:{}:{}",
                    location.file(),
                    location.line(),
                    location.column()
                )
                .into(),
            );
        }
    }));

    web_sys::console::log_1(&"Starting CampusHire".into());

    Renderer::<Root>::with_root(
        web_sys::window()
            .expect("window")
            .document()
            .expect("document")
            .get_elements_by_tag_name("body")
            .item(0)
            .expect("body element"),
    )
    .render();
}
