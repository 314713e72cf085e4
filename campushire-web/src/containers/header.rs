use web_sys::Event;
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::components::UserMenu;
use crate::models::app_state::AppState;
use crate::nav::{self, NavView};
use crate::routes::MainRoute;

/// Scroll offset past which the navbar picks up the `scrolled` class.
const SCROLL_THRESHOLD: f64 = 50.0;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let view: NavView = nav::nav_view((*session).as_ref());

    let scrolled = use_state(|| false);
    let menu_open = use_state(|| false);

    // Class toggles at native scroll-event frequency; no throttling.
    {
        let scrolled = scrolled.clone();
        use_event_with_window("scroll", move |_: Event| {
            let offset = web_sys::window()
                .and_then(|window| window.scroll_y().ok())
                .unwrap_or(0.0);
            scrolled.set(offset > SCROLL_THRESHOLD);
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let jobs_active = matches!(
        props.current_route,
        Some(MainRoute::Jobs | MainRoute::RecruiterJobs)
    );
    let jobs_class = if jobs_active { "btn btn-ghost btn-soft" } else { "btn btn-ghost" };

    html! {
        <nav class={classes!("navbar", "bg-base-300", "sticky", "top-0", "z-40", (*scrolled).then_some("scrolled"))}>
            <div class="flex-1">
                <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                    {"CampusHire"}
                </Link<MainRoute>>
            </div>

            <div class="sm:hidden">
                <button class="btn btn-ghost" onclick={toggle_menu} aria-label="Toggle menu">
                    <i class="fa-solid fa-bars text-lg"></i>
                </button>
            </div>

            <ul
                id="navMenu"
                class={classes!("menu", "sm:menu-horizontal", "gap-1", (*menu_open).then_some("active"))}
            >
                <li>
                    // Role-dependent destination; set from the fixed table, not the router.
                    <a id="jobsLink" class={jobs_class} href={view.jobs_href}>
                        {"Jobs"}
                    </a>
                </li>
                {
                    if view.authenticated {
                        html! {
                            <li>
                                <a id="dashboardLink" class="btn btn-ghost" href={view.jobs_href}>
                                    {"Dashboard"}
                                </a>
                            </li>
                        }
                    } else {
                        html! {}
                    }
                }
            </ul>

            <div class="flex items-center gap-2">
                {
                    match view.user_name {
                        Some(name) => html! { <UserMenu {name} /> },
                        None => html! {
                            <div id="navAuth" class="flex gap-2">
                                <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                                    {"Login"}
                                </Link<MainRoute>>
                            </div>
                        },
                    }
                }
            </div>
        </nav>
    }
}
