use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::models::app_state::AppState;
use crate::nav;
use crate::routes::MainRoute;

/// Landing page component
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let session = use_selector(|state: &AppState| state.session.clone());
    let view = nav::nav_view((*session).as_ref());

    html! {
        <div class="p-4 space-y-6">
            <div class="hero bg-base-200 rounded-box py-16">
                <div class="hero-content text-center">
                    <div class="max-w-md space-y-4">
                        <h1 class="text-4xl font-bold">{"CampusHire"}</h1>
                        <p class="text-base-content/80">
                            {"Campus hiring, assessments, and placements in one place."}
                        </p>
                        {
                            if view.authenticated {
                                html! {
                                    <a class="btn btn-primary" href={view.jobs_href}>
                                        {"Browse jobs"}
                                    </a>
                                }
                            } else {
                                html! {
                                    <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary">
                                        {"Get started"}
                                    </Link<MainRoute>>
                                }
                            }
                        }
                    </div>
                </div>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"For candidates"}</h2>
                        <p>{"Discover active postings from companies hiring on your campus."}</p>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"For recruiters"}</h2>
                        <p>{"Publish roles and track applications across colleges."}</p>
                    </div>
                </div>
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">{"For campuses"}</h2>
                        <p>{"Coordinate drives and follow placement outcomes."}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
