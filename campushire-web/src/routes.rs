use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::containers::layout::Layout;
use crate::pages::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The page routes. Guarded pages apply the route guard themselves; the
/// switch only picks the page.
#[derive(Debug, Clone, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/jobs")]
    Jobs,
    #[at("/recruiter/jobs")]
    RecruiterJobs,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function for the page routes.
pub fn switch(route: MainRoute) -> Html {
    log(format!("Switching to route: {route:?}").as_str());
    match route {
        MainRoute::Home => html! {
            <Layout current_route={MainRoute::Home}>
                <HomePage />
            </Layout>
        },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::Jobs => html! {
            <Layout current_route={MainRoute::Jobs}>
                <JobsPage />
            </Layout>
        },
        MainRoute::RecruiterJobs => html! {
            <Layout current_route={MainRoute::RecruiterJobs}>
                <RecruiterJobsPage />
            </Layout>
        },
        MainRoute::NotFound => html! {
            <Layout current_route={MainRoute::NotFound}>
                <ErrorPage />
            </Layout>
        },
    }
}
