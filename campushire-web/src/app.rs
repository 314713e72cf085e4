use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::components::ToastHost;
use crate::models::app_state::AppState;
use crate::routes::{self, MainRoute};
use crate::session::SessionStore;

#[function_component(App)]
pub fn app() -> Html {
    let (_state, dispatch) = use_store::<AppState>();

    // Auth state is read fresh from storage on every page load; the store is
    // only a reactive mirror for the navigation.
    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            dispatch.set(AppState {
                session: SessionStore::new().get(),
            });
            || ()
        });
    }

    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={routes::switch} />
            <ToastHost />
        </BrowserRouter>
    }
}
