use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::models::app_state::AppState;
use crate::session;

#[derive(Properties, PartialEq)]
pub struct UserMenuProps {
    pub name: String,
}

/// Dropdown shown in place of the auth buttons for an authenticated visitor.
#[function_component(UserMenu)]
pub fn user_menu(props: &UserMenuProps) -> Html {
    let (_state, dispatch) = use_store::<AppState>();

    let on_logout = Callback::from(move |event: MouseEvent| {
        event.prevent_default();
        dispatch.set(AppState::default());
        session::logout();
    });

    html! {
        <div class="dropdown dropdown-end" id="navUser">
            <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                <i class="fa-solid fa-user text-lg"></i>
                <span id="userName" class="text-sm">{ props.name.clone() }</span>
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-48">
                <li><a onclick={on_logout}>{"Logout"}</a></li>
            </ul>
        </div>
    }
}
