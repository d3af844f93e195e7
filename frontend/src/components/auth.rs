use gloo_storage::{LocalStorage, Storage};
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::{Model, Msg};

const TOKEN_KEY: &str = "auth_token";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture_url: Option<String>,
}

pub fn stored_token() -> Option<String> {
    LocalStorage::get(TOKEN_KEY).ok()
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

pub fn render_user_controls(user: &UserInfo, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="user-controls">
            <div class="user-details">
                <span class="user-name">{ &user.name }</span>
                <span class="user-email">{ &user.email }</span>
            </div>
            <button
                class="logout-button"
                title="Logout"
                onclick={link.callback(|_| Msg::LogOut)}
            >
                <i class="fa-solid fa-sign-out-alt"></i>
                {" Logout"}
            </button>
        </div>
    }
}
