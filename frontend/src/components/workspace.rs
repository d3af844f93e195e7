use shared::dropzone::DropzoneConfig;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::auth::{render_user_controls, UserInfo};
use super::single_image_dropzone::SingleImageDropzone;
use crate::{Model, Msg};

/// Cover images above this size are refused client-side.
const COVER_MAX_BYTES: u64 = 2 * 1024 * 1024;

/// Authenticated document page: title, cover image slot, error banner.
pub fn render_workspace(model: &Model, user: &UserInfo, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="workspace">
            <header class="workspace-topbar">
                <span class="logo">{"Not-Notion"}</span>
                { render_user_controls(user, ctx) }
            </header>
            <main class="document">
                { render_cover(model, ctx) }
                <input
                    class="document-title"
                    type="text"
                    placeholder="Untitled"
                    value={model.document_title.clone()}
                    oninput={link.callback(|e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::TitleEdited(input.value())
                    })}
                />
                {
                    if let Some(time) = &model.last_edited {
                        html! { <p class="last-edited">{ format!("Last edited at {}", time) }</p> }
                    } else {
                        html! {}
                    }
                }
                { render_error_banner(model, ctx) }
            </main>
        </div>
    }
}

fn render_cover(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <section class="document-cover">
            <SingleImageDropzone
                width={600}
                height={200}
                config={DropzoneConfig::images(Some(COVER_MAX_BYTES))}
                progress={model.cover_progress}
                on_change={ctx.link().callback(Msg::CoverChanged)}
            />
            {
                if let Some(url) = &model.cover_url {
                    html! { <p class="cover-saved">{ format!("Cover saved: {}", url) }</p> }
                } else {
                    html! {}
                }
            }
        </section>
    }
}

fn render_error_banner(model: &Model, ctx: &Context<Model>) -> Html {
    if let Some(error_msg) = &model.error {
        html! {
            <div class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ error_msg }</p>
                <button
                    class="dismiss-btn"
                    title="Dismiss"
                    onclick={ctx.link().callback(|_| Msg::SetError(None))}
                >
                    <i class="fa-solid fa-times"></i>
                </button>
            </div>
        }
    } else {
        html! {}
    }
}
