use yew::prelude::*;

use super::utils::debounce;
use crate::{Model, Msg};

/// Marketing page shown to unauthenticated sessions.
pub fn render_landing(ctx: &Context<Model>) -> Html {
    html! {
        <div class="landing">
            <main class="landing-main">
                { render_header(ctx) }
                { render_heroes() }
            </main>
            { render_footer() }
        </div>
    }
}

fn render_header(ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();

    html! {
        <div class="landing-header">
            <h1><span class="underline">{"Not-Notion ."}</span></h1>
            <h3>
                {"This is absolutely "}<span class="italic">{"not"}</span>{" Notion"}
                <br />
                {"But it's trying"}
            </h3>
            <button
                class="cta-button"
                onclick={debounce(300, move || link.send_message(Msg::LogIn))}
            >
                {"Use Not-Notion "}
                <i class="fa-solid fa-arrow-right"></i>
            </button>
        </div>
    }
}

fn render_heroes() -> Html {
    html! {
        <div class="landing-heroes">
            <div class="hero-image">
                <img src="/chill.png" class="hero-light" alt="painting" />
                <img src="/chill-dark.png" class="hero-dark" alt="painting" />
            </div>
            <div class="hero-image hero-image-wide">
                <img src="/painting.png" class="hero-light" alt="painting" />
                <img src="/painting-dark.png" class="hero-dark" alt="painting" />
            </div>
        </div>
    }
}

fn render_footer() -> Html {
    html! {
        <footer class="landing-footer">
            <span class="logo">{"Not-Notion"}</span>
            <div class="footer-links">
                <button class="footer-link">{"Privacy Policy"}</button>
                <button class="footer-link">{"Terms & Conditions"}</button>
            </div>
        </footer>
    }
}
