use yew::prelude::*;

/// Busy indicator. `size` is one of "small", "medium", "large".
pub fn render_spinner(size: &str) -> Html {
    html! {
        <div class={classes!("spinner", format!("spinner-{}", size))}>
            <i class="fa-solid fa-spinner fa-spin"></i>
        </div>
    }
}

/// Full-surface overlay shown while the host has hard-locked a widget.
pub fn render_spinner_overlay() -> Html {
    html! {
        <div class="spinner-overlay">
            { render_spinner("large") }
        </div>
    }
}
