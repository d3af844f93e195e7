mod api;
mod components;

use gloo_file::File as GlooFile;
use gloo_timers::callback::Interval;
use shared::single_image::UploadProgress;
use yew::prelude::*;

use components::auth::{self, UserInfo};
use components::landing::render_landing;
use components::spinner::render_spinner;
use components::workspace::render_workspace;

pub enum Msg {
    // Session
    SessionLoaded(Option<UserInfo>),
    LogIn,
    LogOut,

    // Document
    TitleEdited(String),
    CoverChanged(Option<GlooFile>),
    ProgressTick,
    CoverUploaded(Result<String, String>),

    // UI states
    ToggleTheme,
    SetError(Option<String>),
}

pub struct Model {
    session: Option<UserInfo>,
    session_loading: bool,
    theme: String,
    document_title: String,
    last_edited: Option<String>,
    cover_url: Option<String>,
    cover_progress: UploadProgress,
    progress_ticker: Option<Interval>,
    error: Option<String>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            session: None,
            session_loading: false,
            theme: "light".to_string(),
            document_title: "Untitled".to_string(),
            last_edited: None,
            cover_url: None,
            cover_progress: UploadProgress::default(),
            progress_ticker: None,
            error: None,
        };

        if let Some(token) = auth::stored_token() {
            model.session_loading = true;
            api::load_session(ctx.link().clone(), token);
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Session
            Msg::SessionLoaded(session) => {
                if session.is_none() {
                    auth::clear_token();
                }
                self.session = session;
                self.session_loading = false;
                true
            }
            Msg::LogIn => {
                let window = web_sys::window().expect("no global `window` exists");
                let _ = window.location().set_href("/auth/login");
                false
            }
            Msg::LogOut => {
                auth::clear_token();
                let window = web_sys::window().expect("no global `window` exists");
                let _ = window.location().reload();
                false
            }

            // Document
            Msg::TitleEdited(title) => {
                self.document_title = title;
                self.last_edited = Some(components::utils::now_time_string());
                true
            }
            Msg::CoverChanged(Some(file)) => self.handle_cover_selected(ctx, file),
            Msg::CoverChanged(None) => {
                self.cover_url = None;
                self.cover_progress = UploadProgress::default();
                self.progress_ticker = None;
                true
            }
            Msg::ProgressTick => self.handle_progress_tick(),
            Msg::CoverUploaded(result) => self.handle_cover_uploaded(result),

            // UI states
            Msg::ToggleTheme => self.handle_toggle_theme(),
            Msg::SetError(error) => {
                self.error = error;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let page = if self.session_loading {
            html! { <div class="page-loading">{ render_spinner("large") }</div> }
        } else {
            match &self.session {
                Some(user) => render_workspace(self, user, ctx),
                None => render_landing(ctx),
            }
        };

        html! {
            <div class="container">
                <div class="top-right">{ self.render_theme_toggle(ctx) }</div>
                { page }
            </div>
        }
    }
}

impl Model {
    fn handle_cover_selected(&mut self, ctx: &Context<Self>, file: GlooFile) -> bool {
        log::info!("uploading cover {}", file.name());
        self.error = None;
        self.cover_progress = UploadProgress {
            percent: 0,
            in_transit: true,
        };

        // gloo-net exposes no upload progress events; tick the indicator
        // while the request is in flight and let the response finish it.
        let link = ctx.link().clone();
        self.progress_ticker = Some(Interval::new(200, move || {
            link.send_message(Msg::ProgressTick);
        }));

        api::upload_cover(ctx.link().clone(), file);
        true
    }

    fn handle_progress_tick(&mut self) -> bool {
        if self.cover_progress.in_transit && self.cover_progress.percent < 90 {
            self.cover_progress.percent += 5;
            true
        } else {
            false
        }
    }

    fn handle_cover_uploaded(&mut self, result: Result<String, String>) -> bool {
        self.progress_ticker = None;

        match result {
            Ok(url) => {
                log::info!("cover stored at {}", url);
                self.cover_progress = UploadProgress {
                    percent: 100,
                    in_transit: false,
                };
                self.cover_url = Some(url);
                self.last_edited = Some(components::utils::now_time_string());
            }
            Err(message) => {
                self.cover_progress = UploadProgress::default();
                self.error = Some(message);
            }
        }
        true
    }

    fn handle_toggle_theme(&mut self) -> bool {
        let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

        if self.theme == "light" {
            self.theme = "dark".to_string();
            body.class_list().add_1("dark-mode").unwrap();
        } else {
            self.theme = "light".to_string();
            body.class_list().remove_1("dark-mode").unwrap();
        }

        true
    }

    fn render_theme_toggle(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <button
                id="theme-toggle"
                class="theme-toggle"
                onclick={link.callback(|_| Msg::ToggleTheme)}
                title={ if self.theme == "light" { "Switch to Dark Mode" } else { "Switch to Light Mode" } }
            >
                { if self.theme == "light" {
                    html! { <i class="fa-solid fa-sun"></i> }
                } else {
                    html! { <i class="fa-solid fa-moon"></i> }
                }}
            </button>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
