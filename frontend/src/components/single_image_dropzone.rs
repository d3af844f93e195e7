use gloo_file::{File as GlooFile, ObjectUrl};
use shared::dropzone::{
    check_files, classify_drag, DragItem, DragStatus, DropOutcome, DropzoneConfig, FileMeta,
};
use shared::format::format_file_size;
use shared::single_image::{DropResult, InteractionState, SingleImage, UploadProgress};
use web_sys::{DataTransfer, DragEvent, Event, FileList, HtmlInputElement, MouseEvent};
use yew::prelude::*;

use super::progress_circle::render_progress_circle;
use super::spinner::render_spinner_overlay;

/// View of a dropped file for the shared validator.
struct DroppedFile(GlooFile);

impl FileMeta for DroppedFile {
    fn name(&self) -> String {
        self.0.name()
    }
    fn size(&self) -> u64 {
        self.0.size()
    }
    fn mime(&self) -> String {
        self.0.raw_mime_type()
    }
}

#[derive(Properties, Clone)]
pub struct SingleImageDropzoneProps {
    /// Render hints only, in pixels.
    #[prop_or_default]
    pub width: Option<u32>,
    #[prop_or_default]
    pub height: Option<u32>,
    /// Caller-driven hard lock: the drop target goes inert and a busy
    /// overlay covers the widget.
    #[prop_or_default]
    pub disabled: bool,
    /// Pre-populated selection, read once at mount.
    #[prop_or_default]
    pub initial_file: Option<GlooFile>,
    /// Accept filter and size limit. Multiplicity and the disabled flag are
    /// owned by the widget and not configurable here.
    #[prop_or_default]
    pub config: DropzoneConfig,
    /// Transfer state driven by the caller; the widget only renders it.
    #[prop_or_default]
    pub progress: UploadProgress,
    /// Fired with `Some(file)` on acceptance and `None` on removal.
    pub on_change: Callback<Option<GlooFile>>,
}

// Files are compared by identity-ish metadata; `gloo_file::File` itself has
// no equality.
impl PartialEq for SingleImageDropzoneProps {
    fn eq(&self, other: &Self) -> bool {
        fn same_file(a: &Option<GlooFile>, b: &Option<GlooFile>) -> bool {
            match (a, b) {
                (None, None) => true,
                (Some(a), Some(b)) => {
                    a.name() == b.name()
                        && a.size() == b.size()
                        && a.raw_mime_type() == b.raw_mime_type()
                }
                _ => false,
            }
        }

        self.width == other.width
            && self.height == other.height
            && self.disabled == other.disabled
            && self.config == other.config
            && self.progress == other.progress
            && self.on_change == other.on_change
            && same_file(&self.initial_file, &other.initial_file)
    }
}

pub enum DropzoneMsg {
    Dropped(DragEvent),
    DragOver(DragEvent),
    DragLeave(DragEvent),
    InputChanged(Event),
    SetFocus(bool),
    Browse(MouseEvent),
    Remove(MouseEvent),
}

/// Single-image drop target: click-to-browse or drag-and-drop exactly one
/// image, preview it, render caller-driven upload progress, surface
/// validation errors inline, allow removal.
///
/// All transition logic lives in [`shared::single_image::SingleImage`]; this
/// component wires browser events into it and renders the result. The
/// preview handle is an [`ObjectUrl`], revoked when it is replaced, removed,
/// or the component unmounts.
pub struct SingleImageDropzone {
    state: SingleImage<GlooFile, ObjectUrl>,
    drag: DragStatus,
    focused: bool,
    input_ref: NodeRef,
}

impl Component for SingleImageDropzone {
    type Message = DropzoneMsg;
    type Properties = SingleImageDropzoneProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut state =
            SingleImage::new(props.initial_file.clone(), |f: &GlooFile| {
                ObjectUrl::from(f.clone())
            });
        state.set_disabled(props.disabled);
        state.sync_progress(props.progress);

        Self {
            state,
            drag: DragStatus::None,
            focused: false,
            input_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.state.set_disabled(ctx.props().disabled);
        self.state.sync_progress(ctx.props().progress);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            DropzoneMsg::Dropped(event) => {
                event.prevent_default();
                self.drag = DragStatus::None;

                if self.state.is_locked() {
                    return true;
                }

                let files = event
                    .data_transfer()
                    .and_then(|dt| dt.files())
                    .map(file_list_to_vec)
                    .unwrap_or_default();
                self.process_files(ctx, files);
                true
            }
            DropzoneMsg::DragOver(event) => {
                event.prevent_default();
                let next = if self.state.is_locked() {
                    DragStatus::None
                } else {
                    let items = event
                        .data_transfer()
                        .map(|dt| collect_drag_items(&dt))
                        .unwrap_or_default();
                    classify_drag(&ctx.props().config, &items)
                };
                let changed = next != self.drag;
                self.drag = next;
                changed
            }
            DropzoneMsg::DragLeave(event) => {
                event.prevent_default();
                let changed = self.drag != DragStatus::None;
                self.drag = DragStatus::None;
                changed
            }
            DropzoneMsg::InputChanged(event) => {
                let input: HtmlInputElement = event.target_unchecked_into();
                let files = input.files().map(file_list_to_vec).unwrap_or_default();

                // Reset so picking the same file again re-fires the event.
                input.set_value("");

                if self.state.is_locked() {
                    return false;
                }
                self.process_files(ctx, files);
                true
            }
            DropzoneMsg::SetFocus(focused) => {
                let changed = self.focused != focused;
                self.focused = focused;
                changed
            }
            DropzoneMsg::Browse(_) => {
                if !self.state.is_locked() {
                    if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
                        input.click();
                    }
                }
                false
            }
            DropzoneMsg::Remove(event) => {
                event.stop_propagation();
                if self.state.remove() {
                    ctx.props().on_change.emit(None);
                    true
                } else {
                    false
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let link = ctx.link();

        let interaction = self.state.interaction(self.drag, self.focused);
        let has_preview = self.state.preview().is_some();

        let zone_class = classes!(
            "dropzone",
            has_preview.then_some("dropzone-image"),
            match interaction {
                InteractionState::Focused => Some("dropzone-active"),
                InteractionState::DragAccept => Some("dropzone-accept"),
                InteractionState::DragReject => Some("dropzone-reject"),
                InteractionState::Disabled => Some("dropzone-disabled"),
                InteractionState::Idle => None,
            }
        );

        let mut zone_style = String::new();
        if let Some(width) = props.width {
            zone_style.push_str(&format!("width: {}px;", width));
        }
        if let Some(height) = props.height {
            zone_style.push_str(&format!("height: {}px;", height));
        }

        html! {
            <div class="single-image-dropzone">
                { if props.disabled { render_spinner_overlay() } else { html! {} } }
                <div
                    class={zone_class}
                    style={zone_style}
                    ondragover={link.callback(DropzoneMsg::DragOver)}
                    ondragleave={link.callback(DropzoneMsg::DragLeave)}
                    ondrop={link.callback(DropzoneMsg::Dropped)}
                    onclick={link.callback(DropzoneMsg::Browse)}
                >
                    <input
                        ref={self.input_ref.clone()}
                        type="file"
                        accept={accept_attribute(&props.config)}
                        style="display: none;"
                        onchange={link.callback(DropzoneMsg::InputChanged)}
                        onfocus={link.callback(|_| DropzoneMsg::SetFocus(true))}
                        onblur={link.callback(|_| DropzoneMsg::SetFocus(false))}
                    />
                    { self.render_content(ctx) }
                    { self.render_upload_overlay() }
                    { self.render_remove_button(ctx) }
                </div>
                { self.render_error() }
            </div>
        }
    }
}

impl SingleImageDropzone {
    /// Validate one batch of candidate files and apply the outcome,
    /// notifying the caller on acceptance. Rejections surface as the inline
    /// error, never to the caller.
    fn process_files(&mut self, ctx: &Context<Self>, files: Vec<GlooFile>) {
        let config = &ctx.props().config;

        let candidates: Vec<DroppedFile> = files.into_iter().map(DroppedFile).collect();
        let outcome = check_files(config, candidates);
        let outcome = DropOutcome {
            accepted: outcome.accepted.into_iter().map(|f| f.0).collect(),
            rejected: outcome.rejected,
        };

        let result = self.state.accept_drop(outcome, config.max_size, |f: &GlooFile| {
            ObjectUrl::from(f.clone())
        });

        match result {
            DropResult::Accepted(file) => {
                log::info!("accepted file: {} ({} bytes)", file.name(), file.size());
                ctx.props().on_change.emit(Some(file));
            }
            DropResult::Rejected => {
                if let Some(error) = self.state.error() {
                    log::warn!("drop rejected: {}", error);
                }
            }
            DropResult::Ignored => {}
        }
    }

    fn render_content(&self, ctx: &Context<Self>) -> Html {
        if let Some(url) = self.state.preview() {
            let alt = self
                .state
                .file()
                .map(|f| f.name())
                .unwrap_or_else(|| "uploaded image".to_string());
            return html! {
                <img class="dropzone-preview" src={url.to_string()} alt={alt} />
            };
        }

        let config = &ctx.props().config;
        html! {
            <div class="dropzone-placeholder">
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <p>{"drag & drop an image or click to select"}</p>
                {
                    if let Some(max) = config.max_size {
                        html! { <p class="dropzone-hint">{ format!("Max size: {}", format_file_size(max)) }</p> }
                    } else {
                        html! {}
                    }
                }
            </div>
        }
    }

    fn render_upload_overlay(&self) -> Html {
        let progress = self.state.progress();
        if self.state.preview().is_some() && progress.in_transit {
            html! {
                <div class="dropzone-upload-overlay">
                    { render_progress_circle(progress.percent) }
                </div>
            }
        } else {
            html! {}
        }
    }

    fn render_remove_button(&self, ctx: &Context<Self>) -> Html {
        // Visible during a transfer too; removal mid-upload is refused by
        // the state machine, and callers that want the control gone pass
        // `disabled`.
        if self.state.preview().is_none() || ctx.props().disabled {
            return html! {};
        }

        html! {
            <button
                type="button"
                class="dropzone-remove-btn"
                title="Remove image"
                onclick={ctx.link().callback(DropzoneMsg::Remove)}
            >
                <i class="fa-solid fa-trash"></i>
            </button>
        }
    }

    fn render_error(&self) -> Html {
        if let Some(error) = self.state.error() {
            html! {
                <div class="dropzone-error">
                    <i class="fa-solid fa-circle-exclamation"></i>
                    <p>{ error.to_string() }</p>
                </div>
            }
        } else {
            html! {}
        }
    }
}

fn accept_attribute(config: &DropzoneConfig) -> Option<AttrValue> {
    if config.accept.is_empty() {
        None
    } else {
        Some(AttrValue::from(config.accept.join(",")))
    }
}

fn file_list_to_vec(list: FileList) -> Vec<GlooFile> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(GlooFile::from)
        .collect()
}

fn collect_drag_items(transfer: &DataTransfer) -> Vec<DragItem> {
    let items = transfer.items();
    (0..items.length())
        .filter_map(|i| items.get(i))
        .map(|item| DragItem {
            kind: item.kind(),
            mime: item.type_(),
        })
        .collect()
}
