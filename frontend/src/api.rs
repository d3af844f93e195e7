use gloo_console::error;
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;

use crate::components::auth::UserInfo;
use crate::{Model, Msg};

#[derive(Debug, Clone, Deserialize)]
struct FileUploadResponse {
    url: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Validate a stored session token against the auth service. A stale or
/// invalid token resolves to `SessionLoaded(None)` so the gate falls back
/// to the landing page.
pub fn load_session(link: Scope<Model>, token: String) {
    spawn_local(async move {
        let response = Request::get("/auth/me")
            .header("Authorization", &format!("Bearer {}", token))
            .send()
            .await;

        match response {
            Ok(resp) if resp.ok() => match resp.json::<UserInfo>().await {
                Ok(user) => {
                    log::info!("session restored for {}", user.email);
                    link.send_message(Msg::SessionLoaded(Some(user)));
                }
                Err(e) => {
                    error!(format!("Failed to parse session response: {:?}", e));
                    link.send_message(Msg::SessionLoaded(None));
                }
            },
            Ok(resp) => {
                log::warn!("session check failed with status {}", resp.status());
                link.send_message(Msg::SessionLoaded(None));
            }
            Err(e) => {
                error!(format!("Session check network error: {:?}", e));
                link.send_message(Msg::SessionLoaded(None));
            }
        }
    });
}

/// Transfer an accepted cover image to file storage. The widget itself has
/// no network interface; this is the external collaborator that drives the
/// progress props back into it via the app model.
pub fn upload_cover(link: Scope<Model>, file: GlooFile) {
    spawn_local(async move {
        let form_data = web_sys::FormData::new().unwrap();
        form_data.append_with_blob("file", file.as_ref()).unwrap();

        let request = Request::post("/api/files")
            .body(form_data)
            .expect("Failed to build request.");

        match request.send().await {
            Ok(response) => {
                if response.ok() {
                    match response.json::<FileUploadResponse>().await {
                        Ok(body) => link.send_message(Msg::CoverUploaded(Ok(body.url))),
                        Err(e) => link.send_message(Msg::CoverUploaded(Err(format!(
                            "Failed to parse response: {}",
                            e
                        )))),
                    }
                } else {
                    let status = response.status();
                    let body = response.text().await.unwrap_or_default();
                    // Storage errors come back as {"error": "..."} when the
                    // service is healthy, raw text otherwise.
                    let message = serde_json::from_str::<ErrorBody>(&body)
                        .map(|b| b.error)
                        .unwrap_or(body);
                    link.send_message(Msg::CoverUploaded(Err(format!(
                        "Server error: {} - {}",
                        status, message
                    ))))
                }
            }
            Err(e) => {
                link.send_message(Msg::CoverUploaded(Err(format!("Network error: {}", e))))
            }
        }
    });
}
