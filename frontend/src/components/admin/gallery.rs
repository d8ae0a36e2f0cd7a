//! Gallery management: upload, caption/title editing, reordering, deletion.
//!
//! Reordering sends the full id list to `/api/carousel/reorder`; the backend
//! answers with the renormalized list, which replaces local state directly.

use std::collections::HashMap;

use gloo_net::http::Request;
use web_sys::FormData;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::gallery::GalleryImage;

use crate::components::helpers::{input_value, selected_file, show_toast};

pub enum Msg {
    Loaded(Vec<GalleryImage>),
    LoadFailed,
    EditTitle(String, String),
    EditCaption(String, String),
    SaveMeta(String),
    MetaSaved(Option<GalleryImage>),
    Move(String, bool),
    Delete(String),
    Deleted(bool),
    SetUploadFile(Option<web_sys::File>),
    SetUploadTitle(String),
    SetUploadCaption(String),
    Upload,
    Uploaded(bool),
}

#[derive(Default)]
pub struct GalleryManager {
    images: Vec<GalleryImage>,
    loading: bool,
    /// Unsaved caption/title edits keyed by image id.
    edits: HashMap<String, (String, String)>,
    upload_title: String,
    upload_caption: String,
    upload_file: Option<web_sys::File>,
    busy: bool,
}

impl Component for GalleryManager {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            load(ctx);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(images) => {
                self.edits = images
                    .iter()
                    .map(|img| (img.id.clone(), (img.title.clone(), img.caption.clone())))
                    .collect();
                self.images = images;
                self.loading = false;
                self.busy = false;
                true
            }
            Msg::LoadFailed => {
                self.loading = false;
                self.busy = false;
                show_toast("Failed to load the gallery.");
                true
            }
            Msg::EditTitle(id, value) => {
                if let Some(edit) = self.edits.get_mut(&id) {
                    edit.0 = value;
                }
                false
            }
            Msg::EditCaption(id, value) => {
                if let Some(edit) = self.edits.get_mut(&id) {
                    edit.1 = value;
                }
                false
            }
            Msg::SaveMeta(id) => {
                let Some((title, caption)) = self.edits.get(&id).cloned() else {
                    return false;
                };
                let link = ctx.link().clone();
                let payload = serde_json::json!({ "title": title, "caption": caption });
                spawn_local(async move {
                    let url = format!("/api/carousel/{id}");
                    let saved = match Request::put(&url).json(&payload) {
                        Ok(req) => match req.send().await {
                            Ok(resp) if resp.ok() => resp.json::<GalleryImage>().await.ok(),
                            _ => None,
                        },
                        Err(_) => None,
                    };
                    link.send_message(Msg::MetaSaved(saved));
                });
                false
            }
            Msg::MetaSaved(saved) => {
                match saved {
                    Some(updated) => {
                        if let Some(img) = self.images.iter_mut().find(|i| i.id == updated.id) {
                            *img = updated;
                        }
                        show_toast("Caption saved.");
                    }
                    None => show_toast("Failed to save caption."),
                }
                true
            }
            Msg::Move(id, up) => {
                let Some(pos) = self.images.iter().position(|i| i.id == id) else {
                    return false;
                };
                let target = if up { pos.checked_sub(1) } else { Some(pos + 1) };
                let Some(target) = target.filter(|t| *t < self.images.len()) else {
                    return false;
                };
                let mut ids: Vec<String> = self.images.iter().map(|i| i.id.clone()).collect();
                ids.swap(pos, target);

                self.busy = true;
                let link = ctx.link().clone();
                let payload = serde_json::json!({ "ids": ids });
                spawn_local(async move {
                    let result = match Request::post("/api/carousel/reorder").json(&payload) {
                        Ok(req) => match req.send().await {
                            Ok(resp) if resp.ok() => resp.json::<Vec<GalleryImage>>().await.ok(),
                            _ => None,
                        },
                        Err(_) => None,
                    };
                    match result {
                        Some(images) => link.send_message(Msg::Loaded(images)),
                        None => link.send_message(Msg::LoadFailed),
                    }
                });
                true
            }
            Msg::Delete(id) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let url = format!("/api/carousel/{id}");
                    let ok = matches!(
                        Request::delete(&url).send().await,
                        Ok(resp) if resp.ok()
                    );
                    link.send_message(Msg::Deleted(ok));
                });
                false
            }
            Msg::Deleted(ok) => {
                if ok {
                    load(ctx);
                } else {
                    show_toast("Failed to delete the image.");
                }
                false
            }
            Msg::SetUploadFile(file) => {
                self.upload_file = file;
                false
            }
            Msg::SetUploadTitle(value) => {
                self.upload_title = value;
                false
            }
            Msg::SetUploadCaption(value) => {
                self.upload_caption = value;
                false
            }
            Msg::Upload => {
                let Some(file) = self.upload_file.clone() else {
                    show_toast("Pick an image first.");
                    return false;
                };
                let Ok(form) = FormData::new() else {
                    return false;
                };
                form.append_with_str("title", &self.upload_title).ok();
                form.append_with_str("caption", &self.upload_caption).ok();
                form.append_with_blob_and_filename("image", &file, &file.name())
                    .ok();

                self.busy = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let ok = match Request::post("/api/carousel").body(form) {
                        Ok(req) => matches!(req.send().await, Ok(resp) if resp.ok()),
                        Err(_) => false,
                    };
                    link.send_message(Msg::Uploaded(ok));
                });
                true
            }
            Msg::Uploaded(ok) => {
                if ok {
                    show_toast("Image uploaded.");
                    self.upload_title.clear();
                    self.upload_caption.clear();
                    self.upload_file = None;
                    load(ctx);
                } else {
                    self.busy = false;
                    show_toast("Upload failed — jpeg, png and webp only.");
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.loading {
            return html! { <p class="loading">{"Loading gallery…"}</p> };
        }
        html! {
            <div class="gallery-admin">
                <div class="gallery-upload">
                    <input
                        placeholder="Title"
                        value={self.upload_title.clone()}
                        onchange={link.callback(|e: Event| Msg::SetUploadTitle(input_value(&e)))}
                    />
                    <input
                        placeholder="Caption"
                        value={self.upload_caption.clone()}
                        onchange={link.callback(|e: Event| Msg::SetUploadCaption(input_value(&e)))}
                    />
                    <input
                        type="file"
                        accept=".jpg,.jpeg,.png,.webp"
                        onchange={link.callback(|e: Event| Msg::SetUploadFile(selected_file(&e)))}
                    />
                    <button disabled={self.busy} onclick={link.callback(|_| Msg::Upload)}>
                        {"Upload"}
                    </button>
                </div>

                <ul class="gallery-rows">
                    { for self.images.iter().map(|img| self.row(ctx, img)) }
                </ul>
            </div>
        }
    }
}

impl GalleryManager {
    fn row(&self, ctx: &Context<Self>, img: &GalleryImage) -> Html {
        let link = ctx.link();
        let (title, caption) = self
            .edits
            .get(&img.id)
            .cloned()
            .unwrap_or_else(|| (img.title.clone(), img.caption.clone()));

        let id_title = img.id.clone();
        let id_caption = img.id.clone();
        let id_save = img.id.clone();
        let id_up = img.id.clone();
        let id_down = img.id.clone();
        let id_delete = img.id.clone();

        html! {
            <li class="gallery-row" key={img.id.clone()}>
                <img src={img.image.clone()} alt={img.title.clone()} />
                <span class="order-badge">{ img.order }</span>
                <input
                    placeholder="Title"
                    value={title}
                    onchange={link.callback(move |e: Event| {
                        Msg::EditTitle(id_title.clone(), input_value(&e))
                    })}
                />
                <input
                    placeholder="Caption"
                    value={caption}
                    onchange={link.callback(move |e: Event| {
                        Msg::EditCaption(id_caption.clone(), input_value(&e))
                    })}
                />
                <button onclick={link.callback(move |_| Msg::SaveMeta(id_save.clone()))}>
                    {"Save"}
                </button>
                <button
                    disabled={self.busy}
                    onclick={link.callback(move |_| Msg::Move(id_up.clone(), true))}
                >
                    {"↑"}
                </button>
                <button
                    disabled={self.busy}
                    onclick={link.callback(move |_| Msg::Move(id_down.clone(), false))}
                >
                    {"↓"}
                </button>
                <button class="danger" onclick={link.callback(move |_| Msg::Delete(id_delete.clone()))}>
                    {"Delete"}
                </button>
            </li>
        }
    }
}

fn load(ctx: &Context<GalleryManager>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match Request::get("/api/carousel").send().await {
            Ok(resp) if resp.ok() => match resp.json::<Vec<GalleryImage>>().await {
                Ok(images) => link.send_message(Msg::Loaded(images)),
                Err(err) => {
                    gloo_console::error!(format!("failed to decode gallery listing: {err}"));
                    link.send_message(Msg::LoadFailed);
                }
            },
            _ => link.send_message(Msg::LoadFailed),
        }
    });
}
