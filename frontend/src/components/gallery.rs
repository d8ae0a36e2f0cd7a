//! Public gallery: images in their curated order with title/caption
//! overlays.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::gallery::GalleryImage;

use crate::components::helpers::show_toast;

pub enum Msg {
    Loaded(Vec<GalleryImage>),
    LoadFailed,
}

#[derive(Default)]
pub struct GalleryPage {
    images: Vec<GalleryImage>,
    loading: bool,
}

impl Component for GalleryPage {
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
            let link = ctx.link().clone();
            spawn_local(async move {
                match Request::get("/api/carousel").send().await {
                    Ok(resp) if resp.ok() => match resp.json::<Vec<GalleryImage>>().await {
                        Ok(images) => link.send_message(Msg::Loaded(images)),
                        Err(_) => link.send_message(Msg::LoadFailed),
                    },
                    _ => link.send_message(Msg::LoadFailed),
                }
            });
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(images) => {
                self.images = images;
                self.loading = false;
                true
            }
            Msg::LoadFailed => {
                self.loading = false;
                show_toast("Failed to load the gallery.");
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <p class="loading">{"Loading gallery…"}</p> };
        }
        html! {
            <div class="gallery-page">
                <h1>{"Gallery"}</h1>
                <div class="gallery-grid">
                    {
                        for self.images.iter().map(|img| html! {
                            <figure class="gallery-item" key={img.id.clone()}>
                                <img src={img.image.clone()} alt={img.title.clone()} />
                                {
                                    if img.title.is_empty() && img.caption.is_empty() {
                                        html! {}
                                    } else {
                                        html! {
                                            <figcaption>
                                                <strong>{ &img.title }</strong>
                                                <span>{ &img.caption }</span>
                                            </figcaption>
                                        }
                                    }
                                }
                            </figure>
                        })
                    }
                </div>
            </div>
        }
    }
}
