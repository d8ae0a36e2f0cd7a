//! Alumni directory.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::alumni::Alumni;

use crate::components::helpers::show_toast;

pub enum Msg {
    Loaded(Vec<Alumni>),
    LoadFailed,
}

#[derive(Default)]
pub struct AlumniPage {
    alumni: Vec<Alumni>,
    loading: bool,
}

impl Component for AlumniPage {
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
                match Request::get("/api/alumni").send().await {
                    Ok(resp) if resp.ok() => match resp.json::<Vec<Alumni>>().await {
                        Ok(alumni) => link.send_message(Msg::Loaded(alumni)),
                        Err(_) => link.send_message(Msg::LoadFailed),
                    },
                    _ => link.send_message(Msg::LoadFailed),
                }
            });
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(alumni) => {
                self.alumni = alumni;
                self.loading = false;
                true
            }
            Msg::LoadFailed => {
                self.loading = false;
                show_toast("Failed to load the alumni directory.");
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <p class="loading">{"Loading alumni…"}</p> };
        }
        html! {
            <div class="alumni-page">
                <h1>{"Alumni"}</h1>
                <div class="alumni-grid">
                    {
                        for self.alumni.iter().map(|person| html! {
                            <article class="alumni-card" key={person.id.clone()}>
                                {
                                    if person.avatar_url.is_empty() {
                                        html! { <div class="avatar-placeholder" /> }
                                    } else {
                                        html! { <img class="avatar" src={person.avatar_url.clone()} alt={person.fullname.clone()} /> }
                                    }
                                }
                                <h2>{ &person.fullname }</h2>
                                <p class="alumni-meta">
                                    { &person.current_position }
                                    { if person.company.is_empty() { String::new() } else { format!(" @ {}", person.company) } }
                                </p>
                                <p class="alumni-meta">
                                    { &person.department }
                                    { if person.batch.is_empty() { String::new() } else { format!(" · batch {}", person.batch) } }
                                </p>
                                <p>{ &person.bio }</p>
                                {
                                    if person.linkedin.is_empty() {
                                        html! {}
                                    } else {
                                        html! { <a href={person.linkedin.clone()} target="_blank">{"LinkedIn"}</a> }
                                    }
                                }
                            </article>
                        })
                    }
                </div>
            </div>
        }
    }
}
