//! Project showcase grid.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::project::Project;

use crate::components::helpers::show_toast;

pub enum Msg {
    Loaded(Vec<Project>),
    LoadFailed,
}

#[derive(Default)]
pub struct ProjectsPage {
    projects: Vec<Project>,
    loading: bool,
}

impl Component for ProjectsPage {
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
                match Request::get("/api/projects").send().await {
                    Ok(resp) if resp.ok() => match resp.json::<Vec<Project>>().await {
                        Ok(projects) => link.send_message(Msg::Loaded(projects)),
                        Err(_) => link.send_message(Msg::LoadFailed),
                    },
                    _ => link.send_message(Msg::LoadFailed),
                }
            });
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(projects) => {
                self.projects = projects;
                self.loading = false;
                true
            }
            Msg::LoadFailed => {
                self.loading = false;
                show_toast("Failed to load projects.");
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <p class="loading">{"Loading projects…"}</p> };
        }
        html! {
            <div class="projects-page">
                <h1>{"Projects"}</h1>
                <div class="project-grid">
                    {
                        for self.projects.iter().map(|project| html! {
                            <article class="project-card" key={project.id.clone()}>
                                {
                                    if project.image.is_empty() {
                                        html! {}
                                    } else {
                                        html! { <img src={project.image.clone()} alt={project.title.clone()} /> }
                                    }
                                }
                                <h2>{ &project.title }</h2>
                                <p class="project-meta">
                                    { &project.category }
                                    { if project.status.is_empty() { String::new() } else { format!(" · {}", project.status) } }
                                    { if project.stars > 0 { format!(" · ★ {}", project.stars) } else { String::new() } }
                                </p>
                                <p>{ &project.description }</p>
                                <div class="tech-tags">
                                    {
                                        for project.technologies.iter().map(|tech| html! {
                                            <span class="tag">{ tech }</span>
                                        })
                                    }
                                </div>
                                <div class="project-links">
                                    {
                                        if project.github_url.is_empty() {
                                            html! {}
                                        } else {
                                            html! { <a href={project.github_url.clone()} target="_blank">{"Source"}</a> }
                                        }
                                    }
                                    {
                                        if project.demo_url.is_empty() {
                                            html! {}
                                        } else {
                                            html! { <a href={project.demo_url.clone()} target="_blank">{"Demo"}</a> }
                                        }
                                    }
                                </div>
                            </article>
                        })
                    }
                </div>
            </div>
        }
    }
}
