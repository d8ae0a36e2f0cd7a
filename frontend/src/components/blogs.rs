//! Blog list and detail view. Post content is markdown, rendered client-side.

use gloo_net::http::Request;
use pulldown_cmark::{html as md_html, Parser};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::blog::Blog;

use crate::components::helpers::show_toast;

pub enum Msg {
    Loaded(Vec<Blog>),
    LoadFailed,
    Open(String),
    Back,
}

#[derive(Default)]
pub struct BlogsPage {
    blogs: Vec<Blog>,
    loading: bool,
    selected: Option<String>,
}

impl Component for BlogsPage {
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
                match Request::get("/api/blogs").send().await {
                    Ok(resp) if resp.ok() => match resp.json::<Vec<Blog>>().await {
                        Ok(blogs) => link.send_message(Msg::Loaded(blogs)),
                        Err(_) => link.send_message(Msg::LoadFailed),
                    },
                    _ => link.send_message(Msg::LoadFailed),
                }
            });
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(blogs) => {
                self.blogs = blogs;
                self.loading = false;
                true
            }
            Msg::LoadFailed => {
                self.loading = false;
                show_toast("Failed to load blog posts.");
                true
            }
            Msg::Open(id) => {
                self.selected = Some(id);
                true
            }
            Msg::Back => {
                self.selected = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <p class="loading">{"Loading posts…"}</p> };
        }
        if let Some(blog) = self
            .selected
            .as_ref()
            .and_then(|id| self.blogs.iter().find(|b| &b.id == id))
        {
            return self.detail(ctx, blog);
        }
        let link = ctx.link();
        html! {
            <div class="blogs-page">
                <h1>{"Blog"}</h1>
                {
                    for self.blogs.iter().map(|blog| {
                        let id = blog.id.clone();
                        html! {
                            <article class="blog-card" key={blog.id.clone()}>
                                {
                                    if blog.image.is_empty() {
                                        html! {}
                                    } else {
                                        html! { <img src={blog.image.clone()} alt={blog.title.clone()} /> }
                                    }
                                }
                                <h2>{ &blog.title }</h2>
                                <p class="blog-meta">
                                    { format!("{} · {}", blog.author, blog.post_time.format("%B %e, %Y")) }
                                    { if blog.read_time.is_empty() { String::new() } else { format!(" · {}", blog.read_time) } }
                                </p>
                                <p>{ &blog.description }</p>
                                <button onclick={link.callback(move |_| Msg::Open(id.clone()))}>
                                    {"Read more"}
                                </button>
                            </article>
                        }
                    })
                }
            </div>
        }
    }
}

impl BlogsPage {
    fn detail(&self, ctx: &Context<Self>, blog: &Blog) -> Html {
        let mut rendered = String::new();
        md_html::push_html(&mut rendered, Parser::new(&blog.content));
        html! {
            <article class="blog-detail">
                <button onclick={ctx.link().callback(|_| Msg::Back)}>{"← All posts"}</button>
                <h1>{ &blog.title }</h1>
                <p class="blog-meta">
                    { format!("{} · {}", blog.author, blog.post_time.format("%B %e, %Y")) }
                </p>
                {
                    if blog.image.is_empty() {
                        html! {}
                    } else {
                        html! { <img src={blog.image.clone()} alt={blog.title.clone()} /> }
                    }
                }
                <div class="blog-content">
                    { Html::from_html_unchecked(AttrValue::from(rendered)) }
                </div>
            </article>
        }
    }
}
