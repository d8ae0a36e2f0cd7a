//! Admin dashboard: session gate plus management panels.
//!
//! The dashboard checks `/api/admin/me` on first render; without a valid
//! session only the login form is shown. Content panels for the four entity
//! collections share one generic CRUD component ([`content::EntityAdmin`])
//! parameterized by endpoint and field list; the gallery, inbox and
//! registration panels are their own components.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{input_value, show_toast};

mod content;
mod gallery;
mod inbox;

use content::{EntityAdmin, FieldDef, FieldKind};
use gallery::GalleryManager;
use inbox::{MessagesPanel, RegistrationsPanel};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Events,
    Blogs,
    Projects,
    Alumni,
    Gallery,
    Messages,
    Registrations,
}

impl Tab {
    fn label(&self) -> &'static str {
        match self {
            Tab::Events => "Events",
            Tab::Blogs => "Blogs",
            Tab::Projects => "Projects",
            Tab::Alumni => "Alumni",
            Tab::Gallery => "Gallery",
            Tab::Messages => "Messages",
            Tab::Registrations => "Registrations",
        }
    }
}

pub enum Msg {
    Session(bool),
    UpdateEmail(String),
    UpdatePassword(String),
    Login,
    LoggedIn(bool),
    Logout,
    LoggedOut,
    SetTab(Tab),
}

pub struct AdminPage {
    /// `None` while the session check is in flight.
    session: Option<bool>,
    email: String,
    password: String,
    tab: Tab,
}

impl Component for AdminPage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: None,
            email: String::new(),
            password: String::new(),
            tab: Tab::Events,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                let logged_in = matches!(
                    Request::get("/api/admin/me").send().await,
                    Ok(resp) if resp.ok()
                );
                link.send_message(Msg::Session(logged_in));
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Session(logged_in) => {
                self.session = Some(logged_in);
                true
            }
            Msg::UpdateEmail(v) => {
                self.email = v;
                false
            }
            Msg::UpdatePassword(v) => {
                self.password = v;
                false
            }
            Msg::Login => {
                let link = ctx.link().clone();
                let payload = serde_json::json!({
                    "email": self.email,
                    "password": self.password,
                });
                spawn_local(async move {
                    let ok = match Request::post("/api/admin/login").json(&payload) {
                        Ok(req) => matches!(req.send().await, Ok(resp) if resp.ok()),
                        Err(_) => false,
                    };
                    link.send_message(Msg::LoggedIn(ok));
                });
                false
            }
            Msg::LoggedIn(ok) => {
                if ok {
                    self.session = Some(true);
                    self.password.clear();
                } else {
                    show_toast("Invalid credentials.");
                }
                true
            }
            Msg::Logout => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let _ = Request::post("/api/admin/logout").send().await;
                    link.send_message(Msg::LoggedOut);
                });
                false
            }
            Msg::LoggedOut => {
                self.session = Some(false);
                true
            }
            Msg::SetTab(tab) => {
                if self.tab == tab {
                    false
                } else {
                    self.tab = tab;
                    true
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.session {
            None => html! { <p class="loading">{"Checking session…"}</p> },
            Some(false) => self.login_form(ctx),
            Some(true) => self.dashboard(ctx),
        }
    }
}

impl AdminPage {
    fn login_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="admin-login">
                <h1>{"Admin login"}</h1>
                <input
                    placeholder="Email"
                    value={self.email.clone()}
                    onchange={link.callback(|e: Event| Msg::UpdateEmail(input_value(&e)))}
                />
                <input
                    type="password"
                    placeholder="Password"
                    value={self.password.clone()}
                    onchange={link.callback(|e: Event| Msg::UpdatePassword(input_value(&e)))}
                />
                <button onclick={link.callback(|_| Msg::Login)}>{"Log in"}</button>
            </div>
        }
    }

    fn dashboard(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let tabs = [
            Tab::Events,
            Tab::Blogs,
            Tab::Projects,
            Tab::Alumni,
            Tab::Gallery,
            Tab::Messages,
            Tab::Registrations,
        ];
        html! {
            <div class="admin-dashboard">
                <div class="admin-toolbar">
                    {
                        for tabs.iter().map(|tab| {
                            let tab = *tab;
                            html! {
                                <button
                                    class={classes!("tab-btn", (self.tab == tab).then_some("active"))}
                                    onclick={link.callback(move |_| Msg::SetTab(tab))}
                                >
                                    { tab.label() }
                                </button>
                            }
                        })
                    }
                    <button class="logout-btn" onclick={link.callback(|_| Msg::Logout)}>
                        {"Log out"}
                    </button>
                </div>
                { self.panel() }
            </div>
        }
    }

    fn panel(&self) -> Html {
        match self.tab {
            Tab::Events => html! {
                <EntityAdmin
                    endpoint="/api/events"
                    label="event"
                    title_field="title"
                    file_field="image"
                    fields={event_fields()}
                />
            },
            Tab::Blogs => html! {
                <EntityAdmin
                    endpoint="/api/blogs"
                    label="blog post"
                    title_field="title"
                    file_field="image"
                    fields={blog_fields()}
                />
            },
            Tab::Projects => html! {
                <EntityAdmin
                    endpoint="/api/projects"
                    label="project"
                    title_field="title"
                    file_field="image"
                    fields={project_fields()}
                />
            },
            Tab::Alumni => html! {
                <EntityAdmin
                    endpoint="/api/alumni"
                    label="alumni entry"
                    title_field="fullname"
                    file_field="avatar"
                    fields={alumni_fields()}
                />
            },
            Tab::Gallery => html! { <GalleryManager /> },
            Tab::Messages => html! { <MessagesPanel /> },
            Tab::Registrations => html! { <RegistrationsPanel /> },
        }
    }
}

fn event_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("title", "Title", FieldKind::Text),
        FieldDef::new("description", "Description", FieldKind::TextArea),
        FieldDef::new("date", "Date", FieldKind::Date),
        FieldDef::new("time", "Time", FieldKind::Text),
        FieldDef::new("location", "Location", FieldKind::Text),
        FieldDef::new("attendees", "Expected attendees", FieldKind::Number),
        FieldDef::new("type", "Type", FieldKind::Text),
        FieldDef::new("status", "Status", FieldKind::Text),
        FieldDef::new("image_url", "External image URL", FieldKind::Text),
        FieldDef::new("registration_link", "Registration link", FieldKind::Text),
    ]
}

fn blog_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("title", "Title", FieldKind::Text),
        FieldDef::new("description", "Description", FieldKind::TextArea),
        FieldDef::new("content", "Content (markdown)", FieldKind::TextArea),
        FieldDef::new("author", "Author", FieldKind::Text),
        FieldDef::new("readTime", "Read time", FieldKind::Text),
    ]
}

fn project_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("title", "Title", FieldKind::Text),
        FieldDef::new("description", "Description", FieldKind::TextArea),
        FieldDef::new("category", "Category", FieldKind::Text),
        FieldDef::new("status", "Status", FieldKind::Text),
        FieldDef::new("stars", "Stars", FieldKind::Number),
        FieldDef::new("team", "Team", FieldKind::Text),
        FieldDef::new("technologies", "Technologies (comma-separated)", FieldKind::Text),
        FieldDef::new("team_members", "Team members (comma-separated)", FieldKind::Text),
        FieldDef::new("content", "Content", FieldKind::TextArea),
        FieldDef::new("github_url", "GitHub URL", FieldKind::Text),
        FieldDef::new("demo_url", "Demo URL", FieldKind::Text),
    ]
}

fn alumni_fields() -> Vec<FieldDef> {
    vec![
        FieldDef::new("fullname", "Full name", FieldKind::Text),
        FieldDef::new("batch", "Batch", FieldKind::Text),
        FieldDef::new("department", "Department", FieldKind::Text),
        FieldDef::new("current_position", "Current position", FieldKind::Text),
        FieldDef::new("company", "Company", FieldKind::Text),
        FieldDef::new("bio", "Bio", FieldKind::TextArea),
        FieldDef::new("email", "Email", FieldKind::Text),
        FieldDef::new("phone", "Phone", FieldKind::Text),
        FieldDef::new("linkedin", "LinkedIn", FieldKind::Text),
        FieldDef::new("facebook", "Facebook", FieldKind::Text),
    ]
}
