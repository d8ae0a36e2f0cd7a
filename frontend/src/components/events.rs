//! Public events page: upcoming and past events with an inline registration
//! form per event.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::event::Event as SocietyEvent;
use common::requests::RegistrationRequest;

use crate::components::helpers::{input_value, show_toast, textarea_value};

pub enum Msg {
    Loaded(Vec<SocietyEvent>),
    LoadFailed,
    ToggleRegister(String),
    UpdateField(&'static str, String),
    Submit,
    Submitted(bool),
}

#[derive(Default)]
pub struct EventsPage {
    events: Vec<SocietyEvent>,
    loading: bool,
    /// Event id whose registration form is open.
    registering: Option<String>,
    form: RegistrationRequest,
    sending: bool,
}

impl Component for EventsPage {
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
                match Request::get("/api/events").send().await {
                    Ok(resp) if resp.ok() => match resp.json::<Vec<SocietyEvent>>().await {
                        Ok(events) => link.send_message(Msg::Loaded(events)),
                        Err(_) => link.send_message(Msg::LoadFailed),
                    },
                    _ => link.send_message(Msg::LoadFailed),
                }
            });
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(events) => {
                self.events = events;
                self.loading = false;
                true
            }
            Msg::LoadFailed => {
                self.loading = false;
                show_toast("Failed to load events.");
                true
            }
            Msg::ToggleRegister(id) => {
                self.registering = if self.registering.as_deref() == Some(&id) {
                    None
                } else {
                    self.form = RegistrationRequest::default();
                    Some(id)
                };
                true
            }
            Msg::UpdateField(field, value) => {
                match field {
                    "fullName" => self.form.full_name = value,
                    "email" => self.form.email = value,
                    "phone" => self.form.phone = value,
                    "studentId" => self.form.student_id = value,
                    "department" => self.form.department = value,
                    "batch" => self.form.batch = value,
                    "section" => self.form.section = value,
                    "message" => self.form.message = value,
                    _ => {}
                }
                false
            }
            Msg::Submit => {
                let Some(event_id) = self.registering.clone() else {
                    return false;
                };
                if self.form.full_name.trim().is_empty() || self.form.email.trim().is_empty() {
                    show_toast("Name and email are required.");
                    return false;
                }
                self.sending = true;
                let link = ctx.link().clone();
                let payload = self.form.clone();
                spawn_local(async move {
                    let url = format!("/api/events/{event_id}/register");
                    let sent = match Request::post(&url).json(&payload) {
                        Ok(req) => matches!(req.send().await, Ok(resp) if resp.ok()),
                        Err(_) => false,
                    };
                    link.send_message(Msg::Submitted(sent));
                });
                true
            }
            Msg::Submitted(ok) => {
                self.sending = false;
                if ok {
                    show_toast("Registration received, see you there!");
                    self.registering = None;
                } else {
                    show_toast("Registration failed, please try again.");
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.loading {
            return html! { <p class="loading">{"Loading events…"}</p> };
        }
        html! {
            <div class="events-page">
                <h1>{"Events"}</h1>
                {
                    if self.events.is_empty() {
                        html! { <p>{"No events yet."}</p> }
                    } else {
                        html! { for self.events.iter().map(|event| self.event_card(ctx, event)) }
                    }
                }
            </div>
        }
    }
}

impl EventsPage {
    fn event_card(&self, ctx: &Context<Self>, event: &SocietyEvent) -> Html {
        let link = ctx.link();
        let id = event.id.clone();
        let image = if !event.image.is_empty() {
            event.image.clone()
        } else {
            event.image_url.clone()
        };
        html! {
            <article class="event-card" key={event.id.clone()}>
                {
                    if image.is_empty() {
                        html! {}
                    } else {
                        html! { <img src={image} alt={event.title.clone()} /> }
                    }
                }
                <div class="event-body">
                    <h2>{ &event.title }</h2>
                    <p class="event-meta">
                        { event.date.format("%B %e, %Y").to_string() }
                        { if event.time.is_empty() { String::new() } else { format!(" · {}", event.time) } }
                        { if event.location.is_empty() { String::new() } else { format!(" · {}", event.location) } }
                    </p>
                    <p>{ &event.description }</p>
                    <button onclick={link.callback(move |_| Msg::ToggleRegister(id.clone()))}>
                        {"Register"}
                    </button>
                    {
                        if self.registering.as_deref() == Some(event.id.as_str()) {
                            self.registration_form(ctx)
                        } else {
                            html! {}
                        }
                    }
                </div>
            </article>
        }
    }

    fn registration_form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let text_input = |field: &'static str, placeholder: &'static str| {
            html! {
                <input
                    placeholder={placeholder}
                    onchange={link.callback(move |e: Event| Msg::UpdateField(field, input_value(&e)))}
                />
            }
        };
        html! {
            <div class="registration-form">
                { text_input("fullName", "Full name *") }
                { text_input("email", "Email *") }
                { text_input("phone", "Phone") }
                { text_input("studentId", "Student ID") }
                { text_input("department", "Department") }
                { text_input("batch", "Batch") }
                { text_input("section", "Section") }
                <textarea
                    placeholder="Anything we should know?"
                    onchange={link.callback(|e: Event| Msg::UpdateField("message", textarea_value(&e)))}
                />
                <button disabled={self.sending} onclick={link.callback(|_| Msg::Submit)}>
                    { if self.sending { "Submitting…" } else { "Submit registration" } }
                </button>
            </div>
        }
    }
}
