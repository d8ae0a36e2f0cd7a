//! Admin inbox panels: contact messages and event registrations.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::model::message::Message as ContactMessage;
use common::model::registration::EventRegistration;

use crate::components::helpers::show_toast;

pub enum MessagesMsg {
    Loaded(Vec<ContactMessage>),
    LoadFailed,
    Delete(String),
    Deleted(bool),
}

#[derive(Default)]
pub struct MessagesPanel {
    messages: Vec<ContactMessage>,
    loading: bool,
}

impl Component for MessagesPanel {
    type Message = MessagesMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            load_messages(ctx);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MessagesMsg::Loaded(messages) => {
                self.messages = messages;
                self.loading = false;
                true
            }
            MessagesMsg::LoadFailed => {
                self.loading = false;
                show_toast("Failed to load messages.");
                true
            }
            MessagesMsg::Delete(id) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let url = format!("/api/admin/messages/{id}");
                    let ok = matches!(
                        Request::delete(&url).send().await,
                        Ok(resp) if resp.ok()
                    );
                    link.send_message(MessagesMsg::Deleted(ok));
                });
                false
            }
            MessagesMsg::Deleted(ok) => {
                if ok {
                    load_messages(ctx);
                } else {
                    show_toast("Failed to delete the message.");
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.loading {
            return html! { <p class="loading">{"Loading messages…"}</p> };
        }
        if self.messages.is_empty() {
            return html! { <p>{"Inbox is empty."}</p> };
        }
        html! {
            <ul class="message-list">
                {
                    for self.messages.iter().map(|msg| {
                        let id = msg.id.clone();
                        html! {
                            <li class="message-row" key={msg.id.clone()}>
                                <div>
                                    <strong>{ &msg.full_name }</strong>
                                    <span class="message-meta">
                                        { format!(" <{}> · {}", msg.email, msg.created_at.format("%Y-%m-%d %H:%M")) }
                                    </span>
                                    <p class="message-subject">{ &msg.subject }</p>
                                    <p>{ &msg.message }</p>
                                </div>
                                <button class="danger" onclick={link.callback(move |_| MessagesMsg::Delete(id.clone()))}>
                                    {"Delete"}
                                </button>
                            </li>
                        }
                    })
                }
            </ul>
        }
    }
}

fn load_messages(ctx: &Context<MessagesPanel>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match Request::get("/api/admin/messages").send().await {
            Ok(resp) if resp.ok() => match resp.json::<Vec<ContactMessage>>().await {
                Ok(messages) => link.send_message(MessagesMsg::Loaded(messages)),
                Err(_) => link.send_message(MessagesMsg::LoadFailed),
            },
            _ => link.send_message(MessagesMsg::LoadFailed),
        }
    });
}

pub enum RegistrationsMsg {
    Loaded(Vec<EventRegistration>),
    LoadFailed,
    Delete(String),
    Deleted(bool),
}

#[derive(Default)]
pub struct RegistrationsPanel {
    registrations: Vec<EventRegistration>,
    loading: bool,
}

impl Component for RegistrationsPanel {
    type Message = RegistrationsMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            load_registrations(ctx);
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RegistrationsMsg::Loaded(registrations) => {
                self.registrations = registrations;
                self.loading = false;
                true
            }
            RegistrationsMsg::LoadFailed => {
                self.loading = false;
                show_toast("Failed to load registrations.");
                true
            }
            RegistrationsMsg::Delete(id) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let url = format!("/api/events/registrations/{id}");
                    let ok = matches!(
                        Request::delete(&url).send().await,
                        Ok(resp) if resp.ok()
                    );
                    link.send_message(RegistrationsMsg::Deleted(ok));
                });
                false
            }
            RegistrationsMsg::Deleted(ok) => {
                if ok {
                    load_registrations(ctx);
                } else {
                    show_toast("Failed to delete the registration.");
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.loading {
            return html! { <p class="loading">{"Loading registrations…"}</p> };
        }
        if self.registrations.is_empty() {
            return html! { <p>{"No registrations yet."}</p> };
        }
        html! {
            <table class="registration-table">
                <thead>
                    <tr>
                        <th>{"Event"}</th>
                        <th>{"Name"}</th>
                        <th>{"Email"}</th>
                        <th>{"Student ID"}</th>
                        <th>{"Department"}</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {
                        for self.registrations.iter().map(|reg| {
                            let id = reg.id.clone();
                            html! {
                                <tr key={reg.id.clone()}>
                                    <td>{ &reg.event_title }</td>
                                    <td>{ &reg.full_name }</td>
                                    <td>{ &reg.email }</td>
                                    <td>{ &reg.student_id }</td>
                                    <td>{ &reg.department }</td>
                                    <td>
                                        <button class="danger" onclick={link.callback(move |_| RegistrationsMsg::Delete(id.clone()))}>
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                    }
                </tbody>
            </table>
        }
    }
}

fn load_registrations(ctx: &Context<RegistrationsPanel>) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match Request::get("/api/events/admin/all-registrations").send().await {
            Ok(resp) if resp.ok() => match resp.json::<Vec<EventRegistration>>().await {
                Ok(registrations) => link.send_message(RegistrationsMsg::Loaded(registrations)),
                Err(_) => link.send_message(RegistrationsMsg::LoadFailed),
            },
            _ => link.send_message(RegistrationsMsg::LoadFailed),
        }
    });
}
