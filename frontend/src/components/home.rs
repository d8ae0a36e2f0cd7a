//! Landing page: hero banner plus the public contact form, which posts to
//! the admin message inbox.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{input_value, show_toast, textarea_value};

pub enum Msg {
    UpdateName(String),
    UpdateEmail(String),
    UpdateSubject(String),
    UpdateMessage(String),
    Submit,
    Submitted(bool),
}

#[derive(Default)]
pub struct HomePage {
    name: String,
    email: String,
    subject: String,
    message: String,
    sending: bool,
}

impl Component for HomePage {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateName(v) => {
                self.name = v;
                false
            }
            Msg::UpdateEmail(v) => {
                self.email = v;
                false
            }
            Msg::UpdateSubject(v) => {
                self.subject = v;
                false
            }
            Msg::UpdateMessage(v) => {
                self.message = v;
                false
            }
            Msg::Submit => {
                if self.name.trim().is_empty() || self.message.trim().is_empty() {
                    show_toast("Please fill in your name and a message.");
                    return false;
                }
                self.sending = true;
                let link = ctx.link().clone();
                let payload = serde_json::json!({
                    "fullName": self.name,
                    "email": self.email,
                    "subject": self.subject,
                    "message": self.message,
                });
                spawn_local(async move {
                    let sent = match Request::post("/api/admin/messages").json(&payload) {
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
                    show_toast("Message sent, thank you!");
                    self.name.clear();
                    self.email.clear();
                    self.subject.clear();
                    self.message.clear();
                } else {
                    show_toast("Failed to send the message, please try again.");
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="home-page">
                <section class="hero">
                    <h1>{"Curiosity, rigor, community."}</h1>
                    <p>{"The student science society — events, projects, and a growing alumni network."}</p>
                </section>

                <section class="contact">
                    <h2>{"Get in touch"}</h2>
                    <div class="contact-form">
                        <input
                            placeholder="Your name"
                            value={self.name.clone()}
                            onchange={link.callback(|e: Event| Msg::UpdateName(input_value(&e)))}
                        />
                        <input
                            placeholder="Email"
                            value={self.email.clone()}
                            onchange={link.callback(|e: Event| Msg::UpdateEmail(input_value(&e)))}
                        />
                        <input
                            placeholder="Subject"
                            value={self.subject.clone()}
                            onchange={link.callback(|e: Event| Msg::UpdateSubject(input_value(&e)))}
                        />
                        <textarea
                            placeholder="Message"
                            value={self.message.clone()}
                            onchange={link.callback(|e: Event| Msg::UpdateMessage(textarea_value(&e)))}
                        />
                        <button disabled={self.sending} onclick={link.callback(|_| Msg::Submit)}>
                            { if self.sending { "Sending…" } else { "Send" } }
                        </button>
                    </div>
                </section>
            </div>
        }
    }
}
