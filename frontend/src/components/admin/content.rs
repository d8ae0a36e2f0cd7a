//! Generic CRUD panel for the four content collections.
//!
//! The entities differ only in endpoint, field list and upload field name,
//! so one component covers all of them: records are handled as raw JSON
//! values keyed by the field definitions the parent passes in, and
//! submissions go out as `FormData` so the backend's multipart handlers see
//! exactly what the old forms sent.

use std::collections::HashMap;

use gloo_net::http::Request;
use serde_json::Value;
use web_sys::FormData;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::helpers::{input_value, selected_file, show_toast, textarea_value};

#[derive(Clone, PartialEq)]
pub enum FieldKind {
    Text,
    TextArea,
    Date,
    Number,
}

#[derive(Clone, PartialEq)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
}

impl FieldDef {
    pub fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { name, label, kind }
    }
}

#[derive(Properties, PartialEq)]
pub struct EntityAdminProps {
    /// Collection endpoint, e.g. `/api/events`.
    pub endpoint: &'static str,
    /// Human label for toasts and buttons, e.g. `event`.
    pub label: &'static str,
    /// Field shown in the record list.
    pub title_field: &'static str,
    /// Name of the multipart file part, e.g. `image` or `avatar`.
    pub file_field: &'static str,
    pub fields: Vec<FieldDef>,
}

pub enum Msg {
    Loaded(Vec<Value>),
    LoadFailed,
    New,
    Edit(String),
    CloseForm,
    UpdateValue(String, String),
    SetFile(Option<web_sys::File>),
    Submit,
    Saved(bool),
    Delete(String),
    Deleted(bool),
}

pub struct EntityAdmin {
    items: Vec<Value>,
    loading: bool,
    form_open: bool,
    /// Record being edited; `None` with the form open means creating.
    editing: Option<String>,
    values: HashMap<String, String>,
    file: Option<web_sys::File>,
    saving: bool,
}

impl Component for EntityAdmin {
    type Message = Msg;
    type Properties = EntityAdminProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            form_open: false,
            editing: None,
            values: HashMap::new(),
            file: None,
            saving: false,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            load(ctx);
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        // The parent reuses this component across tabs; reset and reload.
        self.loading = true;
        self.form_open = false;
        self.editing = None;
        self.values.clear();
        self.file = None;
        load(ctx);
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(items) => {
                self.items = items;
                self.loading = false;
                true
            }
            Msg::LoadFailed => {
                self.loading = false;
                show_toast("Failed to load records.");
                true
            }
            Msg::New => {
                self.form_open = true;
                self.editing = None;
                self.values.clear();
                self.file = None;
                true
            }
            Msg::Edit(id) => {
                if let Some(item) = self.items.iter().find(|i| i["_id"] == id.as_str()) {
                    self.values = ctx
                        .props()
                        .fields
                        .iter()
                        .map(|f| (f.name.to_string(), field_text(&item[f.name], &f.kind)))
                        .collect();
                    self.form_open = true;
                    self.editing = Some(id);
                    self.file = None;
                }
                true
            }
            Msg::CloseForm => {
                self.form_open = false;
                true
            }
            Msg::UpdateValue(name, value) => {
                self.values.insert(name, value);
                false
            }
            Msg::SetFile(file) => {
                self.file = file;
                false
            }
            Msg::Submit => {
                let Ok(form) = FormData::new() else {
                    return false;
                };
                for field in &ctx.props().fields {
                    if let Some(value) = self.values.get(field.name) {
                        form.append_with_str(field.name, value).ok();
                    }
                }
                if let Some(file) = &self.file {
                    form.append_with_blob_and_filename(ctx.props().file_field, file, &file.name())
                        .ok();
                }
                let url = match &self.editing {
                    Some(id) => format!("{}/{id}", ctx.props().endpoint),
                    None => ctx.props().endpoint.to_string(),
                };
                let creating = self.editing.is_none();
                self.saving = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let request = if creating {
                        Request::post(&url).body(form)
                    } else {
                        Request::put(&url).body(form)
                    };
                    let ok = match request {
                        Ok(req) => matches!(req.send().await, Ok(resp) if resp.ok()),
                        Err(_) => false,
                    };
                    link.send_message(Msg::Saved(ok));
                });
                true
            }
            Msg::Saved(ok) => {
                self.saving = false;
                if ok {
                    show_toast(&format!("Saved {}.", ctx.props().label));
                    self.form_open = false;
                    load(ctx);
                } else {
                    show_toast("Save failed.");
                }
                true
            }
            Msg::Delete(id) => {
                let url = format!("{}/{id}", ctx.props().endpoint);
                let link = ctx.link().clone();
                spawn_local(async move {
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
                    show_toast("Delete failed.");
                }
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        if self.loading {
            return html! { <p class="loading">{"Loading…"}</p> };
        }
        html! {
            <div class="entity-admin">
                <button onclick={link.callback(|_| Msg::New)}>
                    { format!("New {}", ctx.props().label) }
                </button>
                { if self.form_open { self.form(ctx) } else { html! {} } }
                <ul class="record-list">
                    {
                        for self.items.iter().map(|item| {
                            let id = item["_id"].as_str().unwrap_or_default().to_string();
                            let title = item[ctx.props().title_field]
                                .as_str()
                                .unwrap_or("(untitled)")
                                .to_string();
                            let edit_id = id.clone();
                            let delete_id = id.clone();
                            html! {
                                <li key={id}>
                                    <span>{ title }</span>
                                    <button onclick={link.callback(move |_| Msg::Edit(edit_id.clone()))}>
                                        {"Edit"}
                                    </button>
                                    <button class="danger" onclick={link.callback(move |_| Msg::Delete(delete_id.clone()))}>
                                        {"Delete"}
                                    </button>
                                </li>
                            }
                        })
                    }
                </ul>
            </div>
        }
    }
}

impl EntityAdmin {
    fn form(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="entity-form">
                {
                    for ctx.props().fields.iter().map(|field| {
                        let name = field.name.to_string();
                        let value = self.values.get(field.name).cloned().unwrap_or_default();
                        let row = match field.kind {
                            FieldKind::TextArea => {
                                let name = name.clone();
                                html! {
                                    <textarea
                                        value={value}
                                        onchange={link.callback(move |e: Event| {
                                            Msg::UpdateValue(name.clone(), textarea_value(&e))
                                        })}
                                    />
                                }
                            }
                            FieldKind::Date => {
                                let name = name.clone();
                                html! {
                                    <input
                                        type="date"
                                        value={value}
                                        onchange={link.callback(move |e: Event| {
                                            Msg::UpdateValue(name.clone(), input_value(&e))
                                        })}
                                    />
                                }
                            }
                            FieldKind::Number => {
                                let name = name.clone();
                                html! {
                                    <input
                                        type="number"
                                        value={value}
                                        onchange={link.callback(move |e: Event| {
                                            Msg::UpdateValue(name.clone(), input_value(&e))
                                        })}
                                    />
                                }
                            }
                            FieldKind::Text => {
                                let name = name.clone();
                                html! {
                                    <input
                                        value={value}
                                        onchange={link.callback(move |e: Event| {
                                            Msg::UpdateValue(name.clone(), input_value(&e))
                                        })}
                                    />
                                }
                            }
                        };
                        html! {
                            <label class="form-row">
                                <span>{ field.label }</span>
                                { row }
                            </label>
                        }
                    })
                }
                <label class="form-row">
                    <span>{"Image"}</span>
                    <input
                        type="file"
                        onchange={link.callback(|e: Event| Msg::SetFile(selected_file(&e)))}
                    />
                </label>
                <div class="form-actions">
                    <button disabled={self.saving} onclick={link.callback(|_| Msg::Submit)}>
                        { if self.saving { "Saving…" } else { "Save" } }
                    </button>
                    <button onclick={link.callback(|_| Msg::CloseForm)}>{"Cancel"}</button>
                </div>
            </div>
        }
    }
}

fn load(ctx: &Context<EntityAdmin>) {
    let endpoint = ctx.props().endpoint;
    let link = ctx.link().clone();
    spawn_local(async move {
        match Request::get(endpoint).send().await {
            Ok(resp) if resp.ok() => match resp.json::<Vec<Value>>().await {
                Ok(items) => link.send_message(Msg::Loaded(items)),
                Err(err) => {
                    gloo_console::error!(format!("failed to decode {endpoint}: {err}"));
                    link.send_message(Msg::LoadFailed);
                }
            },
            _ => link.send_message(Msg::LoadFailed),
        }
    });
}

/// Renders a JSON field into the string an `<input>` can edit.
fn field_text(value: &Value, kind: &FieldKind) -> String {
    match value {
        Value::String(s) => match kind {
            // RFC 3339 timestamps become the `YYYY-MM-DD` a date input wants.
            FieldKind::Date => s.chars().take(10).collect(),
            _ => s.clone(),
        },
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(|i| i.as_str())
            .collect::<Vec<_>>()
            .join(", "),
        _ => String::new(),
    }
}
