//! Application shell: top navigation switching between the public pages and
//! the admin dashboard. Navigation is plain component state; the backend
//! serves `index.html` for unknown paths, so reloads land back here.

use yew::{classes, html, Component, Context, Html};

use crate::components::admin::AdminPage;
use crate::components::alumni::AlumniPage;
use crate::components::blogs::BlogsPage;
use crate::components::events::EventsPage;
use crate::components::gallery::GalleryPage;
use crate::components::home::HomePage;
use crate::components::projects::ProjectsPage;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Events,
    Blogs,
    Projects,
    Alumni,
    Gallery,
    Admin,
}

impl Page {
    fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Events => "Events",
            Page::Blogs => "Blog",
            Page::Projects => "Projects",
            Page::Alumni => "Alumni",
            Page::Gallery => "Gallery",
            Page::Admin => "Admin",
        }
    }
}

pub enum Msg {
    Navigate(Page),
}

pub struct App {
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { page: Page::Home }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                if self.page == page {
                    false
                } else {
                    self.page = page;
                    true
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let pages = [
            Page::Home,
            Page::Events,
            Page::Blogs,
            Page::Projects,
            Page::Alumni,
            Page::Gallery,
            Page::Admin,
        ];

        html! {
            <div class="site-root">
                <header class="site-header">
                    <span class="site-brand">{"Science Society"}</span>
                    <nav class="site-nav">
                        {
                            for pages.iter().map(|page| {
                                let page = *page;
                                html! {
                                    <button
                                        class={classes!("nav-btn", (self.page == page).then_some("active"))}
                                        onclick={link.callback(move |_| Msg::Navigate(page))}
                                    >
                                        { page.label() }
                                    </button>
                                }
                            })
                        }
                    </nav>
                </header>

                <main class="site-main">
                    {
                        match self.page {
                            Page::Home => html! { <HomePage /> },
                            Page::Events => html! { <EventsPage /> },
                            Page::Blogs => html! { <BlogsPage /> },
                            Page::Projects => html! { <ProjectsPage /> },
                            Page::Alumni => html! { <AlumniPage /> },
                            Page::Gallery => html! { <GalleryPage /> },
                            Page::Admin => html! { <AdminPage /> },
                        }
                    }
                </main>

                <footer class="site-footer">
                    <span>{"© Science Society"}</span>
                </footer>
            </div>
        }
    }
}
