use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, warn, Level};
use web_sys::{window, MouseEvent};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod layout;
mod parallax;
mod components {
    pub mod preview;
}
mod pages {
    pub mod landing;
}

use layout::RootLayout;
use pages::landing::Landing;


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            warn!("Unknown path, rendering Home page");
            html! { <Landing /> }
        },
    }
}

const NAV_LINKS: [(&str, &str); 5] = [
    ("#sellers", "Sellers"),
    ("#how-it-works", "How It Works"),
    ("#research", "Research"),
    ("#benefits", "Benefits"),
    ("#final-cta-section", "Pricing"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = window();

            let scroll_callback = {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_y = window.as_ref().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
                    is_scrolled.set(scroll_y > 16.0);
                }) as Box<dyn FnMut()>)
            };

            if let Some(w) = &window {
                if let Err(e) = w.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                    warn!("Failed to attach scroll listener: {:?}", e);
                }
            }

            move || {
                if let Some(w) = &window {
                    if let Err(e) = w.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref()) {
                        warn!("Failed to detach scroll listener: {:?}", e);
                    }
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // anchor links keep their default jump, only the drawer closes
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: #0A0C1B;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        transition: box-shadow 0.2s;
                    }
                    .top-nav.scrolled {
                        box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
                    }
                    .nav-content {
                        max-width: 85rem;
                        height: 4rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        width: 6rem;
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .nav-links {
                        flex-grow: 1;
                        display: flex;
                        justify-content: center;
                        gap: 3rem;
                    }
                    .nav-link {
                        color: #D1D5DB;
                        transition: color 0.2s;
                    }
                    .nav-link:hover {
                        color: white;
                    }
                    .nav-actions {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: white;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-links {
                            display: none;
                        }
                        .nav-links.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            gap: 1rem;
                            position: absolute;
                            top: 4rem;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: #0A0C1B;
                            border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#dashboard" class="nav-logo">{"ATLAS"}</a>

                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                </div>

                <div class="nav-actions">
                    <a href={config::SIGN_IN_URL} class="nav-link">{"Sign in"}</a>
                    <a href={config::CHECKOUT_URL} class="cta-button">{"Try Now Free →"}</a>
                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <RootLayout>
                <Nav />
                <Switch<Route> render={switch} />
            </RootLayout>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    // logging is best effort, keep rendering without it
    let _ = console_log::init_with_level(level);

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
