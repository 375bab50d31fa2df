use log::{info, warn};
use web_sys::{window, Document};
use yew::prelude::*;

use crate::config;

pub const TITLE: &str = "Atlas | The World's First AI-Powered REI Sales Training";
pub const DESCRIPTION: &str = "Transform your real estate investing with the world's first AI-powered sales training system. Practice with ultra-realistic seller simulations and master deal negotiations.";

const OG_DESCRIPTION: &str = "Master real estate negotiations with our groundbreaking AI training system. Practice with ultra-realistic seller simulations and close more deals.";
const TWITTER_TITLE: &str = "Atlas | Revolutionary AI REI Sales Training";
const TWITTER_DESCRIPTION: &str = "The world's first AI-powered real estate investing sales training platform";
const SHARE_IMAGE: &str = "/share.png";
const FONTS_HREF: &str = "https://fonts.googleapis.com/css2?family=Geist:wght@100..900&family=Geist+Mono:wght@100..900&display=swap";

/// Marks elements this layout inserted so a remount doesn't duplicate them.
const HEAD_MARKER: &str = "data-atlas-head";

#[derive(Debug, PartialEq)]
pub struct HeadTag {
    pub element: &'static str,
    pub attrs: Vec<(&'static str, String)>,
}

impl HeadTag {
    fn meta(key: &'static str, name: &'static str, content: impl Into<String>) -> Self {
        HeadTag { element: "meta", attrs: vec![(key, name.to_string()), ("content", content.into())] }
    }

    fn link(rel: &'static str, href: impl Into<String>, extra: &[(&'static str, &'static str)]) -> Self {
        let mut attrs = vec![("rel", rel.to_string()), ("href", href.into())];
        attrs.extend(extra.iter().map(|(k, v)| (*k, v.to_string())));
        HeadTag { element: "link", attrs }
    }
}

/// Everything the page puts into `<head>`: description, Open Graph, Twitter
/// card, robots directives, icons and fonts. Image URLs are made absolute
/// against `site_url`.
pub fn head_tags(site_url: &str) -> Vec<HeadTag> {
    let share_image = format!("{}{}", site_url.trim_end_matches('/'), SHARE_IMAGE);

    vec![
        HeadTag::meta("name", "viewport", "width=device-width, initial-scale=1, maximum-scale=1"),
        HeadTag::meta("name", "description", DESCRIPTION),
        HeadTag::meta("name", "robots", "index, follow"),
        HeadTag::meta(
            "name",
            "googlebot",
            "index, follow, max-video-preview:-1, max-image-preview:large, max-snippet:-1",
        ),
        // Open Graph
        HeadTag::meta("property", "og:title", TITLE),
        HeadTag::meta("property", "og:description", OG_DESCRIPTION),
        HeadTag::meta("property", "og:url", site_url),
        HeadTag::meta("property", "og:site_name", "Atlas Training"),
        HeadTag::meta("property", "og:image", share_image.clone()),
        HeadTag::meta("property", "og:image:width", "1200"),
        HeadTag::meta("property", "og:image:height", "630"),
        HeadTag::meta("property", "og:image:alt", "Atlas - The World's First AI-Powered REI Sales Training"),
        HeadTag::meta("property", "og:locale", "en_US"),
        HeadTag::meta("property", "og:type", "website"),
        // Twitter
        HeadTag::meta("name", "twitter:card", "summary_large_image"),
        HeadTag::meta("name", "twitter:title", TWITTER_TITLE),
        HeadTag::meta("name", "twitter:description", TWITTER_DESCRIPTION),
        HeadTag::meta("name", "twitter:creator", "@AtlasTraining"),
        HeadTag::meta("name", "twitter:image", share_image),
        // Icons
        HeadTag::link("icon", "/favicon.ico", &[("sizes", "any")]),
        HeadTag::link("icon", "/icon.png", &[("type", "image/png"), ("sizes", "32x32")]),
        HeadTag::link("apple-touch-icon", "/apple-icon.png", &[("type", "image/png"), ("sizes", "180x180")]),
        HeadTag::link("canonical", site_url, &[]),
        HeadTag::link("stylesheet", FONTS_HREF, &[]),
    ]
}

fn apply_head(document: &Document, tags: &[HeadTag]) -> Result<(), wasm_bindgen::JsValue> {
    document.set_title(TITLE);

    let Some(head) = document.head() else {
        warn!("document has no <head>, skipping metadata");
        return Ok(());
    };
    if head.query_selector(&format!("[{}]", HEAD_MARKER))?.is_some() {
        return Ok(());
    }

    for tag in tags {
        let element = document.create_element(tag.element)?;
        for (name, value) in &tag.attrs {
            element.set_attribute(name, value)?;
        }
        element.set_attribute(HEAD_MARKER, "")?;
        head.append_child(&element)?;
    }
    info!("Applied {} head tags", tags.len());
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct RootLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RootLayout)]
pub fn root_layout(props: &RootLayoutProps) -> Html {
    use_effect_with_deps(
        move |_| {
            if let Some(document) = window().and_then(|w| w.document()) {
                if let Err(e) = apply_head(&document, &head_tags(config::get_site_url())) {
                    warn!("Failed to apply page metadata: {:?}", e);
                }
            }
            || ()
        },
        (),
    );

    html! {
        <div class="root-layout antialiased">
            <style>
                {r#"
                    :root {
                        --font-geist-sans: 'Geist', system-ui, sans-serif;
                        --font-geist-mono: 'Geist Mono', ui-monospace, monospace;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        background: #0A0C1B;
                        color: #ffffff;
                        font-family: var(--font-geist-sans);
                    }
                    .antialiased {
                        -webkit-font-smoothing: antialiased;
                        -moz-osx-font-smoothing: grayscale;
                    }
                    *, *::before, *::after {
                        box-sizing: border-box;
                    }
                    a {
                        color: inherit;
                        text-decoration: none;
                    }
                    img {
                        display: block;
                        max-width: 100%;
                    }
                "#}
            </style>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    impl HeadTag {
        fn attr(&self, name: &str) -> Option<&str> {
            self.attrs.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
        }
    }

    fn find<'a>(tags: &'a [HeadTag], key: &str, name: &str) -> Option<&'a HeadTag> {
        tags.iter().find(|t| t.attr(key) == Some(name))
    }

    #[test]
    fn share_image_is_absolute() {
        let tags = head_tags("https://atlastraining.io/");
        let og = find(&tags, "property", "og:image").unwrap();
        assert_eq!(og.attr("content"), Some("https://atlastraining.io/share.png"));
        let tw = find(&tags, "name", "twitter:image").unwrap();
        assert_eq!(tw.attr("content"), Some("https://atlastraining.io/share.png"));
    }

    #[test]
    fn social_cards_carry_title_and_description() {
        let tags = head_tags("https://atlastraining.io");
        assert_eq!(find(&tags, "property", "og:title").unwrap().attr("content"), Some(TITLE));
        assert_eq!(
            find(&tags, "name", "twitter:card").unwrap().attr("content"),
            Some("summary_large_image")
        );
        assert_eq!(find(&tags, "name", "description").unwrap().attr("content"), Some(DESCRIPTION));
    }

    #[test]
    fn icons_are_linked_with_sizes() {
        let tags = head_tags("https://atlastraining.io");
        let apple = find(&tags, "rel", "apple-touch-icon").unwrap();
        assert_eq!(apple.attr("sizes"), Some("180x180"));
        assert_eq!(apple.attr("href"), Some("/apple-icon.png"));
        let icons: Vec<_> = tags.iter().filter(|t| t.attr("rel") == Some("icon")).collect();
        assert_eq!(icons.len(), 2);
    }

    #[test]
    fn robots_allow_indexing() {
        let tags = head_tags("https://atlastraining.io");
        assert_eq!(find(&tags, "name", "robots").unwrap().attr("content"), Some("index, follow"));
    }
}
