use chrono::Utc;
use web_sys::Element;
use yew::prelude::*;

use crate::content::{format_usd, COMPARABLES, SELLERS};
use crate::parallax::{
    compute_transform, transition, AnimationFrameScheduler, FrameLoop, Layer, ParallaxConfig, PointerSample,
    PreviewAction, PreviewState, RegionRect,
};

#[derive(Properties, PartialEq)]
pub struct DashboardPreviewProps {
    #[prop_or_default]
    pub config: ParallaxConfig,
}

fn layer_style(config: &ParallaxConfig, layer: Layer, state: &PreviewState) -> String {
    format!(
        "transform: {}; z-index: {}; transition: {};",
        compute_transform(config, layer, state.pointer, state.hovering),
        layer.z_index(),
        transition(state.hovering),
    )
}

/// Current bounding box of the element behind `region`.
fn region_rect(region: &NodeRef) -> Option<RegionRect> {
    let rect = region.cast::<Element>()?.get_bounding_client_rect();
    Some(RegionRect {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    })
}

/// Events are delegated to the app root, so the sample is taken against the
/// preview's own rect rather than the event's current target.
fn sample_in_region(region: &RegionRect, client_x: i32, client_y: i32) -> PointerSample {
    region.sample(client_x as f64, client_y as f64)
}

/// Two stacked app screenshots that tilt toward the pointer.
#[function_component(DashboardPreview)]
pub fn dashboard_preview(props: &DashboardPreviewProps) -> Html {
    let state = use_reducer(PreviewState::default);
    let region = use_node_ref();

    // Keep re-rendering every frame while hovered, even without pointer movement.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |hovering| {
                let frame_loop = (*hovering).then(|| {
                    FrameLoop::start(AnimationFrameScheduler, move |_| {
                        dispatcher.dispatch(PreviewAction::Frame(Utc::now().timestamp_millis()));
                    })
                });
                move || drop(frame_loop)
            },
            state.hovering,
        );
    }

    let onmousemove = {
        let dispatcher = state.dispatcher();
        let region = region.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(rect) = region_rect(&region) else {
                return;
            };
            dispatcher.dispatch(PreviewAction::Move(sample_in_region(&rect, e.client_x(), e.client_y())));
        })
    };
    let onmouseenter = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PreviewAction::Enter))
    };
    let onmouseleave = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PreviewAction::Leave))
    };

    html! {
        <div class="dashboard-preview" ref={region} {onmousemove} {onmouseenter} {onmouseleave}>
            <style>
                {r#"
                    .dashboard-preview {
                        position: relative;
                        max-width: 72rem;
                        height: 600px;
                        margin: 5rem auto 0;
                        text-align: left;
                    }
                    .gradient-circle {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 700px;
                        height: 700px;
                        transform: translate(-50%, -50%);
                        background: radial-gradient(circle, rgba(34, 197, 94, 0.25) 0%, rgba(34, 197, 94, 0) 70%);
                        filter: blur(60px);
                        pointer-events: none;
                    }
                    .preview-card {
                        position: absolute;
                        inset: 0;
                        background: #0D1025;
                        border-radius: 0.75rem;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
                    }
                    .preview-card-inner {
                        position: relative;
                        z-index: 1;
                        height: 100%;
                        background: #0D1025;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 0.75rem;
                        overflow: hidden;
                    }
                    .animated-border::before {
                        content: "";
                        position: absolute;
                        inset: -1px;
                        border-radius: 0.8rem;
                        background: linear-gradient(90deg, #22C55E, transparent, #22C55E);
                        background-size: 200% 100%;
                        animation: border-slide 6s linear infinite;
                    }
                    @keyframes border-slide {
                        from { background-position: 0% 0; }
                        to { background-position: 200% 0; }
                    }
                    .green-glow-shadow {
                        box-shadow: 0 0 60px rgba(34, 197, 94, 0.25);
                    }
                    .preview-header {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        margin-bottom: 1.5rem;
                    }
                    .preview-header h2 {
                        margin: 0;
                        font-size: 1.5rem;
                    }
                    .muted {
                        color: #9CA3AF;
                    }
                    .menu-button {
                        background: #22C55E;
                        border: none;
                        border-radius: 0.5rem;
                        color: white;
                        padding: 0.5rem;
                    }
                    .seller-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                    }
                    .seller-card {
                        background: #141832;
                        border-radius: 0.75rem;
                        overflow: hidden;
                        transition: box-shadow 0.2s;
                    }
                    .seller-card:hover {
                        box-shadow: 0 0 0 2px #22C55E;
                    }
                    .seller-card .house {
                        height: 10rem;
                        width: 100%;
                        object-fit: cover;
                    }
                    .seller-body {
                        padding: 1rem;
                    }
                    .seller-who {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 0.5rem;
                    }
                    .seller-who img {
                        width: 32px;
                        height: 32px;
                        border-radius: 9999px;
                    }
                    .seller-who h3 {
                        margin: 0;
                        font-size: 0.875rem;
                    }
                    .seller-who p, .seller-body > p {
                        margin: 0;
                        font-size: 0.75rem;
                        color: #9CA3AF;
                    }
                    .seller-body > p {
                        font-style: italic;
                    }
                    .detail-hero {
                        width: 100%;
                        height: 12rem;
                        object-fit: cover;
                    }
                    .call-buttons {
                        display: flex;
                        gap: 0.5rem;
                    }
                    .call-buttons button {
                        color: white;
                        padding: 0.5rem 1rem;
                        border-radius: 0.5rem;
                        font-size: 0.875rem;
                        border: 1px solid #4B5563;
                        background: transparent;
                    }
                    .call-buttons .start-call {
                        background: #22C55E;
                        border-color: #22C55E;
                    }
                    .info-panel {
                        background: #141832;
                        padding: 1rem;
                        border-radius: 0.5rem;
                        margin-bottom: 1rem;
                    }
                    .info-panel h3 {
                        margin: 0 0 1rem;
                        font-size: 1.125rem;
                    }
                    .info-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }
                    .comparable {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 0.75rem;
                    }
                    .price {
                        color: #22C55E;
                        font-weight: 600;
                    }
                    @media (max-width: 768px) {
                        .seller-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="gradient-circle"></div>

            // Back card: seller grid
            <div class="preview-card animated-border" style={layer_style(&props.config, Layer::Back, &state)}>
                <div class="preview-card-inner" style="padding: 1.5rem;">
                    <div class="preview-header">
                        <div>
                            <h2>{"Hello, Matt!"}</h2>
                            <p class="muted">{"Click any seller to get started"}</p>
                        </div>
                        <button class="menu-button" aria-label="Menu">{"☰"}</button>
                    </div>
                    <div class="seller-grid">
                        { for SELLERS.iter().map(|seller| html! {
                            <div class="seller-card" key={seller.name}>
                                <img class="house" src={seller.image} alt={seller.name} />
                                <div class="seller-body">
                                    <div class="seller-who">
                                        <img src={seller.avatar} alt={seller.name} />
                                        <div>
                                            <h3>{seller.name}</h3>
                                            <p>{seller.address}</p>
                                        </div>
                                    </div>
                                    <p>{seller.description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            // Front card: property details
            <div class="preview-card green-glow-shadow" style={layer_style(&props.config, Layer::Front, &state)}>
                <div class="preview-card-inner">
                    <img class="detail-hero" src="/rebecca-property.png" alt="Rebecca Mitchell's Property" />
                    <div style="padding: 1.5rem;">
                        <div class="preview-header">
                            <div class="seller-who">
                                <img src="/rebecca-avata.png" alt="Rebecca Mitchell" style="width: 40px; height: 40px;" />
                                <div>
                                    <div style="font-weight: 600;">{"Rebecca Mitchell"}</div>
                                    <div class="muted" style="font-size: 0.875rem; font-style: italic;">
                                        {"The Dallas School Teacher Who Talks \"Way\" Too Much."}
                                    </div>
                                </div>
                            </div>
                            <div class="call-buttons">
                                <button class="start-call">{"Start Call"}</button>
                                <button>{"End Call"}</button>
                            </div>
                        </div>

                        <div class="info-panel">
                            <h3>{"Property Information"}</h3>
                            <div class="info-grid">
                                <div>
                                    <div class="muted">{"Address"}</div>
                                    <div style="font-weight: 600;">{"8847 Mockingbird Lane"}</div>
                                    <div class="muted">{"Dallas, TX 75238"}</div>
                                </div>
                                <div>
                                    <div class="muted">{"Neighborhood"}</div>
                                    <div style="font-weight: 600;">{"Lake Highlands"}</div>
                                </div>
                                <div>
                                    <div class="muted">{"Built"}</div>
                                    <div style="font-weight: 600;">{"1968"}</div>
                                </div>
                                <div>
                                    <div class="muted">{"Style"}</div>
                                    <div style="font-weight: 600;">{"Traditional Ranch"}</div>
                                </div>
                            </div>
                        </div>

                        <div class="info-panel">
                            <h3>{"Comparable Properties"}</h3>
                            { for COMPARABLES.iter().map(|comp| html! {
                                <div class="comparable" key={comp.address}>
                                    <div>
                                        <div style="font-weight: 500;">{comp.address}</div>
                                        <div class="muted">{format!("Condition: {}", comp.condition)}</div>
                                    </div>
                                    <div class="price">{format_usd(comp.price)}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_layers_use_slow_transition_and_stack_order() {
        let state = PreviewState::default();
        let config = ParallaxConfig::default();
        let back = layer_style(&config, Layer::Back, &state);
        let front = layer_style(&config, Layer::Front, &state);
        assert!(back.contains("z-index: 10;"));
        assert!(front.contains("z-index: 20;"));
        assert!(back.ends_with("transition: transform 0.4s ease-out;"));
        assert!(!back.contains("translateX"));
    }

    #[test]
    fn sample_is_relative_to_scrolled_region() {
        // preview sits well below the fold, page scrolled so it is in view
        let region = RegionRect { left: 184.0, top: 420.0, width: 1152.0, height: 600.0 };
        assert_eq!(sample_in_region(&region, 760, 720), PointerSample { x: 0.5, y: 0.5 });
        assert_eq!(sample_in_region(&region, 184, 420), PointerSample { x: 0.0, y: 0.0 });
        assert_eq!(sample_in_region(&region, 1336, 1020), PointerSample { x: 1.0, y: 1.0 });
    }

    #[test]
    fn region_center_tilts_to_base_pose() {
        let region = RegionRect { left: 184.0, top: -300.0, width: 1152.0, height: 600.0 };
        let state = PreviewState { pointer: sample_in_region(&region, 760, 0), hovering: true, stamp: 0 };
        let style = layer_style(&ParallaxConfig::default(), Layer::Back, &state);
        assert!(style.contains("rotateX(8deg) rotateY(4deg) translateX(0%)"));
    }

    #[test]
    fn hovered_layers_follow_pointer() {
        let state = PreviewState { pointer: PointerSample { x: 1.0, y: 1.0 }, hovering: true, stamp: 0 };
        let style = layer_style(&ParallaxConfig::default(), Layer::Front, &state);
        assert!(style.contains("rotateX(9deg) rotateY(5deg) translateX(10%)"));
        assert!(style.contains("transition: transform 0.1s ease-out;"));
    }
}
