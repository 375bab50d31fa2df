use yew::prelude::*;

use crate::components::preview::DashboardPreview;
use crate::config;
use crate::content::{format_usd, total_value, BENEFITS, FINDINGS, MONTHLY_PRICE, PILLARS, PLAN_ITEMS, SELLERS};

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub large: bool,
}

/// Green checkout button used throughout the page.
#[function_component(CheckoutCta)]
pub fn checkout_cta(props: &CtaProps) -> Html {
    html! {
        <a href={config::CHECKOUT_URL} class={classes!("cta-button", props.large.then(|| "large"))}>
            {props.label.to_string()}
        </a>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section id="dashboard" class="hero">
            <div class="container centered">
                <div class="pill">
                    <span class="pill-accent">{"INTRODUCING"}</span>
                    <span class="pill-text">{"The Next Generation of Sales Training →"}</span>
                </div>
                <div class="eyebrow">{"GET STARTED FREE TODAY"}</div>
                <h1>
                    {"Permanently Amplify Your"}<br />
                    {"REI Sales and Negotiation Skills"}
                </h1>
                <p class="lead golden">
                    {"Stop Losing Deals You Should Have Won With This AI-Powered Training System That Uses Neuroscience to permanently amplify your Sales and Negotiation Skills—So You Never Miss a Closable Deal Again"}
                </p>
                <CheckoutCta label="Try Now Free →" />
            </div>
            <DashboardPreview />
        </section>
    }
}

#[function_component(Sellers)]
fn sellers() -> Html {
    html! {
        <section id="sellers" class="container section">
            <div class="centered golden">
                <h2>
                    {"Breathtakingly Realistic"}<br />
                    <span class="accent">{"Seller Simulations"}</span>
                </h2>
                <p class="lead">
                    {"Our AI sellers are trained on thousands of real conversations, objections, and personality types. Practice with sellers who feel real, respond naturally, and test your skills."}
                </p>
            </div>
            <div class="photo-grid golden">
                { for SELLERS.iter().map(|seller| html! {
                    <div class="photo-card" key={seller.name}>
                        <img class="photo" src={seller.image} alt={seller.house_alt} />
                        <div class="photo-body">
                            <div class="photo-who">
                                <img src={seller.avatar} alt={seller.name} />
                                <div>
                                    <h3>{seller.name}</h3>
                                    <p>{seller.address}</p>
                                </div>
                            </div>
                            <p class="photo-desc">{seller.description}</p>
                        </div>
                    </div>
                }) }
            </div>
            <div class="centered" style="margin-top: 4rem;">
                <CheckoutCta label="Start Training Now" large={true} />
            </div>
        </section>
    }
}

#[function_component(Testimonial)]
fn testimonial() -> Html {
    html! {
        <section class="container section">
            <div class="golden" style="margin: 0 auto;">
                <blockquote class="quote">
                    {"\"With Atlas, I don't have to feel the fear"}<br />
                    {"of messing up or the weight of"}<br />
                    {"judgment."}<br />
                    {"I can finally practice, get"}<br />
                    {"better, and step"}<br />
                    {"into real conversations feeling"}<br />
                    <span class="accent">{"prepared and confident."}</span>{"\""}
                </blockquote>
                <p class="muted" style="margin-top: 1.5rem;">{"— Atlas Founding Member"}</p>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works() -> Html {
    html! {
        <section id="how-it-works" class="section">
            <div class="container">
                <div class="two-col">
                    <div>
                        <div class="pill">
                            <span class="pill-accent">{"Powered By"}</span>
                            <span class="pill-text">{"Deep Reality Protocol™"}</span>
                        </div>
                        <h2>
                            {"Neuroscience-Driven"}<br />
                            <span class="accent">{"Training System"}</span><br />
                            {"for Real Results"}
                        </h2>
                        <p class="lead">
                            {"Built on advancements in neuroscience and cognitive behavioral training, our "}
                            <span style="color: white;">{"three pillars of Deep Reality Protocol"}</span>
                            {" create lasting behavioral change"}
                        </p>
                    </div>
                    <div class="pillar-icons">
                        <div class="glow"></div>
                        { for PILLARS.iter().enumerate().map(|(i, pillar)| html! {
                            <div class={classes!("pillar-icon", (i == 1).then(|| "center"))} key={pillar.label}>
                                <div class="pillar-badge"></div>
                                <span>{pillar.label}</span>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="three-col">
                    { for PILLARS.iter().map(|pillar| html! {
                        <div class="pillar" key={pillar.title}>
                            <h3>{pillar.title}</h3>
                            <p class="muted">{pillar.body}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Research)]
fn research() -> Html {
    html! {
        <section id="research" class="section">
            <div class="container">
                <div class="centered">
                    <h2>
                        {"Inspired by Military Grade"}<br />
                        <span class="accent">{"Training Methodology"}</span>
                    </h2>
                    <div class="eyebrow">{"BACKED BY LANDMARK RESEARCH"}</div>
                    <p class="lead golden" style="margin: 0 auto;">
                        {"A meta-analysis of 247 military studies and leading medical institutions reveals why DRP's training methodology creates exceptional performers:"}
                    </p>
                </div>
                <div class="timeline">
                    <div class="timeline-line"></div>
                    { for FINDINGS.iter().map(|finding| html! {
                        <div class="timeline-item" key={finding.title}>
                            <div class="timeline-dot"></div>
                            <div>
                                <h3>{finding.title}</h3>
                                <p class="muted">
                                    {finding.lead}
                                    <span class="accent stat">{finding.stat}</span>
                                    {finding.tail}
                                </p>
                                <p class="source">{finding.source}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(CtaBox)]
fn cta_box() -> Html {
    html! {
        <section class="container section">
            <div class="cta-box">
                <div class="cta-box-gradient"></div>
                <h3>
                    {"Ready to Experience the "}<span class="accent">{"Next Generation"}</span><br />
                    {"of Sales Training?"}
                </h3>
                <p class="lead">
                    {"Join the ranks of top performers who have transformed their sales approach through our advanced AI training system."}
                </p>
                <CheckoutCta label="Start Training Now" large={true} />
            </div>
        </section>
    }
}

#[function_component(Benefits)]
fn benefits() -> Html {
    html! {
        <section id="benefits" class="section">
            <div class="container centered">
                <div class="eyebrow">{"AI DRIVEN SELLER SCENARIOS"}</div>
                <h2>
                    {"Empower yourself to do"}<br />
                    <span class="accent">{"more real estate deals"}</span>
                </h2>
                <p class="lead golden" style="margin: 0 auto;">
                    {"After Analyzing 10,000+ Seller Conversation and identifying the communication patterns that make top investors close 80% more deals than average - our Deep Realty Protocol has helped training over 100+ real estate investors and now we are teaching these patterns through AI seller simulations and neural retraining."}
                </p>
                <div class="benefit-grid">
                    { for BENEFITS.iter().map(|benefit| html! {
                        <div class="benefit-card" key={benefit.highlight}>
                            <h3>{benefit.title}{" "}<span class="accent">{benefit.highlight}</span></h3>
                            <ul>
                                { for benefit.bullets.iter().map(|bullet| html! {
                                    <li>{format!("• {}", bullet)}</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div style="margin-top: 4rem;">
                    <CheckoutCta label="Start Training Now" large={true} />
                </div>
            </div>
        </section>
    }
}

#[function_component(Pricing)]
fn pricing() -> Html {
    html! {
        <section id="final-cta-section" class="section">
            <div class="container">
                <div class="pricing-card">
                    <div class="eyebrow">{"AI DRIVEN SELLER SCENARIOS"}</div>
                    <h2>
                        {"Permanently Amplify"}<br />
                        {"Your Sales And Negotiation Skills"}
                    </h2>
                    <div class="eyebrow">{"GET STARTED FREE TODAY"}</div>
                    <ul class="plan-items">
                        { for PLAN_ITEMS.iter().map(|item| html! {
                            <li key={item.label}>
                                <span>{item.label}</span>
                                <span class="muted">{format!("{}/mo value", format_usd(item.monthly_value))}</span>
                            </li>
                        }) }
                    </ul>
                    <div class="plan-total">
                        <span>{"Total Value"}</span>
                        <span class="strike">{format!("{}/mo", format_usd(total_value(&PLAN_ITEMS)))}</span>
                    </div>
                    <div class="plan-total">
                        <span>{"Your Investment"}</span>
                        <span class="accent price-big">{format!("{}/mo", format_usd(MONTHLY_PRICE))}</span>
                    </div>
                    <p class="lead">
                        {"Our team is ready to help you step into the future of real estate sales. Book a demo today to see how our AI training can completely transform your business."}
                    </p>
                    <CheckoutCta label="Start Training Now" large={true} />
                </div>
            </div>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div>
                    <div class="logo">{"ATLAS"}</div>
                    <p class="muted">
                        {"Transforming real estate professionals through AI-powered training and deep reality simulations."}
                    </p>
                </div>
                <div>
                    <h4>{"Navigation"}</h4>
                    <ul>
                        <li><a href="#sellers">{"Sellers"}</a></li>
                        <li><a href="#how-it-works">{"How it Works"}</a></li>
                        <li><a href="#research">{"Research"}</a></li>
                        <li><a href="#benefits">{"Benefits"}</a></li>
                        <li><a href="#final-cta-section">{"Pricing"}</a></li>
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <p class="muted">
                        {"Email: "}<a href={config::contact_href()}>{config::CONTACT_EMAIL}</a>
                    </p>
                </div>
            </div>
            <div class="container copyright muted">{"© 2024 Atlas. All rights reserved."}</div>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <main class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #0A0C1B;
                        color: white;
                    }
                    .container {
                        max-width: 85rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                    }
                    .centered {
                        text-align: center;
                    }
                    .golden {
                        max-width: 61.8%;
                        margin-left: auto;
                        margin-right: auto;
                    }
                    .section {
                        padding: 8rem 0 6rem;
                        position: relative;
                    }
                    .accent {
                        color: #22C55E;
                    }
                    .muted {
                        color: #9CA3AF;
                    }
                    .hero {
                        position: relative;
                        padding: 8rem 1.5rem 10rem;
                        font-size: 87.5%;
                    }
                    .hero h1 {
                        font-size: 4.8rem;
                        line-height: 1.272;
                        margin: 0 0 2rem;
                    }
                    h2 {
                        font-size: 3.6rem;
                        line-height: 1.2;
                        margin: 0 0 1.5rem;
                    }
                    .lead {
                        font-size: 1.2rem;
                        line-height: 1.618;
                        color: #9CA3AF;
                        margin-bottom: 3rem;
                    }
                    .pill {
                        display: inline-flex;
                        align-items: center;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 9999px;
                        padding: 0.5rem 1rem;
                        margin-bottom: 2rem;
                    }
                    .pill-accent {
                        font-size: 0.9rem;
                        font-weight: 500;
                        color: #22C55E;
                        margin-right: 0.5rem;
                    }
                    .pill-text {
                        font-size: 1.1rem;
                        color: #D1D5DB;
                    }
                    .eyebrow {
                        font-size: 1rem;
                        letter-spacing: 0.1em;
                        color: #22C55E;
                        font-weight: 500;
                        margin-bottom: 1rem;
                    }
                    .cta-button {
                        display: inline-flex;
                        align-items: center;
                        background: #22C55E;
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.5rem;
                        font-size: 1rem;
                        font-weight: 500;
                        transition: background 0.2s;
                    }
                    .cta-button:hover {
                        background: #16A34A;
                    }
                    .cta-button.large {
                        padding: 1.2rem 2rem;
                        font-size: 1.2rem;
                    }
                    .photo-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                        margin-top: 4rem;
                    }
                    .photo-card {
                        background: #141832;
                        border-radius: 0.75rem;
                        overflow: hidden;
                    }
                    .photo-card:hover {
                        box-shadow: 0 0 0 2px #22C55E;
                    }
                    .photo {
                        width: 100%;
                        aspect-ratio: 16 / 9;
                        object-fit: cover;
                    }
                    .photo-body {
                        padding: 1rem;
                    }
                    .photo-who {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        margin-bottom: 0.5rem;
                    }
                    .photo-who img {
                        width: 32px;
                        height: 32px;
                        border-radius: 9999px;
                    }
                    .photo-who h3 {
                        font-size: 0.875rem;
                        margin: 0;
                    }
                    .photo-who p, .photo-desc {
                        font-size: 0.75rem;
                        color: #9CA3AF;
                        margin: 0;
                    }
                    .photo-desc {
                        font-style: italic;
                    }
                    .quote {
                        font-size: 3.6rem;
                        font-weight: 700;
                        line-height: 1.272;
                        margin: 0;
                    }
                    .two-col {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        align-items: center;
                    }
                    .three-col {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 3rem;
                        margin-top: 6rem;
                    }
                    .pillar-icons {
                        position: relative;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        align-items: center;
                    }
                    .pillar-icons .glow {
                        position: absolute;
                        top: -200px;
                        left: 50%;
                        width: 600px;
                        height: 600px;
                        transform: translateX(-50%);
                        background: rgba(34, 197, 94, 0.1);
                        filter: blur(120px);
                        border-radius: 9999px;
                    }
                    .pillar-icon {
                        position: relative;
                        width: 7rem;
                        height: 7rem;
                        border-radius: 1rem;
                        background: linear-gradient(135deg, rgba(255, 255, 255, 0.1), rgba(255, 255, 255, 0.05));
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        font-size: 0.75rem;
                        color: #9CA3AF;
                        transition: transform 0.2s;
                    }
                    .pillar-icon:hover {
                        transform: scale(1.05);
                        color: white;
                    }
                    .pillar-icon.center {
                        width: 9rem;
                        height: 9rem;
                        font-size: 0.875rem;
                    }
                    .pillar-badge {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        margin-bottom: 0.5rem;
                        background: linear-gradient(135deg, #22C55E, #16A34A);
                    }
                    .timeline {
                        position: relative;
                        max-width: 48rem;
                        margin: 4rem auto 0;
                    }
                    .timeline-line {
                        position: absolute;
                        left: 1.5rem;
                        top: 0;
                        bottom: 0;
                        width: 1px;
                        background: linear-gradient(#22C55E, transparent);
                    }
                    .timeline-item {
                        position: relative;
                        display: flex;
                        gap: 2rem;
                        margin-bottom: 4rem;
                    }
                    .timeline-dot {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: #141832;
                        border: 2px solid #22C55E;
                    }
                    .stat {
                        font-weight: 700;
                    }
                    .source {
                        font-size: 0.875rem;
                        color: #6B7280;
                        font-style: italic;
                    }
                    .cta-box {
                        position: relative;
                        overflow: hidden;
                        text-align: center;
                        padding: 4rem 2rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: #0D1025;
                    }
                    .cta-box-gradient {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at top, rgba(34, 197, 94, 0.15), transparent 60%);
                        pointer-events: none;
                    }
                    .cta-box h3 {
                        position: relative;
                        font-size: 2.4rem;
                        margin: 0 0 1.5rem;
                    }
                    .benefit-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                        margin-top: 4rem;
                        text-align: left;
                    }
                    .benefit-card {
                        background: #141832;
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        border-radius: 1rem;
                        padding: 2rem;
                    }
                    .benefit-card h3 {
                        margin-top: 0;
                    }
                    .benefit-card ul {
                        list-style: none;
                        padding: 0;
                        color: #9CA3AF;
                        line-height: 1.8;
                    }
                    .pricing-card {
                        max-width: 48rem;
                        margin: 0 auto;
                        text-align: center;
                        padding: 3rem;
                        border-radius: 1.5rem;
                        background: #0D1025;
                        border: 1px solid rgba(34, 197, 94, 0.3);
                        box-shadow: 0 0 80px rgba(34, 197, 94, 0.15);
                    }
                    .plan-items {
                        list-style: none;
                        padding: 0;
                        margin: 2rem 0;
                        text-align: left;
                    }
                    .plan-items li, .plan-total {
                        display: flex;
                        justify-content: space-between;
                        gap: 1rem;
                        padding: 0.75rem 0;
                        border-bottom: 1px solid rgba(255, 255, 255, 0.08);
                    }
                    .plan-total {
                        font-weight: 600;
                        text-align: left;
                    }
                    .strike {
                        text-decoration: line-through;
                        color: #9CA3AF;
                    }
                    .price-big {
                        font-size: 1.5rem;
                    }
                    .site-footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 4rem 0 2rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 3rem;
                    }
                    .footer-grid ul {
                        list-style: none;
                        padding: 0;
                        line-height: 2;
                        color: #9CA3AF;
                    }
                    .footer-grid a:hover {
                        color: white;
                    }
                    .logo {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .copyright {
                        margin-top: 3rem;
                        font-size: 0.875rem;
                        text-align: center;
                    }
                    @media (max-width: 768px) {
                        .hero h1 {
                            font-size: 3.2rem;
                        }
                        h2, .quote {
                            font-size: 2.8rem;
                        }
                        .golden {
                            max-width: 100%;
                        }
                        .photo-grid, .two-col, .three-col, .benefit-grid, .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <Hero />
            <Sellers />
            <Testimonial />
            <HowItWorks />
            <Research />
            <CtaBox />
            <Benefits />
            <Pricing />
            <Footer />
        </main>
    }
}
