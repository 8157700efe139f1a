use std::rc::Rc;

use yew::prelude::*;

use crate::components::cards::{ServiceCard, TestimonialCard};
use crate::components::footer::Footer;
use crate::components::nav::{use_scroll_threshold, Nav};
use crate::components::reveal::{Reveal, RevealContext, StaggerGroup};
use crate::content::SiteContent;
use crate::icons::Icon;
use crate::motion::{BrowserViewport, NavMode, Preset, RevealController};

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_memo(|_| SiteContent::load(), ());
    let reveal_ctx = {
        let config = content.animation.clone();
        use_memo(
            move |_| RevealContext {
                controller: RevealController::new(Rc::new(BrowserViewport)),
                config: Rc::new(config),
            },
            (),
        )
    };
    let past_threshold = use_scroll_threshold(content.animation.threshold_px);
    let brand = AttrValue::from(content.brand.clone());

    html! {
        <ContextProvider<RevealContext> context={(*reveal_ctx).clone()}>
        <div class="landing-page">
            <Nav brand={brand.clone()} mode={NavMode::for_scroll(past_threshold)} />

            <header class="hero">
                <div class="hero-background">
                    <img src="https://placehold.co/1920x1080/f5f5f0/8b7355?text=Aroma+Med+Spa" alt="Spa Interior" />
                    <div class="hero-shade"></div>
                </div>
                <Reveal preset={Preset::Hero} class="hero-content">
                    <p class="eyebrow">{"Welcome to Aroma"}</p>
                    <h1>{"Where Beauty"}<br /><span class="accent">{"Meets Wellness"}</span></h1>
                    <p class="hero-subtitle">
                        {"Experience the perfect blend of medical expertise and spa luxury. Our board-certified professionals deliver transformative results in a serene, welcoming environment."}
                    </p>
                    <div class="hero-cta-group">
                        <button class="primary-button">{"Book Consultation "}{ Icon::ArrowRight.render("arrow") }</button>
                        <a href="#services" class="outline-button">{"View Services"}</a>
                    </div>
                </Reveal>
            </header>

            <section class="feature-strip">
                <StaggerGroup preset={Preset::Rise} class="feature-grid" item_class="feature-item">
                    { for content.features.iter().map(|feature| html! {
                        <>
                            { feature.icon.render("feature-glyph") }
                            <h3>{ feature.title.clone() }</h3>
                            <p>{ feature.blurb.clone() }</p>
                        </>
                    }) }
                </StaggerGroup>
            </section>

            <section id="services" class="services">
                <Reveal preset={Preset::Rise} class="section-header">
                    <p class="eyebrow">{"Our Services"}</p>
                    <h2>{"Premium Treatments"}</h2>
                    <p>{"Discover our comprehensive range of medical spa services designed to rejuvenate your skin, body, and spirit."}</p>
                </Reveal>
                <StaggerGroup preset={Preset::FadeUp} class="services-grid">
                    { for content.services.iter().map(|service| html! {
                        <ServiceCard service={service.clone()} />
                    }) }
                </StaggerGroup>
            </section>

            <section id="about" class="about">
                <div class="about-grid">
                    <Reveal preset={Preset::SlideFromLeft} class="about-visual">
                        <img src="https://placehold.co/800x1000/e8e0d4/5a543d?text=Spa+Interior" alt="Aroma Interior" loading="lazy" />
                        <div class="about-badge">
                            <p class="badge-number">{"10+"}</p>
                            <p>{"Years of excellence in medical aesthetics"}</p>
                        </div>
                    </Reveal>
                    <Reveal preset={Preset::SlideFromRight} class="about-copy">
                        <p class="eyebrow">{"About Aroma"}</p>
                        <h2>{"A Sanctuary of"}<br /><span class="accent">{"Self-Care"}</span></h2>
                        <p>{"Founded with a vision to bridge the gap between medical excellence and spa luxury, Aroma Med Spa has become a trusted destination for those seeking transformative aesthetic treatments."}</p>
                        <p>{"Our team of board-certified physicians and licensed aestheticians combine cutting-edge technology with personalized care, ensuring every treatment is tailored to your unique needs and goals."}</p>
                        <div class="about-points">
                            <div class="about-point">
                                { Icon::Shield.render("point-glyph") }
                                <div>
                                    <h4>{"Certified Experts"}</h4>
                                    <p>{"Board-certified medical professionals"}</p>
                                </div>
                            </div>
                            <div class="about-point">
                                { Icon::Sparkles.render("point-glyph") }
                                <div>
                                    <h4>{"Premium Products"}</h4>
                                    <p>{"Only FDA-approved treatments"}</p>
                                </div>
                            </div>
                        </div>
                        <button class="primary-button">{"Meet Our Team"}</button>
                    </Reveal>
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <Reveal preset={Preset::Rise} class="section-header">
                    <p class="eyebrow">{"Testimonials"}</p>
                    <h2>{"Client Experiences"}</h2>
                </Reveal>
                <StaggerGroup preset={Preset::FadeUp} class="testimonials-grid">
                    { for content.testimonials.iter().map(|testimonial| html! {
                        <TestimonialCard testimonial={testimonial.clone()} />
                    }) }
                </StaggerGroup>
            </section>

            <section class="cta">
                <Reveal preset={Preset::Zoom} class="cta-content">
                    <h2>{"Begin Your Journey"}<br /><span class="accent">{"Today"}</span></h2>
                    <p>{"Schedule a complimentary consultation with our experts to discover the perfect treatments for your aesthetic goals."}</p>
                    <div class="cta-buttons">
                        <button class="light-button">{"Book Consultation"}</button>
                        <a href={format!("tel:{}", content.contact.phone)} class="outline-light-button">{"Call Us Now"}</a>
                    </div>
                </Reveal>
            </section>

            <Footer
                brand={brand}
                tagline={AttrValue::from(content.tagline.clone())}
                social={content.social.clone()}
                quick_links={content.quick_links.clone()}
                legal_links={content.legal_links.clone()}
                contact={content.contact.clone()}
                hours={content.hours.clone()}
            />
        </div>
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: #fafaf9;
                        color: #292524;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }
                    .reveal, .stagger-item {
                        will-change: opacity, transform;
                    }
                    .eyebrow {
                        color: #78716c;
                        letter-spacing: 0.2em;
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        margin-bottom: 0.75rem;
                    }
                    .accent {
                        font-style: italic;
                    }
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        padding-top: 5rem;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        opacity: 0.9;
                    }
                    .hero-shade {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, rgba(245, 245, 244, 0.9), rgba(245, 245, 244, 0.6), transparent);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 42rem;
                        margin-left: max(1.5rem, calc((100vw - 80rem) / 2));
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 300;
                        line-height: 1.1;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        font-size: 1.125rem;
                        color: #57534e;
                        line-height: 1.6;
                        max-width: 32rem;
                        margin-bottom: 2rem;
                    }
                    .hero-cta-group, .cta-buttons {
                        display: flex;
                        gap: 1rem;
                        flex-wrap: wrap;
                    }
                    .primary-button {
                        background: #292524;
                        color: white;
                        border: none;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        cursor: pointer;
                    }
                    .outline-button {
                        border: 2px solid #292524;
                        color: #292524;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        text-decoration: none;
                    }
                    .feature-strip {
                        background: #292524;
                        color: white;
                        padding: 3rem 1.5rem;
                    }
                    .feature-grid, .testimonials-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .feature-item {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.75rem;
                        text-align: center;
                    }
                    .feature-item p {
                        color: #a8a29e;
                        font-size: 0.875rem;
                    }
                    .services, .testimonials {
                        padding: 6rem 1.5rem;
                        background: white;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-header h2, .about-copy h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 300;
                    }
                    .services-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2rem;
                    }
                    .service-image {
                        position: relative;
                        overflow: hidden;
                        border-radius: 1rem;
                        aspect-ratio: 4 / 3;
                        margin-bottom: 1rem;
                    }
                    .service-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: transform 0.5s;
                    }
                    .service-card:hover .service-image img {
                        transform: scale(1.1);
                    }
                    .service-image-shade {
                        position: absolute;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.2);
                    }
                    .service-icon {
                        position: absolute;
                        bottom: 1rem;
                        left: 1rem;
                        background: rgba(255, 255, 255, 0.9);
                        padding: 0.75rem;
                        border-radius: 9999px;
                    }
                    .learn-more {
                        font-size: 0.875rem;
                        font-weight: 500;
                    }
                    .about {
                        padding: 6rem 1.5rem;
                        background: #f5f5f4;
                    }
                    .about-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about-visual {
                        position: relative;
                    }
                    .about-visual img {
                        width: 100%;
                        aspect-ratio: 4 / 5;
                        object-fit: cover;
                        border-radius: 1rem;
                    }
                    .about-badge {
                        position: absolute;
                        bottom: -2rem;
                        right: -2rem;
                        background: white;
                        padding: 2rem;
                        border-radius: 1rem;
                        box-shadow: 0 20px 25px rgba(0, 0, 0, 0.1);
                        max-width: 20rem;
                    }
                    .badge-number {
                        font-size: 2.25rem;
                        font-weight: 300;
                    }
                    .about-points {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                        margin: 2rem 0;
                    }
                    .about-point {
                        display: flex;
                        gap: 0.75rem;
                    }
                    .testimonial-card {
                        background: #fafaf9;
                        padding: 2rem;
                        border-radius: 1rem;
                    }
                    .stars {
                        display: flex;
                        gap: 0.25rem;
                        margin-bottom: 1rem;
                    }
                    .testimonial-text {
                        font-style: italic;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .testimonial-author {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .avatar {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: #d6d3d1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .author-note {
                        color: #78716c;
                        font-size: 0.875rem;
                    }
                    .cta {
                        padding: 6rem 1.5rem;
                        background: #292524;
                        color: white;
                        text-align: center;
                    }
                    .cta-content {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .cta h2 {
                        font-size: clamp(2.25rem, 6vw, 3.75rem);
                        font-weight: 300;
                        margin-bottom: 1.5rem;
                    }
                    .cta p {
                        color: #d6d3d1;
                        font-size: 1.125rem;
                        margin-bottom: 2.5rem;
                    }
                    .cta-buttons {
                        justify-content: center;
                    }
                    .light-button {
                        background: white;
                        color: #292524;
                        border: none;
                        padding: 1rem 2.5rem;
                        border-radius: 9999px;
                        cursor: pointer;
                    }
                    .outline-light-button {
                        border: 2px solid white;
                        color: white;
                        padding: 1rem 2.5rem;
                        border-radius: 9999px;
                        text-decoration: none;
                    }
                    @media (max-width: 1024px) {
                        .services-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                    @media (max-width: 768px) {
                        .services-grid, .feature-grid, .testimonials-grid {
                            grid-template-columns: 1fr;
                        }
                        .about-badge {
                            display: none;
                        }
                    }
                "#}
            </style>
        </ContextProvider<RevealContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render_landing() -> String {
        yew::ServerRenderer::<Landing>::new().render().await
    }

    #[tokio::test]
    async fn page_mounts_translucent_closed_and_hidden() {
        let html = render_landing().await;

        assert!(html.contains("class=\"top-nav nav-translucent\""));
        assert!(!html.contains("class=\"top-nav nav-elevated\""));
        assert!(!html.contains("class=\"mobile-menu"));
        // Nothing is revealed before the page is observed
        assert!(!html.contains("revealed"));
    }

    #[tokio::test]
    async fn binds_content_to_cards() {
        let html = render_landing().await;

        assert_eq!(html.matches("class=\"service-card\"").count(), 4);
        assert_eq!(html.matches("class=\"testimonial-card\"").count(), 3);
        assert_eq!(html.matches("class=\"icon star\"").count(), 15);
        assert!(html.contains("Facial Treatments"));
        assert!(html.contains("Body Contouring"));
    }

    #[tokio::test]
    async fn services_cascade_by_stagger_unit() {
        let html = render_landing().await;

        for delay in ["0ms", "100ms", "200ms", "300ms"] {
            assert!(html.contains(&format!("opacity 600ms ease-out {delay}")));
        }
        assert!(html.contains("data-stagger-index=\"3\""));
    }
}
