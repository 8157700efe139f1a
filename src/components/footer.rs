use chrono::Datelike;
use yew::prelude::*;

use crate::content::{Contact, Link, OpeningHours, SocialLink};
use crate::icons::Icon;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand: AttrValue,
    pub tagline: AttrValue,
    pub social: Vec<SocialLink>,
    pub quick_links: Vec<Link>,
    pub legal_links: Vec<Link>,
    pub contact: Contact,
    pub hours: Vec<OpeningHours>,
}

fn link_list(links: &[Link], class: &'static str) -> Html {
    html! {
        { for links.iter().map(|link| html! {
            <a href={link.href.clone()} class={class}>{ link.label.clone() }</a>
        }) }
    }
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-grid">
                <div>
                    <h3 class="footer-brand">{ props.brand.clone() }</h3>
                    <p class="footer-tagline">{ props.tagline.clone() }</p>
                    <div class="social-links">
                        { for props.social.iter().map(|social| html! {
                            <a href={social.href.clone()} class="social-link">{ social.icon.render("social-glyph") }</a>
                        }) }
                    </div>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    <ul class="footer-list">
                        { for props.quick_links.iter().map(|link| html! {
                            <li>{ link_list(std::slice::from_ref(link), "footer-link") }</li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h4>{"Contact"}</h4>
                    <ul class="footer-list">
                        <li class="contact-line">
                            { Icon::MapPin.render("contact-glyph") }
                            <span>
                                { for props.contact.address.iter().map(|line| html! { <>{ line.clone() }<br /></> }) }
                            </span>
                        </li>
                        <li class="contact-line">
                            { Icon::Phone.render("contact-glyph") }
                            <span>{ props.contact.phone.clone() }</span>
                        </li>
                        <li class="contact-line">
                            { Icon::Calendar.render("contact-glyph") }
                            <span>{ props.contact.email.clone() }</span>
                        </li>
                    </ul>
                </div>
                <div>
                    <h4>{"Hours"}</h4>
                    <ul class="footer-list">
                        { for props.hours.iter().map(|entry| html! {
                            <li class="hours-line">
                                <span>{ entry.days.clone() }</span>
                                <span>{ entry.time.clone() }</span>
                            </li>
                        }) }
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{ format!("© {} Aroma Med Spa. All rights reserved.", year) }</p>
                <div class="legal-links">
                    { link_list(&props.legal_links, "legal-link") }
                </div>
            </div>
            <style>
                {r#"
                    .site-footer {
                        background: #f5f5f4;
                        padding: 5rem 1.5rem 2.5rem;
                    }
                    .footer-grid {
                        max-width: 80rem;
                        margin: 0 auto 4rem;
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 3rem;
                    }
                    .footer-brand {
                        font-size: 1.5rem;
                        font-weight: 300;
                        letter-spacing: 0.3em;
                        margin-bottom: 1.5rem;
                    }
                    .footer-tagline {
                        color: #57534e;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-link {
                        background: #e7e5e4;
                        padding: 0.5rem;
                        border-radius: 9999px;
                        text-decoration: none;
                    }
                    .footer-list {
                        list-style: none;
                        padding: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.75rem;
                    }
                    .footer-link, .legal-link {
                        color: #57534e;
                        text-decoration: none;
                    }
                    .contact-line {
                        display: flex;
                        gap: 0.75rem;
                        color: #57534e;
                    }
                    .hours-line {
                        display: flex;
                        justify-content: space-between;
                        color: #57534e;
                    }
                    .footer-bottom {
                        max-width: 80rem;
                        margin: 0 auto;
                        border-top: 1px solid #e7e5e4;
                        padding-top: 2rem;
                        display: flex;
                        justify-content: space-between;
                        color: #78716c;
                        font-size: 0.875rem;
                    }
                    .legal-links {
                        display: flex;
                        gap: 1.5rem;
                    }
                    @media (max-width: 1024px) {
                        .footer-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                        .footer-bottom {
                            flex-direction: column;
                            gap: 1rem;
                            align-items: center;
                        }
                    }
                "#}
            </style>
        </footer>
    }
}
