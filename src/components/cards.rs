use yew::prelude::*;

use crate::content::{Service, Testimonial};
use crate::icons::Icon;

pub const MAX_STARS: usize = 5;

/// Stars to draw for a rating, clamped to `0..=MAX_STARS`.
pub fn star_count(rating: i64) -> usize {
    usize::try_from(rating.max(0)).map_or(MAX_STARS, |stars| stars.min(MAX_STARS))
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    html! {
        <div class="service-card">
            <div class="service-image">
                <img src={service.image.clone()} alt={service.title.clone()} loading="lazy" />
                <div class="service-image-shade"></div>
                <div class="service-icon">{ service.icon.render("service-glyph") }</div>
            </div>
            <h3>{ service.title.clone() }</h3>
            <p>{ service.description.clone() }</p>
            <span class="learn-more">{"Learn More "}{ Icon::ChevronRight.render("chevron") }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TestimonialCardProps {
    pub testimonial: Testimonial,
}

#[function_component(TestimonialCard)]
pub fn testimonial_card(props: &TestimonialCardProps) -> Html {
    let testimonial = &props.testimonial;
    let initial: String = testimonial.name.chars().take(1).collect();

    html! {
        <div class="testimonial-card">
            <div class="stars">
                { for (0..star_count(testimonial.rating)).map(|_| Icon::Star.render("star")) }
            </div>
            <p class="testimonial-text">{ format!("\"{}\"", testimonial.text) }</p>
            <div class="testimonial-author">
                <div class="avatar">{ initial }</div>
                <div>
                    <p class="author-name">{ testimonial.name.clone() }</p>
                    <p class="author-note">{"Verified Client"}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratings_in_range_render_as_is() {
        assert_eq!(star_count(5), 5);
        assert_eq!(star_count(3), 3);
        assert_eq!(star_count(0), 0);
    }

    #[test]
    fn ratings_out_of_range_are_clamped() {
        assert_eq!(star_count(7), 5);
        assert_eq!(star_count(-1), 0);
        assert_eq!(star_count(i64::MAX), 5);
        assert_eq!(star_count(i64::MIN), 0);
    }
}
