use std::rc::Rc;

use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config::AnimationConfig;
use crate::motion::{cascade, motion_style, BrowserViewport, Preset, RevealController};

/// Shared by every revealed block on the page.
#[derive(Clone, PartialEq)]
pub struct RevealContext {
    pub controller: RevealController<BrowserViewport>,
    pub config: Rc<AnimationConfig>,
}

#[hook]
pub fn use_animation_config() -> Rc<AnimationConfig> {
    use_context::<RevealContext>()
        .map(|ctx| ctx.config)
        .unwrap_or_default()
}

/// Registers the node with the page's reveal controller for as long as the
/// component is mounted. Returns whether the block has been revealed.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);
    let ctx = use_context::<RevealContext>();

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node| {
                let registration = match (ctx, node.cast::<Element>()) {
                    (Some(ctx), Some(element)) => {
                        let setter = revealed.setter();
                        let id = ctx.controller.register(&element, move || setter.set(true));
                        Some((ctx.controller, id))
                    }
                    _ => {
                        warn!("reveal block mounted without controller or element, showing it");
                        revealed.set(true);
                        None
                    }
                };
                move || {
                    if let Some((controller, id)) = registration {
                        controller.unregister(id);
                    }
                }
            },
            node,
        );
    }

    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub preset: Preset,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let config = use_animation_config();

    html! {
        <div
            ref={node}
            id={props.id.clone()}
            class={classes!("reveal", props.class.clone(), revealed.then(|| "revealed"))}
            style={motion_style(props.preset, &config, revealed, 0)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StaggerGroupProps {
    pub preset: Preset,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub item_class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Reveals its children in order once the group itself enters the viewport,
/// child `i` starting `i` stagger units after the first.
#[function_component(StaggerGroup)]
pub fn stagger_group(props: &StaggerGroupProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());
    let config = use_animation_config();
    let children: Vec<Html> = props.children.iter().collect();

    html! {
        <div ref={node} class={classes!("stagger-group", props.class.clone())}>
            {
                for cascade(&children[..], config.stagger_unit_ms).map(|(index, delay, child)| {
                    html! {
                        <div
                            class={classes!("stagger-item", props.item_class.clone(), revealed.then(|| "revealed"))}
                            data-stagger-index={index.to_string()}
                            style={motion_style(props.preset, &config, revealed, delay)}
                        >
                            { child.clone() }
                        </div>
                    }
                })
            }
        </div>
    }
}
