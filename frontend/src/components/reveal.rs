use yew::prelude::*;

/// How a block moves into place the first time its section is seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    #[default]
    Rise,
    FromLeft,
    FromRight,
    Fade,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Motion::Rise => "reveal-rise",
            Motion::FromLeft => "reveal-left",
            Motion::FromRight => "reveal-right",
            Motion::Fade => "reveal-fade",
        }
    }
}

/// Delay for the `index`-th card of a staggered grid.
pub fn stagger_delay(index: usize) -> u32 {
    200 + 100 * index as u32
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub revealed: bool,
    #[prop_or_default]
    pub motion: Motion,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            class={classes!(
                "reveal",
                props.motion.class(),
                props.revealed.then_some("revealed"),
                props.class.clone()
            )}
            style={style}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_steps_by_a_tenth_of_a_second() {
        let delays: Vec<u32> = (0..6).map(stagger_delay).collect();
        assert_eq!(delays, vec![200, 300, 400, 500, 600, 700]);
    }

    #[test]
    fn motions_have_distinct_classes() {
        let classes = [Motion::Rise, Motion::FromLeft, Motion::FromRight, Motion::Fade]
            .map(Motion::class);
        for (i, a) in classes.iter().enumerate() {
            for b in &classes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
