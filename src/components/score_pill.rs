use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ScorePillProps {
    pub label: String,
    pub score: u8,
}

/// Small rounded badge showing a critic or user score, colored by how
/// favorable the score is.
#[function_component(ScorePill)]
pub fn score_pill(props: &ScorePillProps) -> Html {
    let tone = if props.score >= 80 {
        "score-pill-high"
    } else if props.score >= 60 {
        "score-pill-mid"
    } else {
        "score-pill-low"
    };

    html! {
        <span class={classes!("score-pill", tone)}>
            {format!("{} {}", props.label, props.score)}
        </span>
    }
}
