use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PosterProps {
    pub src: String,
    pub alt: String,
}

/// Poster image in a fixed 3:4 frame with a darkening gradient so the score
/// pills stay readable on bright artwork.
#[function_component(Poster)]
pub fn poster(props: &PosterProps) -> Html {
    html! {
        <div class="poster-frame">
            <img src={props.src.clone()} alt={props.alt.clone()} loading="lazy" />
            <div class="poster-overlay"></div>
        </div>
    }
}
