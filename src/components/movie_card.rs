use yew::prelude::*;

use crate::catalog::MovieRecord;
use crate::components::poster::Poster;
use crate::components::score_pill::ScorePill;

#[derive(Properties, PartialEq)]
pub struct MovieCardProps {
    pub movie: MovieRecord,
    pub spoiler_safe: bool,
}

/// One review card in the "Latest Reviews" grid.
#[function_component(MovieCard)]
pub fn movie_card(props: &MovieCardProps) -> Html {
    let movie = &props.movie;

    let blurb_class = if props.spoiler_safe {
        "card-blurb"
    } else {
        "card-blurb spoilers-open"
    };

    html! {
        <article class="review-card">
            <div class="card-poster">
                <Poster src={movie.poster_url.clone()} alt={movie.title.clone()} />
                <div class="card-pills">
                    <ScorePill label="Critic" score={movie.critic_score} />
                    <ScorePill label="User" score={movie.user_score} />
                </div>
            </div>
            <div class="card-body">
                <div class="card-title-row">
                    <div>
                        <h3 class="card-title">{&movie.title}</h3>
                        <p class="card-meta">{format!("{} \u{2022} {}", movie.genre, movie.year)}</p>
                    </div>
                    <a href="#" class="card-read-link">{"Read \u{203a}"}</a>
                </div>
                <p class={blurb_class}>{&movie.blurb}</p>
                <div class="card-tags">
                    { for movie.tags.iter().map(|tag| html! {
                        <span class="tag-badge">{tag}</span>
                    }) }
                </div>
            </div>
        </article>
    }
}
