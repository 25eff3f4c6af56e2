use yew::prelude::*;
use web_sys::{window, HtmlInputElement, HtmlSelectElement};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use chrono::Datelike;
use gloo_timers::callback::Timeout;
use log::info;

use crate::catalog::{self, FilterState, SortMode, ALL_GENRES, GENRES};
use crate::components::movie_card::MovieCard;
use crate::components::poster::Poster;
use crate::components::score_pill::ScorePill;

const NAV_LINKS: &[(&str, &str)] = &[
    ("\u{1F3AC}", "Home"),
    ("\u{2B50}", "Reviews"),
    ("\u{1F525}", "Lists"),
    ("\u{2728}", "Trailers"),
];

const CALLOUTS: &[(&str, &str, &str)] = &[
    (
        "\u{1F3AC}",
        "Curated Lists",
        "Top 10 Cozy Chills \u{2022} Best Folk Horror \u{2022} Underrated 2000s Slashers",
    ),
    (
        "\u{1F47B}",
        "No-Spoiler Summaries",
        "Get the vibe, not the twist. Toggle spoilers only when you're ready.",
    ),
    (
        "\u{2B50}",
        "Community Ratings",
        "Critic vs. Audience scores to help you pick tonight's scare.",
    ),
];

/// How long the newsletter confirmation stays on screen, in milliseconds.
const SUBSCRIBE_NOTICE_MS: u32 = 4000;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub dark: bool,
    pub on_toggle_dark: Callback<bool>,
}

#[function_component(Nav)]
fn nav(props: &NavProps) -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            let scroll_callback = Closure::wrap(Box::new(move || {
                let scroll_top = document.document_element().unwrap().scroll_top();
                is_scrolled.set(scroll_top > 80);
            }) as Box<dyn FnMut()>);

            window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                .unwrap();

            move || {
                window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .unwrap();
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let on_theme_change = {
        let on_toggle_dark = props.on_toggle_dark.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_toggle_dark.emit(input.checked());
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#" class="nav-logo">
                    <span class="nav-logo-icon">{"\u{1F47B}"}</span>
                    {"NightScreams"}
                    <span class="nav-badge">{"Reviews"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(icon, label)| html! {
                        <a href="#" class="nav-link">
                            <span class="nav-link-icon">{*icon}</span>
                            {*label}
                        </a>
                    }) }
                    <label class="switch" title="Toggle dark mode">
                        <input
                            type="checkbox"
                            checked={props.dark}
                            onchange={on_theme_change}
                        />
                        <span class="slider round"></span>
                    </label>
                    <button class="nav-signin-button">{"Sign In"}</button>
                </div>
            </div>
            <div class="neon-divider"></div>
        </nav>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let query = use_state(String::new);
    let genre = use_state(|| ALL_GENRES.to_string());
    let sort = use_state(SortMode::default);
    let dark = use_state(|| true);
    let spoiler_safe = use_state(|| true);
    let email = use_state(String::new);
    let subscribed = use_state(|| false);

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let on_genre_change = {
        let genre = genre.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            genre.set(select.value());
        })
    };

    let on_sort_change = {
        let sort = sort.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            sort.set(SortMode::from_value(&select.value()));
        })
    };

    let on_toggle_dark = {
        let dark = dark.clone();
        Callback::from(move |value: bool| dark.set(value))
    };

    let on_spoiler_change = {
        let spoiler_safe = spoiler_safe.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            spoiler_safe.set(input.checked());
        })
    };

    // Newsletter signup stays on the client: capture the address, show a
    // confirmation for a few seconds, done.
    let subscribe = {
        let email = email.clone();
        let subscribed = subscribed.clone();
        Callback::from(move |_: ()| {
            if email.trim().is_empty() {
                return;
            }
            info!("Newsletter signup captured");
            subscribed.set(true);
            email.set(String::new());

            let subscribed = subscribed.clone();
            Timeout::new(SUBSCRIBE_NOTICE_MS, move || {
                subscribed.set(false);
            })
            .forget();
        })
    };

    let movies = catalog::sample_catalog();
    let filter = FilterState {
        query: (*query).clone(),
        genre: (*genre).clone(),
        sort: *sort,
    };
    let trending = catalog::derive_trending(&movies);
    let display = catalog::derive_display_list(&movies, &filter);
    let year = chrono::Local::now().year();

    html! {
        <div class={classes!("catalog-page", (!*dark).then(|| "light"))}>
            <div class="neon-fog">
                <div class="fog-orb fog-orb-fuchsia"></div>
                <div class="fog-orb fog-orb-indigo"></div>
                <div class="fog-orb fog-orb-rose"></div>
            </div>

            <Nav dark={*dark} on_toggle_dark={on_toggle_dark} />

            <section class="hero">
                <div class="hero-text">
                    <h1>{"Fear, Rated."}</h1>
                    <p class="hero-subtitle">
                        {"Discover brutally honest horror reviews, spoiler-safe summaries, and curated scare scores. From cult VHS nasties to prestige nightmares."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#reviews" class="hero-cta">{"Browse Reviews \u{203a}"}</a>
                        <a href="#newsletter" class="hero-cta-secondary">{"Write a Review"}</a>
                    </div>

                    <div class="filter-row">
                        <div class="search-box">
                            <span class="search-icon">{"\u{1F50D}"}</span>
                            <input
                                type="text"
                                value={(*query).clone()}
                                placeholder="Search titles, directors, or tags\u{2026}"
                                oninput={on_query_input}
                            />
                        </div>
                        <select class="filter-select" onchange={on_genre_change}>
                            <option value={ALL_GENRES} selected={*genre == ALL_GENRES}>
                                {"All Genres"}
                            </option>
                            { for GENRES.iter().map(|g| html! {
                                <option value={*g} selected={*genre == *g}>{*g}</option>
                            }) }
                        </select>
                        <select class="filter-select" onchange={on_sort_change}>
                            { for [
                                (SortMode::Trending, "Trending"),
                                (SortMode::Critic, "Critic Score"),
                                (SortMode::User, "User Score"),
                                (SortMode::New, "Newest"),
                            ].iter().map(|(mode, label)| html! {
                                <option value={mode.as_value()} selected={*sort == *mode}>
                                    {*label}
                                </option>
                            }) }
                        </select>
                        <div class="spoiler-toggle">
                            <span class="spoiler-toggle-label">{"Spoiler-safe"}</span>
                            <label class="switch">
                                <input
                                    type="checkbox"
                                    checked={*spoiler_safe}
                                    onchange={on_spoiler_change}
                                />
                                <span class="slider round"></span>
                            </label>
                        </div>
                    </div>
                </div>

                <aside class="trending-card">
                    <h2 class="trending-title">{"\u{1F525} Trending This Week"}</h2>
                    <div class="trending-grid">
                        { for trending.iter().map(|movie| html! {
                            <div class="trending-entry">
                                <div class="trending-poster">
                                    <Poster src={movie.poster_url.clone()} alt={movie.title.clone()} />
                                    <div class="trending-pills">
                                        <ScorePill label="Critic" score={movie.critic_score} />
                                        <ScorePill label="User" score={movie.user_score} />
                                    </div>
                                </div>
                                <div class="trending-entry-title">{&movie.title}</div>
                                <div class="trending-entry-meta">
                                    {format!("{} \u{2022} {}", movie.genre, movie.year)}
                                </div>
                            </div>
                        }) }
                    </div>
                </aside>
            </section>

            <section class="reviews-section" id="reviews">
                <div class="section-header">
                    <h2>{"Latest Reviews"}</h2>
                    <a href="#" class="see-all-link">{"See all"}</a>
                </div>
                {
                    if display.is_empty() {
                        html! {
                            <div class="empty-results">
                                <p>{"Nothing in the vault matches that. Loosen the filters and try again."}</p>
                            </div>
                        }
                    } else {
                        html! {
                            <div class="reviews-grid">
                                { for display.iter().map(|movie| html! {
                                    <MovieCard movie={movie.clone()} spoiler_safe={*spoiler_safe} />
                                }) }
                            </div>
                        }
                    }
                }
            </section>

            <section class="callouts-grid">
                { for CALLOUTS.iter().map(|(icon, title, desc)| html! {
                    <div class="callout-card">
                        <h3>
                            <span class="callout-icon">{*icon}</span>
                            {*title}
                        </h3>
                        <p>{*desc}</p>
                    </div>
                }) }
            </section>

            <section class="newsletter-section" id="newsletter">
                <div class="newsletter-card">
                    <div class="newsletter-copy">
                        <h3>{"Join the Midnight Mailing List"}</h3>
                        <p>{"Weekly picks, trailers, and hidden gems\u{2014}no spam, just scares."}</p>
                    </div>
                    <div class="newsletter-form">
                        <input
                            type="email"
                            value={(*email).clone()}
                            placeholder="your@email.com"
                            oninput={{
                                let email = email.clone();
                                Callback::from(move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    email.set(input.value());
                                })
                            }}
                            onkeypress={{
                                let subscribe = subscribe.clone();
                                Callback::from(move |e: KeyboardEvent| {
                                    if e.key() == "Enter" {
                                        subscribe.emit(());
                                    }
                                })
                            }}
                        />
                        <button
                            class="newsletter-button"
                            onclick={{
                                let subscribe = subscribe.clone();
                                Callback::from(move |_| subscribe.emit(()))
                            }}
                        >
                            {"Subscribe"}
                        </button>
                    </div>
                    {
                        if *subscribed {
                            html! {
                                <p class="newsletter-confirmation">
                                    {"You're on the list. Sleep tight."}
                                </p>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </section>

            <footer class="page-footer">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <span>{"\u{1F47B}"}</span>
                            {"NightScreams"}
                        </div>
                        <p>{"A modern horror hub with tasteful gore and zero spoilers by default."}</p>
                    </div>
                    <div class="footer-column">
                        <div class="footer-heading">{"Explore"}</div>
                        <ul>
                            <li><a href="#">{"About"}</a></li>
                            <li><a href="#">{"Advertise"}</a></li>
                            <li><a href="#">{"Contact"}</a></li>
                        </ul>
                    </div>
                    <div class="footer-column">
                        <div class="footer-heading">{"Follow"}</div>
                        <ul>
                            <li><a href="#">{"YouTube"}</a></li>
                            <li><a href="#">{"Instagram"}</a></li>
                            <li><a href="#">{"X (Twitter)"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-copyright">
                    {format!("\u{00a9} {} NightScreams. Stay spooky.", year)}
                </div>
            </footer>

            <style>
                {r#"
                .catalog-page {
                    min-height: 100vh;
                    background: #0a0a0a;
                    color: #e4e4e7;
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                    position: relative;
                    overflow-x: hidden;
                }

                .neon-fog {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100vh;
                    z-index: 0;
                    pointer-events: none;
                }
                .fog-orb {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(90px);
                }
                .fog-orb-fuchsia {
                    top: -8rem;
                    left: 33%;
                    width: 24rem;
                    height: 24rem;
                    background: rgba(217, 70, 239, 0.2);
                }
                .fog-orb-indigo {
                    bottom: 0;
                    right: 25%;
                    width: 28rem;
                    height: 28rem;
                    background: rgba(79, 70, 229, 0.2);
                }
                .fog-orb-rose {
                    top: 8rem;
                    left: -6rem;
                    width: 20rem;
                    height: 20rem;
                    background: rgba(244, 63, 94, 0.1);
                }

                .top-nav {
                    position: sticky;
                    top: 0;
                    z-index: 20;
                    backdrop-filter: blur(10px);
                    background: rgba(10, 10, 10, 0.3);
                    transition: background 0.3s ease;
                }
                .top-nav.scrolled {
                    background: rgba(10, 10, 10, 0.85);
                }
                .nav-content {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0.75rem 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.1rem;
                    font-weight: 900;
                    letter-spacing: 0.05em;
                    color: #fff;
                    text-decoration: none;
                }
                .nav-badge {
                    margin-left: 0.5rem;
                    padding: 0.15rem 0.6rem;
                    border-radius: 999px;
                    background: rgba(217, 70, 239, 0.2);
                    color: #e879f9;
                    font-size: 0.75rem;
                    font-weight: 600;
                }
                .nav-right {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .nav-link {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.4rem;
                    color: #d4d4d8;
                    font-size: 0.9rem;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }
                .nav-link:hover {
                    color: #fff;
                }
                .nav-link-icon {
                    opacity: 0.7;
                }
                .nav-signin-button {
                    padding: 0.5rem 1.2rem;
                    border-radius: 1rem;
                    border: none;
                    background: #27272a;
                    color: #e4e4e7;
                    font-size: 0.9rem;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .nav-signin-button:hover {
                    background: #3f3f46;
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 4px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 4px;
                }
                .burger-menu span {
                    width: 22px;
                    height: 2px;
                    background: #e4e4e7;
                }
                .neon-divider {
                    height: 1px;
                    width: 100%;
                    background: linear-gradient(to right, transparent, rgba(217, 70, 239, 0.4), transparent);
                }

                .hero {
                    position: relative;
                    z-index: 1;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 3rem 1rem 2.5rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                    align-items: center;
                }
                .hero-text h1 {
                    font-size: 3.75rem;
                    font-weight: 800;
                    letter-spacing: -0.02em;
                    margin: 0;
                    background: linear-gradient(45deg, #fff, #e879f9);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    margin-top: 1rem;
                    max-width: 36rem;
                    color: #d4d4d8;
                    font-size: 1.1rem;
                    line-height: 1.6;
                }
                .hero-cta-group {
                    margin-top: 1.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    gap: 0.75rem;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 0.7rem 1.4rem;
                    border-radius: 1rem;
                    background: #c026d3;
                    color: #fff;
                    font-weight: 600;
                    text-decoration: none;
                    transition: background 0.2s ease, transform 0.2s ease;
                }
                .hero-cta:hover {
                    background: #d946ef;
                    transform: translateY(-1px);
                }
                .hero-cta-secondary {
                    display: inline-block;
                    padding: 0.7rem 1.4rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(217, 70, 239, 0.4);
                    background: rgba(0, 0, 0, 0.2);
                    color: #e4e4e7;
                    text-decoration: none;
                    transition: background 0.2s ease;
                }
                .hero-cta-secondary:hover {
                    background: rgba(0, 0, 0, 0.4);
                }

                .filter-row {
                    margin-top: 2rem;
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr auto;
                    gap: 0.75rem;
                }
                .search-box {
                    position: relative;
                }
                .search-icon {
                    position: absolute;
                    left: 0.75rem;
                    top: 50%;
                    transform: translateY(-50%);
                    opacity: 0.6;
                    font-size: 0.85rem;
                    pointer-events: none;
                }
                .search-box input {
                    width: 100%;
                    box-sizing: border-box;
                    padding: 0.65rem 0.75rem 0.65rem 2.3rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(217, 70, 239, 0.3);
                    background: rgba(24, 24, 27, 0.8);
                    color: #e4e4e7;
                    font-size: 0.95rem;
                }
                .search-box input:focus {
                    outline: none;
                    border-color: rgba(217, 70, 239, 0.7);
                }
                .filter-select {
                    padding: 0.65rem 0.75rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(217, 70, 239, 0.3);
                    background: rgba(24, 24, 27, 0.8);
                    color: #e4e4e7;
                    font-size: 0.95rem;
                    cursor: pointer;
                }
                .spoiler-toggle {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.6rem;
                    padding: 0.5rem 0.9rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(217, 70, 239, 0.3);
                    background: rgba(0, 0, 0, 0.3);
                }
                .spoiler-toggle-label {
                    font-size: 0.85rem;
                    white-space: nowrap;
                }

                .switch {
                    position: relative;
                    display: inline-block;
                    width: 40px;
                    height: 22px;
                    flex-shrink: 0;
                }
                .switch input {
                    opacity: 0;
                    width: 0;
                    height: 0;
                }
                .slider {
                    position: absolute;
                    cursor: pointer;
                    top: 0;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    background-color: #3f3f46;
                    transition: 0.3s;
                }
                .slider:before {
                    position: absolute;
                    content: "";
                    height: 16px;
                    width: 16px;
                    left: 3px;
                    bottom: 3px;
                    background-color: #fafafa;
                    transition: 0.3s;
                }
                input:checked + .slider {
                    background-color: #c026d3;
                }
                input:checked + .slider:before {
                    transform: translateX(18px);
                }
                .slider.round {
                    border-radius: 22px;
                }
                .slider.round:before {
                    border-radius: 50%;
                }

                .trending-card {
                    position: relative;
                    border-radius: 1.5rem;
                    border: 1px solid rgba(217, 70, 239, 0.3);
                    background: rgba(24, 24, 27, 0.6);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.6);
                    padding: 1.5rem;
                }
                .trending-title {
                    margin: 0 0 1rem;
                    font-size: 1.25rem;
                }
                .trending-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1rem;
                }
                .trending-poster {
                    position: relative;
                }
                .trending-pills {
                    position: absolute;
                    bottom: 0.5rem;
                    left: 0.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.35rem;
                    z-index: 1;
                }
                .trending-entry-title {
                    margin-top: 0.5rem;
                    font-size: 0.9rem;
                    font-weight: 600;
                }
                .trending-entry-meta {
                    font-size: 0.75rem;
                    color: #a1a1aa;
                }

                .poster-frame {
                    position: relative;
                    aspect-ratio: 3 / 4;
                    overflow: hidden;
                    border-radius: 0.75rem;
                }
                .poster-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.5s ease;
                }
                .review-card:hover .poster-frame img,
                .trending-entry:hover .poster-frame img {
                    transform: scale(1.05);
                }
                .poster-overlay {
                    position: absolute;
                    top: 0;
                    left: 0;
                    right: 0;
                    bottom: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.1) 50%, transparent);
                    pointer-events: none;
                }

                .score-pill {
                    display: inline-block;
                    padding: 0.2rem 0.55rem;
                    border-radius: 999px;
                    border: 1px solid;
                    font-size: 0.7rem;
                    font-weight: 500;
                    white-space: nowrap;
                }
                .score-pill-high {
                    background: rgba(34, 197, 94, 0.2);
                    color: #86efac;
                    border-color: rgba(22, 163, 74, 0.4);
                }
                .score-pill-mid {
                    background: rgba(234, 179, 8, 0.2);
                    color: #fde047;
                    border-color: rgba(202, 138, 4, 0.4);
                }
                .score-pill-low {
                    background: rgba(239, 68, 68, 0.2);
                    color: #fecaca;
                    border-color: rgba(220, 38, 38, 0.4);
                }

                .reviews-section {
                    position: relative;
                    z-index: 1;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1rem 4rem;
                }
                .section-header {
                    display: flex;
                    align-items: flex-end;
                    justify-content: space-between;
                    margin-bottom: 1.5rem;
                }
                .section-header h2 {
                    margin: 0;
                    font-size: 1.6rem;
                    letter-spacing: -0.01em;
                }
                .see-all-link {
                    color: #e879f9;
                    font-size: 0.9rem;
                    text-decoration: none;
                }
                .see-all-link:hover {
                    color: #f0abfc;
                }
                .reviews-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }
                .review-card {
                    border-radius: 1.5rem;
                    border: 1px solid rgba(217, 70, 239, 0.2);
                    background: rgba(24, 24, 27, 0.6);
                    overflow: hidden;
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }
                .review-card:hover {
                    transform: translateY(-4px);
                    border-color: rgba(217, 70, 239, 0.4);
                }
                .card-poster {
                    position: relative;
                }
                .card-pills {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    display: flex;
                    gap: 0.35rem;
                    z-index: 1;
                }
                .card-body {
                    padding: 1rem;
                }
                .card-title-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 0.5rem;
                }
                .card-title {
                    margin: 0;
                    font-size: 1rem;
                    font-weight: 700;
                    line-height: 1.3;
                }
                .card-meta {
                    margin: 0.15rem 0 0;
                    font-size: 0.75rem;
                    color: #a1a1aa;
                }
                .card-read-link {
                    color: #e879f9;
                    font-size: 0.85rem;
                    text-decoration: none;
                    white-space: nowrap;
                }
                .card-read-link:hover {
                    color: #f0abfc;
                }
                .card-blurb {
                    margin: 0.75rem 0;
                    font-size: 0.9rem;
                    color: #d4d4d8;
                    line-height: 1.5;
                    display: -webkit-box;
                    -webkit-line-clamp: 3;
                    -webkit-box-orient: vertical;
                    overflow: hidden;
                }
                .card-blurb.spoilers-open {
                    display: block;
                    -webkit-line-clamp: unset;
                    overflow: visible;
                }
                .card-tags {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 0.4rem;
                }
                .tag-badge {
                    padding: 0.15rem 0.55rem;
                    border-radius: 999px;
                    border: 1px solid rgba(217, 70, 239, 0.3);
                    color: #d4d4d8;
                    font-size: 0.7rem;
                }
                .empty-results {
                    padding: 3rem 1rem;
                    text-align: center;
                    border: 1px dashed rgba(217, 70, 239, 0.3);
                    border-radius: 1.5rem;
                    color: #a1a1aa;
                }

                .callouts-grid {
                    position: relative;
                    z-index: 1;
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 0 1rem 4rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                }
                .callout-card {
                    border-radius: 1.5rem;
                    border: 1px solid rgba(217, 70, 239, 0.2);
                    background: rgba(24, 24, 27, 0.6);
                    padding: 1.5rem;
                }
                .callout-card h3 {
                    margin: 0 0 0.75rem;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.1rem;
                }
                .callout-card p {
                    margin: 0;
                    font-size: 0.9rem;
                    color: #d4d4d8;
                    line-height: 1.5;
                }

                .newsletter-section {
                    position: relative;
                    z-index: 1;
                    max-width: 768px;
                    margin: 0 auto;
                    padding: 0 1rem 5rem;
                }
                .newsletter-card {
                    border-radius: 1.5rem;
                    border: 1px solid rgba(217, 70, 239, 0.3);
                    background: linear-gradient(to bottom right, rgba(24, 24, 27, 0.8), rgba(24, 24, 27, 0.4));
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .newsletter-copy h3 {
                    margin: 0;
                    font-size: 1.25rem;
                }
                .newsletter-copy p {
                    margin: 0.25rem 0 0;
                    font-size: 0.9rem;
                    color: #d4d4d8;
                }
                .newsletter-form {
                    display: flex;
                    gap: 0.5rem;
                    width: 100%;
                    max-width: 28rem;
                }
                .newsletter-form input {
                    flex: 1;
                    padding: 0.65rem 0.9rem;
                    border-radius: 0.75rem;
                    border: 1px solid rgba(217, 70, 239, 0.3);
                    background: rgba(10, 10, 10, 0.6);
                    color: #e4e4e7;
                    font-size: 0.95rem;
                }
                .newsletter-form input:focus {
                    outline: none;
                    border-color: rgba(217, 70, 239, 0.7);
                }
                .newsletter-button {
                    padding: 0.65rem 1.3rem;
                    border-radius: 1rem;
                    border: none;
                    background: #c026d3;
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .newsletter-button:hover {
                    background: #d946ef;
                }
                .newsletter-confirmation {
                    margin: 0;
                    color: #86efac;
                    font-size: 0.9rem;
                }

                .page-footer {
                    position: relative;
                    z-index: 1;
                    border-top: 1px solid rgba(217, 70, 239, 0.2);
                    background: rgba(0, 0, 0, 0.3);
                }
                .footer-grid {
                    max-width: 1280px;
                    margin: 0 auto;
                    padding: 2.5rem 1rem;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .footer-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-weight: 900;
                }
                .footer-brand p {
                    margin-top: 0.75rem;
                    font-size: 0.9rem;
                    color: #a1a1aa;
                }
                .footer-heading {
                    font-weight: 600;
                }
                .footer-column ul {
                    margin: 0.5rem 0 0;
                    padding: 0;
                    list-style: none;
                }
                .footer-column li {
                    margin-top: 0.25rem;
                }
                .footer-column a {
                    color: #d4d4d8;
                    font-size: 0.9rem;
                    text-decoration: none;
                }
                .footer-column a:hover {
                    color: #fff;
                }
                .footer-copyright {
                    border-top: 1px solid rgba(217, 70, 239, 0.1);
                    padding: 1.5rem 1rem;
                    text-align: center;
                    font-size: 0.75rem;
                    color: #71717a;
                }

                .catalog-page.light {
                    background: #f7f4f8;
                    color: #27272a;
                }
                .catalog-page.light .top-nav {
                    background: rgba(247, 244, 248, 0.6);
                }
                .catalog-page.light .top-nav.scrolled {
                    background: rgba(247, 244, 248, 0.92);
                }
                .catalog-page.light .nav-logo,
                .catalog-page.light .section-header h2,
                .catalog-page.light .trending-title {
                    color: #18181b;
                }
                .catalog-page.light .nav-link,
                .catalog-page.light .hero-subtitle,
                .catalog-page.light .card-blurb,
                .catalog-page.light .callout-card p,
                .catalog-page.light .newsletter-copy p,
                .catalog-page.light .footer-column a,
                .catalog-page.light .tag-badge {
                    color: #52525b;
                }
                .catalog-page.light .hero-text h1 {
                    background: linear-gradient(45deg, #18181b, #a21caf);
                    -webkit-background-clip: text;
                }
                .catalog-page.light .review-card,
                .catalog-page.light .callout-card,
                .catalog-page.light .trending-card {
                    background: rgba(255, 255, 255, 0.8);
                }
                .catalog-page.light .newsletter-card {
                    background: linear-gradient(to bottom right, rgba(255, 255, 255, 0.95), rgba(255, 255, 255, 0.7));
                }
                .catalog-page.light .search-box input,
                .catalog-page.light .filter-select,
                .catalog-page.light .newsletter-form input {
                    background: rgba(255, 255, 255, 0.9);
                    color: #27272a;
                }
                .catalog-page.light .card-title,
                .catalog-page.light .trending-entry-title,
                .catalog-page.light .newsletter-copy h3,
                .catalog-page.light .callout-card h3,
                .catalog-page.light .footer-logo,
                .catalog-page.light .footer-heading {
                    color: #18181b;
                }
                .catalog-page.light .nav-signin-button {
                    background: #e4e4e7;
                    color: #27272a;
                }
                .catalog-page.light .burger-menu span {
                    background: #27272a;
                }
                .catalog-page.light .fog-orb {
                    opacity: 0.5;
                }

                @media (max-width: 968px) {
                    .hero {
                        grid-template-columns: 1fr;
                        padding-top: 2rem;
                    }
                    .hero-text h1 {
                        font-size: 2.75rem;
                    }
                    .reviews-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .callouts-grid {
                        grid-template-columns: 1fr;
                    }
                    .filter-row {
                        grid-template-columns: 1fr 1fr;
                    }
                    .search-box {
                        grid-column: span 2;
                    }
                    .spoiler-toggle {
                        grid-column: span 2;
                        justify-content: space-between;
                    }
                }

                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-right {
                        display: none;
                    }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        padding: 1rem;
                        gap: 1rem;
                        background: rgba(10, 10, 10, 0.95);
                        border-bottom: 1px solid rgba(217, 70, 239, 0.2);
                    }
                    .catalog-page.light .nav-right.mobile-menu-open {
                        background: rgba(247, 244, 248, 0.98);
                    }
                }

                @media (max-width: 480px) {
                    .reviews-grid {
                        grid-template-columns: 1fr;
                    }
                    .trending-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .newsletter-form {
                        flex-direction: column;
                    }
                    .footer-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
