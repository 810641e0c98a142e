use chrono::{DateTime, Local};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;
use crate::time_left::TimeLeft;
use crate::viewport::{use_in_view, Trigger};

const TICK_MS: u32 = 1_000;

/// The sticky bar is the inverse of the hero buttons: shown exactly when
/// they have scrolled out of view.
pub fn sticky_bar_class(cta_in_view: bool) -> &'static str {
    if cta_in_view {
        "sticky-cta"
    } else {
        "sticky-cta visible"
    }
}

fn time_left_now(target: Option<DateTime<Local>>) -> TimeLeft {
    target
        .map(|target| TimeLeft::between(&target, &Local::now()))
        .unwrap_or_default()
}

#[hook]
fn use_time_left(target: Option<DateTime<Local>>) -> TimeLeft {
    let time_left = use_state_eq(move || time_left_now(target));

    {
        let setter = time_left.setter();
        use_effect_with_deps(
            move |target| {
                let interval = target.map(|target| {
                    log::debug!("countdown armed for {}", target);
                    Interval::new(TICK_MS, move || {
                        setter.set(TimeLeft::between(&target, &Local::now()));
                    })
                });

                move || {
                    if interval.is_some() {
                        log::debug!("countdown disarmed");
                    }
                    drop(interval);
                }
            },
            target,
        );
    }

    *time_left
}

#[function_component(Countdown)]
pub fn countdown() -> Html {
    let target = use_memo(
        |_| match config::voting_day() {
            Ok(day) => Some(day),
            Err(err) => {
                log::error!("countdown disabled: {}", err);
                None
            }
        },
        (),
    );
    let time_left = use_time_left(*target);

    let cta_ref = use_node_ref();
    // assume the buttons are on screen until the observer says otherwise
    let cta_in_view = use_in_view(cta_ref.clone(), Trigger::Always, true);

    let tiles = [
        ("Days", time_left.days),
        ("Hours", time_left.hours),
        ("Minutes", time_left.minutes),
        ("Seconds", time_left.seconds),
    ];

    html! {
        <section class="countdown wave-bottom">
            <div class="countdown-background">
                <img src={config::FLYER_IMAGE} alt="Vote Sam Campaign" />
                <div class="countdown-overlay"></div>
            </div>

            <div class="countdown-content">
                <div class="countdown-header">
                    <div class="voting-day-badge">
                        {"⚡ VOTING DAY: NOVEMBER 14th, 2025 ⚡"}
                    </div>
                    <h1>{"Vote Sam for Guild President"}</h1>
                    <p class="countdown-tagline">
                        {"Leadership. Vision. Action. Building a better CMU Africa together."}
                    </p>
                </div>

                <div class={classes!("countdown-panel", time_left.is_over().then(|| "is-over"))}>
                    <div class="countdown-grid">
                        { for tiles.iter().map(|&(label, value)| html! {
                            <div class="countdown-tile" key={label}>
                                <div class="countdown-value">{ value }</div>
                                <div class="countdown-label">{ label }</div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="countdown-cta" ref={cta_ref}>
                    <a href="#manifesto" class="cta-primary">{"Read the Manifesto"}</a>
                    <a href="#why-sam" class="cta-secondary">{"Why Vote Sam?"}</a>
                </div>
            </div>

            <div class={sticky_bar_class(cta_in_view)} aria-hidden={cta_in_view.to_string()}>
                <span class="sticky-cta-date">{"Vote Sam · Nov 14"}</span>
                <a href="#manifesto" class="cta-primary">{"Manifesto"}</a>
                <a href="#why-sam" class="cta-secondary">{"Why Sam?"}</a>
            </div>

            <style>
                {r#"
                    .countdown {
                        min-height: 100vh;
                        padding: 3rem 0;
                        color: #fff;
                        position: relative;
                        overflow: hidden;
                        display: flex;
                        align-items: center;
                    }

                    .countdown-background {
                        position: absolute;
                        inset: 0;
                    }

                    .countdown-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        object-position: top;
                    }

                    .countdown-overlay {
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(0, 0, 0, 0.7), rgba(0, 0, 0, 0.6), rgba(0, 0, 0, 0.8));
                    }

                    .countdown-content {
                        position: relative;
                        z-index: 10;
                        width: 100%;
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }

                    .countdown-header {
                        text-align: center;
                        margin-bottom: 3rem;
                    }

                    .voting-day-badge {
                        display: inline-block;
                        background: var(--gold-thread);
                        color: var(--weaver-blue);
                        padding: 0.5rem 1.5rem;
                        border-radius: 9999px;
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }

                    .countdown-header h1 {
                        font-size: clamp(2.25rem, 6vw, 4.5rem);
                        font-weight: 800;
                        margin-bottom: 1rem;
                        text-shadow: 0 10px 25px rgba(0, 0, 0, 0.5);
                    }

                    .countdown-tagline {
                        font-size: clamp(1.25rem, 2.5vw, 1.5rem);
                        font-weight: 600;
                        opacity: 0.9;
                    }

                    .countdown-panel {
                        background: rgba(196, 18, 48, 0.3);
                        backdrop-filter: blur(16px);
                        border: 2px solid var(--gold-thread);
                        border-radius: 1rem;
                        padding: 2rem;
                        transition: transform 0.3s;
                    }

                    .countdown-panel.is-over .countdown-value {
                        animation: none;
                    }

                    .countdown-panel:hover {
                        transform: scale(1.05);
                    }

                    .countdown-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 1.5rem;
                    }

                    .countdown-tile {
                        text-align: center;
                        background: rgba(255, 255, 255, 0.1);
                        border-radius: 0.75rem;
                        padding: 1.5rem;
                        transition: background-color 0.2s;
                    }

                    .countdown-tile:hover {
                        background: rgba(255, 255, 255, 0.2);
                    }

                    .countdown-value {
                        color: var(--gold-thread);
                        font-size: 4.5rem;
                        font-weight: 800;
                        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
                    }

                    .countdown-label {
                        font-size: 1.25rem;
                        font-weight: 700;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }

                    .countdown-cta {
                        display: flex;
                        gap: 1rem;
                        justify-content: center;
                        align-items: center;
                        margin-top: 2.5rem;
                    }

                    .cta-primary,
                    .cta-secondary {
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-weight: 700;
                        font-size: 1.125rem;
                        text-decoration: none;
                        transition: all 0.2s;
                    }

                    .cta-primary {
                        background: var(--carnegie-red);
                        color: #fff;
                    }

                    .cta-primary:hover {
                        background: var(--skibo-red);
                        transform: scale(1.05);
                    }

                    .cta-secondary {
                        border: 2px solid var(--gold-thread);
                        color: var(--gold-thread);
                    }

                    .cta-secondary:hover {
                        background: var(--gold-thread);
                        color: var(--weaver-blue);
                        transform: scale(1.05);
                    }

                    .sticky-cta {
                        display: none;
                    }

                    @media (max-width: 768px) {
                        .countdown-grid {
                            grid-template-columns: repeat(2, 1fr);
                            gap: 1rem;
                        }

                        .countdown-value {
                            font-size: 3.75rem;
                        }

                        .countdown-cta {
                            flex-direction: column;
                        }

                        .sticky-cta {
                            display: flex;
                            position: fixed;
                            left: 0;
                            right: 0;
                            bottom: 0;
                            z-index: 50;
                            gap: 0.75rem;
                            align-items: center;
                            justify-content: center;
                            padding: 0.75rem 1rem;
                            background: rgba(4, 54, 115, 0.95);
                            transform: translateY(100%);
                            transition: transform 0.3s ease-out;
                        }

                        .sticky-cta.visible {
                            transform: translateY(0);
                        }

                        .sticky-cta .cta-primary,
                        .sticky-cta .cta-secondary {
                            padding: 0.5rem 1rem;
                            font-size: 0.95rem;
                        }

                        .sticky-cta-date {
                            color: var(--gold-thread);
                            font-weight: 700;
                        }
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sticky_bar_is_the_negation_of_cta_visibility() {
        for cta_in_view in [true, false] {
            let shown = sticky_bar_class(cta_in_view).split_whitespace().any(|c| c == "visible");
            assert_eq!(shown, !cta_in_view);
        }
    }

    #[test]
    fn missing_voting_day_counts_as_over() {
        assert!(time_left_now(None).is_over());
    }
}
