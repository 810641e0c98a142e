use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::components::particles::{BurstAction, BurstState, ParticleBurst, FRAME_MS};
use crate::content::MANIFESTO;
use crate::reveal::stagger_style;
use crate::viewport::use_reveal;

#[function_component(Manifesto)]
pub fn manifesto() -> Html {
    let (refs, revealed) = use_reveal(MANIFESTO.len());
    let burst = use_reducer(BurstState::default);

    // Frame timer lives only while a burst is running; switching cards re-arms it.
    {
        let dispatcher = burst.dispatcher();
        use_effect_with_deps(
            move |card: &Option<usize>| {
                let ticker = card.map(|card| {
                    log::trace!("particle burst on card {}", card);
                    Interval::new(FRAME_MS, move || dispatcher.dispatch(BurstAction::Tick))
                });
                move || drop(ticker)
            },
            burst.active_card(),
        );
    }

    html! {
        <section id="manifesto" class="manifesto">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"My Manifesto"}</h2>
                    <p>
                        {"A comprehensive plan to transform our student experience and create lasting positive change at CMU Africa."}
                    </p>
                </div>

                <div class="manifesto-grid">
                    { for MANIFESTO.iter().zip(refs.iter()).enumerate().map(|(index, (item, node))| {
                        let onmouseenter = {
                            let dispatcher = burst.dispatcher();
                            Callback::from(move |_: MouseEvent| dispatcher.dispatch(BurstAction::Start(index)))
                        };
                        html! {
                            <article
                                key={item.title}
                                ref={node.clone()}
                                class={classes!("manifesto-card", revealed.card_class(index))}
                                style={stagger_style(index)}
                                data-reveal-index={index.to_string()}
                                {onmouseenter}
                            >
                                {
                                    match burst.on_card(index) {
                                        Some(running) => html! { <ParticleBurst burst={running} /> },
                                        None => html! {},
                                    }
                                }
                                <div class={classes!("card-icon", item.icon.tone())}>{ item.icon.glyph() }</div>
                                <h3>{ item.title }</h3>
                                <p>{ item.description }</p>
                            </article>
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                    .manifesto {
                        padding: 5rem 0;
                        background: #f9fafb;
                    }

                    .manifesto-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1.5rem;
                        max-width: 80rem;
                        margin: 0 auto;
                    }

                    .manifesto-card {
                        position: relative;
                        overflow: hidden;
                        text-align: center;
                        background: #fff;
                        border-radius: 0.5rem;
                        border-top: 4px solid var(--carnegie-red);
                        padding: 1.5rem;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out, box-shadow 0.3s;
                    }

                    .manifesto-card.revealed:hover {
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                        transform: translateY(-0.5rem);
                        transition-delay: 0ms !important;
                    }

                    .card-icon {
                        font-size: 2.25rem;
                        margin-bottom: 1rem;
                    }

                    .manifesto-card h3 {
                        font-size: 1.25rem;
                        margin-bottom: 0.75rem;
                    }

                    .manifesto-card p {
                        color: #4b5563;
                    }

                    .particle-layer {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                    }

                    .particle {
                        position: absolute;
                        border-radius: 9999px;
                        background: var(--gold-thread);
                        box-shadow: 0 0 6px var(--carnegie-red);
                    }

                    @media (max-width: 1024px) {
                        .manifesto-grid {
                            grid-template-columns: repeat(2, 1fr);
                        }
                    }

                    @media (max-width: 768px) {
                        .manifesto-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
