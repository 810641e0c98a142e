use yew::prelude::*;

use crate::content::QUALIFICATIONS;
use crate::reveal::stagger_style;
use crate::viewport::{use_in_view, use_reveal, Trigger};

#[function_component(WhyVoteSam)]
pub fn why_vote_sam() -> Html {
    let (refs, revealed) = use_reveal(QUALIFICATIONS.len());
    let closing_ref = use_node_ref();
    let closing_seen = use_in_view(closing_ref.clone(), Trigger::Once, false);

    html! {
        <section id="why-sam" class="why-vote">
            <div class="section-inner">
                <div class="section-heading">
                    <h2>{"Why Vote Sam?"}</h2>
                    <p>
                        {"Experience, dedication, and a genuine commitment to making CMU Africa the best it can be for every student."}
                    </p>
                </div>

                <div class="qualification-grid">
                    { for QUALIFICATIONS.iter().zip(refs.iter()).enumerate().map(|(index, (item, node))| html! {
                        <article
                            key={item.title}
                            ref={node.clone()}
                            class={classes!("qualification-card", revealed.card_class(index))}
                            style={stagger_style(index)}
                            data-reveal-index={index.to_string()}
                        >
                            <div class={classes!("card-icon", "qualification-icon", item.icon.tone())}>{ item.icon.glyph() }</div>
                            <div>
                                <h3>{ item.title }</h3>
                                <p>{ item.description }</p>
                            </div>
                        </article>
                    }) }
                </div>

                <div ref={closing_ref} class={classes!("closing-cta", closing_seen.then(|| "scaled-in"))}>
                    <h3>{"Ready to Make a Difference Together?"}</h3>
                    <p>
                        {"Your vote is your voice. Let's build a stronger, more vibrant CMU Africa community together."}
                    </p>
                    <blockquote>
                        {"\"Leadership is not about being in charge. It's about taking care of those in your charge.\""}
                    </blockquote>
                </div>
            </div>

            <style>
                {r#"
                    .why-vote {
                        padding: 5rem 0;
                        background: #fff;
                    }

                    .qualification-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 2rem;
                        max-width: 64rem;
                        margin: 0 auto 4rem;
                    }

                    .qualification-card {
                        display: flex;
                        align-items: flex-start;
                        gap: 1rem;
                        background: #fff;
                        border-radius: 0.5rem;
                        border-left: 4px solid var(--carnegie-red);
                        padding: 1.5rem;
                        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out, box-shadow 0.3s;
                    }

                    .qualification-card.revealed:hover {
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }

                    .qualification-icon {
                        flex-shrink: 0;
                        font-size: 3rem;
                        margin-bottom: 0;
                    }

                    .qualification-card h3 {
                        font-size: 1.25rem;
                        margin-bottom: 0.5rem;
                    }

                    .qualification-card p {
                        color: #4b5563;
                        margin: 0;
                    }

                    .closing-cta {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 3rem;
                        border-radius: 1rem;
                        color: #fff;
                        text-align: center;
                        background: linear-gradient(to right, var(--carnegie-red), var(--blue-thread));
                        opacity: 0;
                        transform: scale(0.9);
                        transition: opacity 0.7s ease-out, transform 0.7s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }

                    .closing-cta.scaled-in {
                        opacity: 1;
                        transform: scale(1);
                    }

                    .closing-cta h3 {
                        font-size: 1.875rem;
                        margin-bottom: 1rem;
                    }

                    .closing-cta p {
                        font-size: 1.125rem;
                        opacity: 0.9;
                        margin-bottom: 1.5rem;
                    }

                    .closing-cta blockquote {
                        font-size: 1.25rem;
                        font-style: italic;
                        border-left: 4px solid var(--gold-thread);
                        padding-left: 1rem;
                        margin-top: 2rem;
                        text-align: left;
                    }

                    @media (max-width: 768px) {
                        .qualification-grid {
                            grid-template-columns: 1fr;
                        }

                        .closing-cta {
                            padding: 2rem;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
