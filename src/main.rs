use log::info;
use yew::prelude::*;

mod config;
mod content;
mod reveal;
mod time_left;
mod viewport;
mod components {
    pub mod countdown;
    pub mod footer;
    pub mod manifesto;
    pub mod particles;
    pub mod why_vote;
}

use components::{
    countdown::Countdown,
    footer::Footer,
    manifesto::Manifesto,
    why_vote::WhyVoteSam,
};

#[function_component]
fn App() -> Html {
    html! {
        <div class="page">
            <Countdown />
            <Manifesto />
            <WhyVoteSam />
            <Footer />

            <style>
                {r#"
                    :root {
                        --carnegie-red: #C41230;
                        --skibo-red: #A6192E;
                        --scots-rose: #EF3A47;
                        --gold-thread: #FDB515;
                        --weaver-blue: #043673;
                        --blue-thread: #1F4C7C;
                        --highlands-blue: #007BC0;
                        --green-thread: #009647;
                        --iron-gray: #6D6E71;
                        --steel-gray: #A2A4A3;
                    }

                    html {
                        scroll-behavior: smooth;
                    }

                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }

                    .page {
                        min-height: 100vh;
                        width: 100%;
                        overflow-x: hidden;
                    }

                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }

                    .section-heading {
                        text-align: center;
                        margin-bottom: 4rem;
                    }

                    .section-heading h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }

                    .section-heading p {
                        font-size: 1.25rem;
                        color: #4b5563;
                        max-width: 48rem;
                        margin: 0 auto;
                    }

                    .reveal-card {
                        opacity: 0;
                        transform: translateY(2rem);
                    }

                    .reveal-card.revealed {
                        opacity: 1;
                        transform: none;
                    }

                    .wave-bottom {
                        clip-path: ellipse(150% 100% at 50% 0%);
                    }

                    .tone-scots-rose { color: var(--scots-rose); }
                    .tone-blue-thread { color: var(--blue-thread); }
                    .tone-weaver-blue { color: var(--weaver-blue); }
                    .tone-gold-thread { color: var(--gold-thread); }
                    .tone-carnegie-red { color: var(--carnegie-red); }
                    .tone-green-thread { color: var(--green-thread); }
                    .tone-highlands-blue { color: var(--highlands-blue); }
                    .tone-muted { color: inherit; }

                    @keyframes pulse {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.5; }
                    }

                    @media (prefers-reduced-motion: reduce) {
                        .reveal-card,
                        .closing-cta {
                            opacity: 1 !important;
                            transform: none !important;
                            transition: none !important;
                        }

                        .particle-layer {
                            display: none;
                        }
                    }
                "#}
            </style>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting campaign page");
    yew::Renderer::<App>::new().render();
}
