use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::config;
use crate::content::{Icon, SOCIAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    let current_year = Local::now().year();
    let mailto = format!("mailto:{}", config::CONTACT_EMAIL);

    html! {
        <footer class="site-footer">
            <div class="footer-inner">
                <h3>{"Vote Samuel for Guild President"}</h3>
                <p class="footer-tagline">
                    {"Together, we can build a better CMU Africa for everyone."}
                </p>

                <div class="footer-social">
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href} aria-label={link.label}>
                            <span class={link.icon.tone()}>{ link.icon.glyph() }</span>
                        </a>
                    }) }
                    <a href={mailto} aria-label="Email">
                        <span class={Icon::Mail.tone()}>{ Icon::Mail.glyph() }</span>
                    </a>
                </div>

                <div class="footer-legal">
                    <p>{format!("© {} Sam for Guild President. All rights reserved.", current_year)}</p>
                    <p class="footer-hosting">
                        {format!("Hosted on {} | Paid for by Students Supporting Sam", config::SITE_HOST)}
                    </p>
                </div>
            </div>

            <style>
                {r#"
                    .site-footer {
                        background: var(--iron-gray);
                        color: #fff;
                        padding: 3rem 0;
                    }

                    .footer-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        text-align: center;
                    }

                    .footer-inner h3 {
                        font-size: 1.875rem;
                        margin-bottom: 1rem;
                    }

                    .footer-tagline {
                        color: #d1d5db;
                        font-size: 1.125rem;
                        margin-bottom: 2rem;
                    }

                    .footer-social {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-bottom: 2rem;
                    }

                    .footer-social a {
                        color: #d1d5db;
                        font-size: 1.5rem;
                        text-decoration: none;
                        transition: color 0.2s;
                    }

                    .footer-social a:hover {
                        color: var(--gold-thread);
                    }

                    .footer-legal {
                        border-top: 1px solid var(--steel-gray);
                        padding-top: 2rem;
                        color: #d1d5db;
                    }

                    .footer-hosting {
                        font-size: 0.875rem;
                    }
                "#}
            </style>
        </footer>
    }
}
