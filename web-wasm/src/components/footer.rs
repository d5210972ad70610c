//! Footer: social links and the copyright line

use leptos::prelude::*;

use portfolio_common::ContentStore;

use crate::components::icons::SocialIcon;

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<ContentStore>();
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-inner">
                    <div>
                        <h3>"Portfolio"</h3>
                        <p class="footer-tagline">"Showcasing my work and skills"</p>
                    </div>

                    <div class="footer-socials">
                        {content
                            .socials
                            .into_iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=social.name.clone()
                                    >
                                        <SocialIcon icon=social.icon name=social.name.clone() />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <div class="footer-copyright">
                    <p>{format!("© {year} All Rights Reserved. Designed & Developed with ❤️")}</p>
                </div>
            </div>
        </footer>
    }
}
