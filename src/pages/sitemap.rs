use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const MAIN_PAGES: [(&str, Route); 4] = [
    ("Home", Route::Home),
    ("Services", Route::Services),
    ("About Us", Route::About),
    ("Contact", Route::Contact),
];

const LEGAL_PAGES: [(&str, Route); 2] = [
    ("Privacy Policy", Route::Privacy),
    ("Terms of Service", Route::Terms),
];

#[function_component(Sitemap)]
pub fn sitemap() -> Html {
    html! {
        <div class="sitemap-page">
            <section class="page-hero">
                <h1>{"Sitemap"}</h1>
            </section>

            <section class="sitemap-content">
                <div class="sitemap-group">
                    <h2>{"Pages"}</h2>
                    <ul>
                        { for MAIN_PAGES.iter().map(|(label, route)| html! {
                            <li><Link<Route> to={route.clone()}>{*label}</Link<Route>></li>
                        }) }
                    </ul>
                </div>
                <div class="sitemap-group">
                    <h2>{"Legal"}</h2>
                    <ul>
                        { for LEGAL_PAGES.iter().map(|(label, route)| html! {
                            <li><Link<Route> to={route.clone()}>{*label}</Link<Route>></li>
                        }) }
                    </ul>
                </div>
            </section>

            <style>
                {r#"
                .sitemap-page {
                    background: #f4f7fa;
                    color: #1c2b39;
                    min-height: 70vh;
                }

                .sitemap-page .page-hero {
                    background: linear-gradient(135deg, #0d2137, #16395c);
                    color: #fff;
                    padding: 10rem 2rem 4rem;
                    text-align: center;
                }

                .sitemap-content {
                    max-width: 700px;
                    margin: 0 auto;
                    padding: 3rem 2rem;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }

                .sitemap-group h2 {
                    font-size: 1.3rem;
                    margin-bottom: 1rem;
                    color: #16395c;
                }

                .sitemap-group ul {
                    list-style: none;
                    padding: 0;
                }

                .sitemap-group li {
                    margin-bottom: 0.6rem;
                }

                .sitemap-group a {
                    color: #5a6b7b;
                    text-decoration: none;
                }

                .sitemap-group a:hover {
                    color: #f5a623;
                }

                @media (max-width: 600px) {
                    .sitemap-content {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
