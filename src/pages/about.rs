use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const STATS: [(&str, &str); 4] = [
    ("10+", "Years in Business"),
    ("4", "Branch Offices"),
    ("500+", "Fleet Vehicles"),
    ("25,000+", "Shipments a Year"),
];

const VALUES: [(&str, &str); 3] = [
    (
        "Reliability",
        "Committed schedules, honest updates, and shipments that arrive when promised.",
    ),
    (
        "Efficiency",
        "Route planning and consolidation that keep costs down without cutting corners.",
    ),
    (
        "Customer Satisfaction",
        "A named coordinator for every account, reachable when it matters.",
    ),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <div class="about-page">
            <section class="page-hero">
                <div class="hero-content fade-up">
                    <h1>{"About Us"}</h1>
                    <p>{"A decade of moving India's freight, one commitment at a time"}</p>
                </div>
            </section>

            <section class="story">
                <div class="story-content fade-up">
                    <h2>{"Our Story"}</h2>
                    <p>
                        {"Shree Ashtavinayak Logistics started with two trucks and a promise: treat \
                          every consignment as if it were our own. Today we run a pan-India network \
                          of road, ocean, and air services from our head office in Mumbai and branch \
                          offices in Delhi, Bangalore, and Chennai."}
                    </p>
                    <p>
                        {"The promise hasn't changed. Whether it is a single express parcel or a \
                          multi-modal project movement, the same planning discipline and the same \
                          accountability apply."}
                    </p>
                </div>
                <div class="stats-grid">
                    { for STATS.iter().map(|(figure, label)| html! {
                        <div class="stat">
                            <span class="stat-figure">{*figure}</span>
                            <span class="stat-label">{*label}</span>
                        </div>
                    }) }
                </div>
            </section>

            <section class="values">
                <h2>{"What We Stand For"}</h2>
                <div class="values-grid">
                    { for VALUES.iter().map(|(title, blurb)| html! {
                        <div class="value-card">
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="about-cta">
                <h2>{"Work With Us"}</h2>
                <Link<Route> to={Route::Contact} classes="hero-cta">
                    {"Get in Touch"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .about-page {
                    background: #f4f7fa;
                    color: #1c2b39;
                }

                @keyframes fadeUp {
                    from {
                        opacity: 0;
                        transform: translateY(30px);
                    }
                    to {
                        opacity: 1;
                        transform: translateY(0);
                    }
                }

                .fade-up {
                    opacity: 0;
                    animation: fadeUp 0.6s ease forwards;
                }

                .page-hero {
                    background: linear-gradient(135deg, #0d2137, #16395c);
                    color: #fff;
                    padding: 10rem 2rem 6rem;
                    text-align: center;
                }

                .page-hero h1 {
                    font-size: 3rem;
                    margin-bottom: 1rem;
                }

                .page-hero p {
                    font-size: 1.2rem;
                    color: #9fb3c8;
                }

                .story {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                }

                .story h2 {
                    font-size: 2.2rem;
                    margin-bottom: 1rem;
                }

                .story p {
                    color: #5a6b7b;
                    line-height: 1.8;
                    margin-bottom: 1rem;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                    margin-top: 2.5rem;
                }

                .stat {
                    background: #fff;
                    border-radius: 12px;
                    padding: 1.75rem 1rem;
                    text-align: center;
                    box-shadow: 0 8px 24px rgba(13, 33, 55, 0.08);
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }

                .stat-figure {
                    font-size: 1.8rem;
                    font-weight: 700;
                    color: #f5a623;
                }

                .stat-label {
                    color: #5a6b7b;
                    font-size: 0.9rem;
                }

                .values {
                    max-width: 1000px;
                    margin: 0 auto;
                    padding: 1rem 2rem 4rem;
                    text-align: center;
                }

                .values h2 {
                    font-size: 2.2rem;
                    margin-bottom: 2rem;
                }

                .values-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    text-align: left;
                }

                .value-card {
                    background: #fff;
                    border-radius: 12px;
                    padding: 2rem;
                    box-shadow: 0 8px 24px rgba(13, 33, 55, 0.08);
                }

                .value-card h3 {
                    color: #16395c;
                    margin-bottom: 0.6rem;
                }

                .value-card p {
                    color: #5a6b7b;
                    line-height: 1.6;
                }

                .about-cta {
                    background: #0d2137;
                    color: #fff;
                    text-align: center;
                    padding: 4rem 2rem;
                }

                .about-cta h2 {
                    font-size: 2.2rem;
                    margin-bottom: 1.5rem;
                }

                .hero-cta {
                    display: inline-block;
                    background: #f5a623;
                    color: #0d2137;
                    padding: 0.9rem 2.2rem;
                    border-radius: 8px;
                    font-weight: 700;
                    text-decoration: none;
                    transition: background 0.3s ease;
                }

                .hero-cta:hover {
                    background: #ffb84d;
                }

                @media (max-width: 900px) {
                    .stats-grid {
                        grid-template-columns: 1fr 1fr;
                    }

                    .values-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
