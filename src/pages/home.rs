use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

const HIGHLIGHTS: [(&str, &str, &str); 4] = [
    (
        "truck-icon",
        "Road Transportation",
        "Full and part truckload movements across every major Indian corridor.",
    ),
    (
        "warehouse-icon",
        "Warehousing & Storage",
        "Secure, strategically located warehouses with modern inventory management.",
    ),
    (
        "ship-icon",
        "Ocean & Air Freight",
        "International forwarding by sea and air with door-to-door coordination.",
    ),
    (
        "clock-icon",
        "Express Delivery",
        "Same-day and next-day options in select cities for time-critical cargo.",
    ),
];

const STEPS: [(&str, &str); 3] = [
    (
        "Request a Quote",
        "Tell us what you are shipping, where it is going, and when it needs to arrive.",
    ),
    (
        "We Plan the Route",
        "Our team matches your cargo with the right mode, carrier, and schedule.",
    ),
    (
        "Track to Delivery",
        "Follow your shipment in real time until it is signed for at the destination.",
    ),
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home-page">
            <section class="hero">
                <div class="hero-content fade-up">
                    <h1>{"Logistics That Keeps Your Business Moving"}</h1>
                    <p class="hero-subtitle">
                        {"Transportation and warehousing solutions across India, backed by a decade \
                          of on-time deliveries."}
                    </p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Contact} classes="hero-cta">
                            {"Get a Quote"}
                        </Link<Route>>
                        <Link<Route> to={Route::Services} classes="hero-secondary">
                            {"Explore Services"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <section class="highlights">
                <h2>{"What We Move, and How"}</h2>
                <p class="section-subtitle">
                    {"From single parcels to project cargo, one partner for the whole journey."}
                </p>
                <div class="highlights-grid">
                    { for HIGHLIGHTS.iter().map(|(icon, title, blurb)| html! {
                        <div class="highlight-item">
                            <i class={*icon}></i>
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="how-it-works">
                <h2>{"How It Works"}</h2>
                <p class="section-subtitle">{"Three simple steps from pickup to proof of delivery"}</p>
                <div class="steps-grid">
                    { for STEPS.iter().map(|(title, blurb)| html! {
                        <div class="step">
                            <h3>{*title}</h3>
                            <p>{*blurb}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="home-cta">
                <h2>{"Ready to Ship?"}</h2>
                <p>
                    {"Talk to our logistics experts today, or call us directly at "}
                    <a href={config::PRIMARY_PHONE_URI}>{config::PRIMARY_PHONE}</a>
                    {"."}
                </p>
                <Link<Route> to={Route::Contact} classes="hero-cta">
                    {"Contact Us"}
                </Link<Route>>
            </section>

            <style>
                {r#"
                .home-page {
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
                    animation: fadeUp 0.8s ease forwards;
                }

                .hero {
                    background: linear-gradient(135deg, #0d2137, #16395c);
                    color: #fff;
                    padding: 12rem 2rem 8rem;
                    text-align: center;
                }

                .hero h1 {
                    font-size: 3.2rem;
                    max-width: 800px;
                    margin: 0 auto 1.5rem;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #9fb3c8;
                    max-width: 640px;
                    margin: 0 auto 2.5rem;
                }

                .hero-actions {
                    display: flex;
                    gap: 1rem;
                    justify-content: center;
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

                .hero-secondary {
                    display: inline-block;
                    border: 1px solid rgba(255, 255, 255, 0.4);
                    color: #fff;
                    padding: 0.9rem 2.2rem;
                    border-radius: 8px;
                    text-decoration: none;
                    transition: border-color 0.3s ease;
                }

                .hero-secondary:hover {
                    border-color: #f5a623;
                }

                .highlights,
                .how-it-works {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 4rem 2rem;
                    text-align: center;
                }

                .highlights h2,
                .how-it-works h2 {
                    font-size: 2.2rem;
                    margin-bottom: 0.5rem;
                }

                .section-subtitle {
                    color: #5a6b7b;
                    margin-bottom: 2.5rem;
                }

                .highlights-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .highlight-item {
                    background: #fff;
                    border-radius: 12px;
                    padding: 2rem 1.5rem;
                    box-shadow: 0 8px 24px rgba(13, 33, 55, 0.08);
                }

                .highlight-item h3 {
                    margin: 1rem 0 0.6rem;
                }

                .highlight-item p {
                    color: #5a6b7b;
                    font-size: 0.95rem;
                    line-height: 1.6;
                }

                .steps-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    counter-reset: step;
                }

                .step {
                    background: #fff;
                    border-radius: 12px;
                    padding: 2rem;
                    box-shadow: 0 8px 24px rgba(13, 33, 55, 0.08);
                    counter-increment: step;
                }

                .step h3::before {
                    content: counter(step) ". ";
                    color: #f5a623;
                }

                .step p {
                    color: #5a6b7b;
                    line-height: 1.6;
                    margin-top: 0.6rem;
                }

                .home-cta {
                    background: #0d2137;
                    color: #fff;
                    text-align: center;
                    padding: 4rem 2rem;
                }

                .home-cta h2 {
                    font-size: 2.2rem;
                    margin-bottom: 0.75rem;
                }

                .home-cta p {
                    color: #9fb3c8;
                    margin-bottom: 2rem;
                }

                .home-cta a[href^="tel:"] {
                    color: #f5a623;
                    text-decoration: none;
                }

                @media (max-width: 900px) {
                    .highlights-grid {
                        grid-template-columns: 1fr 1fr;
                    }

                    .steps-grid {
                        grid-template-columns: 1fr;
                    }

                    .hero h1 {
                        font-size: 2.4rem;
                    }
                }

                @media (max-width: 600px) {
                    .highlights-grid {
                        grid-template-columns: 1fr;
                    }

                    .hero-actions {
                        flex-direction: column;
                        align-items: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
